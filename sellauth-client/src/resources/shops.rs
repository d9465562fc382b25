//! Shops owned by the API key.

use std::fmt::Display;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops` endpoints.
#[derive(Debug, Clone)]
pub struct Shops {
    client: ApiClient,
}

impl Resource for Shops {
    const NAME: &'static str = "shops";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Shops {
    /// List every shop the API key can access.
    pub async fn list(&self) -> Result<DecodedBody> {
        self.client.get("/v1/shops").send().await
    }

    /// Get a single shop.
    pub async fn get(&self, shop_id: impl Display) -> Result<DecodedBody> {
        self.client.get(shop_path(shop_id)).send().await
    }

    /// Get sales statistics for a shop.
    pub async fn stats(&self, shop_id: impl Display) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/stats", shop_path(shop_id)))
            .send()
            .await
    }
}
