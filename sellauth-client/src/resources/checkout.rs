//! Checkout sessions.

use std::fmt::Display;

use serde_json::Value;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/checkout` endpoint.
#[derive(Debug, Clone)]
pub struct Checkout {
    client: ApiClient,
}

impl Resource for Checkout {
    const NAME: &'static str = "checkout";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Checkout {
    /// Create a checkout session for a cart.
    pub async fn create(&self, shop_id: impl Display, data: &Value) -> Result<DecodedBody> {
        self.client
            .post(format!("{}/checkout", shop_path(shop_id)))
            .json(data)
            .send()
            .await
    }
}
