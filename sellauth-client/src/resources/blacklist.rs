//! Blocked emails, IPs and countries.

use std::fmt::Display;

use serde_json::Value;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/blacklist` endpoints.
#[derive(Debug, Clone)]
pub struct Blacklist {
    client: ApiClient,
}

impl Resource for Blacklist {
    const NAME: &'static str = "blacklist";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Blacklist {
    pub async fn list(&self, shop_id: impl Display) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/blacklist", shop_path(shop_id)))
            .send()
            .await
    }

    /// Block a value; `data` carries `value`, `type` and an optional `reason`.
    pub async fn create(&self, shop_id: impl Display, data: &Value) -> Result<DecodedBody> {
        self.client
            .post(format!("{}/blacklist", shop_path(shop_id)))
            .json(data)
            .send()
            .await
    }

    pub async fn delete(
        &self,
        shop_id: impl Display,
        entry_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .delete(format!("{}/blacklist/{}", shop_path(shop_id), entry_id))
            .send()
            .await
    }
}
