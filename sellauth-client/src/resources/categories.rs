//! Product categories.

use std::fmt::Display;

use serde_json::Value;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/categories` endpoints.
#[derive(Debug, Clone)]
pub struct Categories {
    client: ApiClient,
}

impl Resource for Categories {
    const NAME: &'static str = "categories";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Categories {
    pub async fn list(&self, shop_id: impl Display) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/categories", shop_path(shop_id)))
            .send()
            .await
    }

    pub async fn create(&self, shop_id: impl Display, data: &Value) -> Result<DecodedBody> {
        self.client
            .post(format!("{}/categories", shop_path(shop_id)))
            .json(data)
            .send()
            .await
    }

    pub async fn update(
        &self,
        shop_id: impl Display,
        category_id: impl Display,
        data: &Value,
    ) -> Result<DecodedBody> {
        self.client
            .put(format!("{}/categories/{}/update", shop_path(shop_id), category_id))
            .json(data)
            .send()
            .await
    }

    pub async fn delete(
        &self,
        shop_id: impl Display,
        category_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .delete(format!("{}/categories/{}", shop_path(shop_id), category_id))
            .send()
            .await
    }
}
