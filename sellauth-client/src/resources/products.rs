//! Product catalogue.

use std::fmt::Display;

use serde_json::Value;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/products` endpoints.
#[derive(Debug, Clone)]
pub struct Products {
    client: ApiClient,
}

impl Resource for Products {
    const NAME: &'static str = "products";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Products {
    /// List products, optionally filtered (`page`, `perPage`, `name`, ...).
    pub async fn list(
        &self,
        shop_id: impl Display,
        params: &[(&str, &str)],
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/products", shop_path(shop_id)))
            .queries(params.iter().copied())
            .send()
            .await
    }

    /// Get a single product.
    pub async fn get(
        &self,
        shop_id: impl Display,
        product_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/products/{}", shop_path(shop_id), product_id))
            .send()
            .await
    }

    /// Create a product.
    pub async fn create(&self, shop_id: impl Display, data: &Value) -> Result<DecodedBody> {
        self.client
            .post(format!("{}/products", shop_path(shop_id)))
            .json(data)
            .send()
            .await
    }

    /// Update a product.
    pub async fn update(
        &self,
        shop_id: impl Display,
        product_id: impl Display,
        data: &Value,
    ) -> Result<DecodedBody> {
        self.client
            .put(format!("{}/products/{}/update", shop_path(shop_id), product_id))
            .json(data)
            .send()
            .await
    }

    /// Delete a product.
    pub async fn delete(
        &self,
        shop_id: impl Display,
        product_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .delete(format!("{}/products/{}", shop_path(shop_id), product_id))
            .send()
            .await
    }
}
