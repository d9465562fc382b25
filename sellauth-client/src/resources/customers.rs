//! Customers who bought from a shop.

use std::fmt::Display;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/customers` endpoints.
#[derive(Debug, Clone)]
pub struct Customers {
    client: ApiClient,
}

impl Resource for Customers {
    const NAME: &'static str = "customers";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Customers {
    /// List customers, optionally filtered.
    pub async fn list(
        &self,
        shop_id: impl Display,
        params: &[(&str, &str)],
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/customers", shop_path(shop_id)))
            .queries(params.iter().copied())
            .send()
            .await
    }

    /// Get a single customer.
    pub async fn get(
        &self,
        shop_id: impl Display,
        customer_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/customers/{}", shop_path(shop_id), customer_id))
            .send()
            .await
    }
}
