//! Discount coupons.

use std::fmt::Display;

use serde_json::Value;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/coupons` endpoints.
#[derive(Debug, Clone)]
pub struct Coupons {
    client: ApiClient,
}

impl Resource for Coupons {
    const NAME: &'static str = "coupons";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Coupons {
    pub async fn list(&self, shop_id: impl Display) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/coupons", shop_path(shop_id)))
            .send()
            .await
    }

    pub async fn create(&self, shop_id: impl Display, data: &Value) -> Result<DecodedBody> {
        self.client
            .post(format!("{}/coupons", shop_path(shop_id)))
            .json(data)
            .send()
            .await
    }

    pub async fn update(
        &self,
        shop_id: impl Display,
        coupon_id: impl Display,
        data: &Value,
    ) -> Result<DecodedBody> {
        self.client
            .put(format!("{}/coupons/{}/update", shop_path(shop_id), coupon_id))
            .json(data)
            .send()
            .await
    }

    pub async fn delete(
        &self,
        shop_id: impl Display,
        coupon_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .delete(format!("{}/coupons/{}", shop_path(shop_id), coupon_id))
            .send()
            .await
    }
}
