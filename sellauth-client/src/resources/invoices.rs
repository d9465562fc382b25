//! Invoices and their lifecycle actions.

use std::fmt::Display;

use super::{Resource, shop_path};
use crate::{ApiClient, DecodedBody, Result};

/// `/v1/shops/{shop_id}/invoices` endpoints.
#[derive(Debug, Clone)]
pub struct Invoices {
    client: ApiClient,
}

impl Resource for Invoices {
    const NAME: &'static str = "invoices";

    fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Invoices {
    /// List invoices, optionally filtered.
    pub async fn list(
        &self,
        shop_id: impl Display,
        params: &[(&str, &str)],
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/invoices", shop_path(shop_id)))
            .queries(params.iter().copied())
            .send()
            .await
    }

    /// Get a single invoice.
    pub async fn get(
        &self,
        shop_id: impl Display,
        invoice_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/invoices/{}", shop_path(shop_id), invoice_id))
            .send()
            .await
    }

    /// Cancel a pending invoice.
    pub async fn cancel(
        &self,
        shop_id: impl Display,
        invoice_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/invoices/{}/cancel", shop_path(shop_id), invoice_id))
            .send()
            .await
    }

    /// Refund a completed invoice.
    pub async fn refund(
        &self,
        shop_id: impl Display,
        invoice_id: impl Display,
    ) -> Result<DecodedBody> {
        self.client
            .get(format!("{}/invoices/{}/refund", shop_path(shop_id), invoice_id))
            .send()
            .await
    }
}
