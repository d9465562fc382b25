//! # SellAuth Client
//!
//! Bearer-token client for the SellAuth REST API. Every call goes through a
//! single dispatcher that attaches the fixed authentication headers, sends one
//! request and normalizes the outcome into a [`DecodedBody`] or a
//! [`SellAuthError`].
//!
//! ## Features
//!
//! - **Generic dispatch**: GET, POST, PUT and DELETE against any endpoint
//! - **Normalized bodies**: JSON is decoded, anything else comes back as text
//! - **Typed errors**: transport failures and `HTTP <status>: <message>` errors
//! - **Resource modules**: shops, products, invoices and more, attached at construction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sellauth_client::{ApiMethod, SellAuthClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SellAuthClient::new("sk_live_...")?;
//!
//!     let shops = client.request(ApiMethod::Get, "/v1/shops", None, None).await?;
//!     println!("{:?}", shops);
//!
//!     let products = client.products.list(42, &[("page", "1")]).await?;
//!     println!("{:?}", products);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use sellauth_client::{SellAuthClient, SellAuthError};
//!
//! # async fn run(client: SellAuthClient) {
//! match client.shops.get(42).await {
//!     Ok(shop) => println!("{:?}", shop),
//!     Err(SellAuthError::Status { status: 404, .. }) => println!("no such shop"),
//!     Err(e) if e.is_transport() => eprintln!("network problem: {}", e),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # }
//! ```

mod client;
mod config;
mod error;
mod method;
mod request;
mod response;
mod sellauth;

pub mod resources;

pub use client::ApiClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Result, SellAuthError};
pub use method::ApiMethod;
pub use request::RequestBuilder;
pub use response::DecodedBody;
pub use sellauth::SellAuthClient;

// Re-export common types
pub use http::StatusCode;
pub use serde_json::{Value, json};
pub use sellauth_config::ClientSettings;

/// Prelude for common imports.
///
/// ```
/// use sellauth_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::ApiClient;
    pub use crate::config::{ClientConfig, ClientConfigBuilder};
    pub use crate::error::{Result, SellAuthError};
    pub use crate::method::ApiMethod;
    pub use crate::request::RequestBuilder;
    pub use crate::resources::Resource;
    pub use crate::response::DecodedBody;
    pub use crate::sellauth::SellAuthClient;
}
