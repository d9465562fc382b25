// SellAuth - An async client for the SellAuth REST API
//
// This library bundles the HTTP client with its configuration loader and
// optional environment-driven logging setup.

// Re-export client functionality
pub use sellauth_client::*;

// Re-export configuration loading
pub use sellauth_config as config;

// Re-export optional crates
#[cfg(feature = "log")]
pub use sellauth_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ApiClient,
        ApiMethod,
        ClientConfig,
        ClientSettings,
        DecodedBody,
        RequestBuilder,
        Result,
        SellAuthClient,
        SellAuthError,
        Value,
        json,
        resources::Resource,
    };
}
