//! Resource modules attached to [`SellAuthClient`](crate::SellAuthClient).
//!
//! Each module is a thin wrapper that fills in endpoint templates and hands
//! the call to the shared [`ApiClient`](crate::ApiClient) dispatcher.

mod blacklist;
mod categories;
mod checkout;
mod coupons;
mod customers;
mod invoices;
mod products;
mod shops;

pub use blacklist::Blacklist;
pub use categories::Categories;
pub use checkout::Checkout;
pub use coupons::Coupons;
pub use customers::Customers;
pub use invoices::Invoices;
pub use products::Products;
pub use shops::Shops;

use crate::ApiClient;

/// A resource module that can be attached to the client.
pub trait Resource: Sized {
    /// Registry name under which the module is exposed.
    const NAME: &'static str;

    /// Create the module around a dispatcher handle.
    fn new(client: ApiClient) -> Self;
}

/// Path prefix for everything scoped to one shop.
fn shop_path(shop_id: impl std::fmt::Display) -> String {
    format!("/v1/shops/{}", shop_id)
}
