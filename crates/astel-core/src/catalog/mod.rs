//! Static catalog records
//!
//! Events, products and the contact record are loaded once from the site
//! configuration and never mutated afterwards.

pub mod events;
pub mod products;

pub use events::{visible_events, EventRecord};
pub use products::{ProductCategory, ProductRecord};

use serde::{Deserialize, Serialize};

/// The single contact record, used for display and as the mail destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub fax: String,
    pub mobile: String,
    pub address: String,
}

impl ContactInfo {
    /// Plain `mailto:` link without subject or body
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
