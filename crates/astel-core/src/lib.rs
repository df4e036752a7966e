//! ASTEL Site Core
//!
//! Platform-independent pieces of the marketing site: the static catalogs,
//! the site configuration, the page state machine, and the quote form with
//! its `mailto:` handoff. Nothing in here touches the DOM, so the whole
//! crate is testable natively.

pub mod catalog;
pub mod config;
pub mod inquiry;
pub mod page;

use thiserror::Error;

pub use catalog::{ContactInfo, EventRecord, ProductCategory, ProductRecord};
pub use config::{SiteConfig, SiteSettings};
pub use inquiry::{
    FormField, FormState, Inquiry, MailHandoff, MailtoLink, QuoteForm, TopicOption,
};
pub use page::{PageState, Section};

/// Topic used for every event-driven inquiry.
pub const OTHER_TOPIC: &str = "Other";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(FormField),

    #[error("Mail handoff failed: {0}")]
    Handoff(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
