//! Site configuration
//!
//! The catalogs and contact record live in `site.toml`, embedded at compile
//! time. Nothing is read at runtime.

use crate::catalog::{ContactInfo, EventRecord, ProductRecord};
use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUILTIN_SITE: &str = include_str!("../site.toml");

/// Presentation and behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub brand: String,
    /// Legal name used in the footer
    pub company: String,
    /// Vertical scroll offset past which the nav bar switches style
    pub scroll_threshold: f64,
    /// Last line of every generated inquiry body
    pub mail_signature: String,
    pub logo_path: String,
    pub product_image_path: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand: "ASTEL".to_string(),
            company: "Astel Co., Ltd.".to_string(),
            scroll_threshold: 20.0,
            mail_signature: "Sent via ASTEL Website Quote Form".to_string(),
            logo_path: "assets/astel-logo.png".to_string(),
            product_image_path: "assets/flat-panel-detector.png".to_string(),
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,
    pub contact: ContactInfo,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl SiteConfig {
    /// Parse and validate a configuration from TOML
    pub fn from_toml(toml_content: &str) -> SiteResult<Self> {
        let config: SiteConfig = toml::from_str(toml_content)?;
        config.validate()?;
        tracing::debug!(
            products = config.products.len(),
            events = config.events.len(),
            "Loaded site configuration"
        );
        Ok(config)
    }

    /// Configuration shipped with the site
    pub fn builtin() -> SiteResult<Self> {
        Self::from_toml(BUILTIN_SITE)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.contact.email.trim().is_empty() {
            return Err(SiteError::Config("contact email is empty".to_string()));
        }

        if !(self.site.scroll_threshold >= 0.0) {
            return Err(SiteError::Config(format!(
                "scroll threshold must be non-negative, got {}",
                self.site.scroll_threshold
            )));
        }

        let mut event_ids = HashSet::new();
        for event in &self.events {
            if !event_ids.insert(event.id) {
                return Err(SiteError::Config(format!("duplicate event id {}", event.id)));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id.as_str()) {
                return Err(SiteError::Config(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;

    const MINIMAL: &str = r#"
        [contact]
        name = "Jane"
        email = "jane@example.com"
        phone = "1"
        fax = "2"
        mobile = "3"
        address = "Street"
    "#;

    #[test]
    fn test_builtin_config() {
        let config = SiteConfig::builtin().unwrap();

        assert_eq!(config.contact.email, "michael1@astel.co.kr");
        assert_eq!(config.site.scroll_threshold, 20.0);
        assert_eq!(config.products.len(), 4);
        assert_eq!(config.events.len(), 5);

        let past: Vec<&str> = config
            .events
            .iter()
            .filter(|e| e.is_past)
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(past, vec!["Hospitalar 2024", "E-HEALTH 2024"]);

        let dic = config.products.iter().find(|p| p.id == "RFA-1717DIC").unwrap();
        assert_eq!(dic.name, "RFA-1717DIC (AC)");
        assert_eq!(dic.category, ProductCategory::Static);
        assert_eq!(dic.features.len(), 3);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.site, SiteSettings::default());
        assert!(config.products.is_empty());
        assert!(config.events.is_empty());
    }

    #[test]
    fn test_partial_site_table() {
        let toml = format!("[site]\nscroll_threshold = 64.0\n{MINIMAL}");
        let config = SiteConfig::from_toml(&toml).unwrap();
        assert_eq!(config.site.scroll_threshold, 64.0);
        assert_eq!(config.site.brand, "ASTEL");
    }

    #[test]
    fn test_rejects_empty_email() {
        let toml = MINIMAL.replace("jane@example.com", " ");
        assert!(matches!(
            SiteConfig::from_toml(&toml),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let toml = format!("[site]\nscroll_threshold = -1.0\n{MINIMAL}");
        assert!(matches!(
            SiteConfig::from_toml(&toml),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_event_ids() {
        let event = r#"
        [[events]]
        id = 7
        title = "Show"
        date = "Today"
        location = "Here"
        description = ""
        "#;
        let toml = format!("{MINIMAL}{event}{event}");
        let err = SiteConfig::from_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("duplicate event id 7"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SiteConfig::from_toml("[contact\nname ="),
            Err(SiteError::Toml(_))
        ));
    }
}
