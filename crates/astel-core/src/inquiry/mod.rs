//! Quote / meeting-request form
//!
//! The form owns its field values, reconciles them against the page's
//! pre-fill signals, and on submit turns them into an [`Inquiry`] that is
//! handed to the platform mail client as a `mailto:` link.

pub mod compose;
pub mod form;
pub mod mailto;

pub use compose::Inquiry;
pub use form::{FormField, FormState, Prefill, QuoteForm};
pub use mailto::{MailHandoff, MailtoLink};

use crate::catalog::ProductRecord;
use crate::OTHER_TOPIC;

/// One entry of the topic select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOption {
    pub value: String,
    pub label: String,
}

/// Topic choices: a blank placeholder, one per product, then "Other".
pub fn topic_options(products: &[ProductRecord]) -> Vec<TopicOption> {
    let mut options = Vec::with_capacity(products.len() + 2);
    options.push(TopicOption {
        value: String::new(),
        label: "Select a topic...".to_string(),
    });
    options.extend(products.iter().map(|p| TopicOption {
        value: p.name.clone(),
        label: p.topic_label(),
    }));
    options.push(TopicOption {
        value: OTHER_TOPIC.to_string(),
        label: "Other / General Inquiry / Meeting".to_string(),
    });
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteConfig;

    #[test]
    fn test_topic_options_follow_catalog() {
        let config = SiteConfig::builtin().unwrap();
        let options = topic_options(&config.products);

        assert_eq!(options.len(), config.products.len() + 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options.last().unwrap().value, OTHER_TOPIC);

        // Every product name is selectable, so "Request Pricing" always
        // lands on a real option.
        for product in &config.products {
            assert!(options.iter().any(|o| o.value == product.name));
        }
        assert!(options
            .iter()
            .any(|o| o.label == "RFA-1717DIC (AC) (Static)"));
    }
}
