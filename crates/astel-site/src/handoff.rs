//! Browser side effects: mail handoff and smooth scrolling

use astel_core::{MailHandoff, MailtoLink, Section, SiteError, SiteResult};
use leptos::*;

/// Navigates the current window to the `mailto:` link, which opens the
/// platform's registered mail client.
pub struct BrowserMailHandoff;

impl MailHandoff for BrowserMailHandoff {
    fn hand_off(&self, link: &MailtoLink) -> SiteResult<()> {
        window()
            .location()
            .set_href(&link.to_uri())
            .map_err(|err| SiteError::Handoff(format!("{err:?}")))
    }
}

/// Smooth-scroll a section into view. Missing sections are ignored.
pub fn scroll_to_section(section: Section) {
    let Some(element) = document().get_element_by_id(section.id()) else {
        tracing::debug!("Section #{} not rendered, skipping scroll", section.id());
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
