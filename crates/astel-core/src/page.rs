//! Page-level UI state
//!
//! Everything the page tracks between renders lives in [`PageState`]. The
//! browser layer only forwards events into these methods and performs the
//! side effects they ask for.

use crate::catalog::{visible_events, EventRecord, ProductRecord};
use crate::OTHER_TOPIC;

/// Anchored sections of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Products,
    Events,
    Quote,
    Contact,
}

impl Section {
    /// Plain navigation links, in display order
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Products,
        Section::Events,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Products => "products",
            Section::Events => "events",
            Section::Quote => "quote",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Products",
            Section::Events => "Events",
            Section::Quote => "Get a Quote",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub scrolled: bool,
    /// Pre-fill for the form's topic field
    pub active_topic: Option<String>,
    /// Pre-fill for the form's message field
    pub prefill_message: Option<String>,
    pub show_all_events: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns true if the scrolled flag changed
    pub fn on_scroll(&mut self, offset_y: f64, threshold: f64) -> bool {
        let scrolled = offset_y > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_event_visibility(&mut self) {
        self.show_all_events = !self.show_all_events;
    }

    pub fn request_pricing(&mut self, product: &ProductRecord) {
        tracing::debug!(product = %product.name, "Pricing requested");
        self.active_topic = Some(product.name.clone());
    }

    /// Seed the form for an event and return the section to bring into view
    pub fn book_meeting(&mut self, event: &EventRecord) -> Section {
        tracing::debug!(event = %event.title, past = event.is_past, "Event inquiry");
        self.active_topic = Some(OTHER_TOPIC.to_string());
        self.prefill_message = Some(event.inquiry_message());
        Section::Quote
    }

    pub fn visible_events<'a>(&self, events: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        visible_events(events, self.show_all_events)
    }

    pub fn events_heading(&self) -> &'static str {
        if self.show_all_events {
            "All Company Events"
        } else {
            "Upcoming Events"
        }
    }

    pub fn events_toggle_label(&self) -> &'static str {
        if self.show_all_events {
            "View Only Upcoming"
        } else {
            "View All Past Events"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::QuoteForm;
    use crate::SiteConfig;

    fn kimes() -> EventRecord {
        EventRecord {
            id: 1,
            title: "KIMES 2025".to_string(),
            date: "March 14-17, 2025".to_string(),
            location: "COEX, Seoul, Korea".to_string(),
            description: String::new(),
            is_past: false,
        }
    }

    #[test]
    fn test_menu() {
        let mut state = PageState::new();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);

        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_threshold() {
        let mut state = PageState::new();
        assert!(!state.on_scroll(0.0, 20.0));
        assert!(!state.on_scroll(20.0, 20.0));
        assert!(state.on_scroll(20.5, 20.0));
        assert!(state.scrolled);
        assert!(!state.on_scroll(400.0, 20.0));
        assert!(state.on_scroll(3.0, 20.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_event_toggle_matches_filter() {
        let config = SiteConfig::builtin().unwrap();
        let mut state = PageState::new();

        let upcoming = state.visible_events(&config.events);
        assert_eq!(upcoming.len(), 3);
        assert!(upcoming.iter().all(|e| !e.is_past));
        assert_eq!(state.events_heading(), "Upcoming Events");

        state.toggle_event_visibility();
        assert_eq!(state.visible_events(&config.events).len(), config.events.len());
        assert_eq!(state.events_heading(), "All Company Events");
        assert_eq!(state.events_toggle_label(), "View Only Upcoming");
    }

    #[test]
    fn test_request_pricing_scenario() {
        let config = SiteConfig::builtin().unwrap();
        let product = config.products.iter().find(|p| p.id == "DRA1417SC").unwrap();

        let mut state = PageState::new();
        let mut form = QuoteForm::new();
        form.update(crate::FormField::Message, "keep me");

        state.request_pricing(product);
        assert_eq!(state.active_topic.as_deref(), Some("DRA1417SC"));
        assert_eq!(state.prefill_message, None);

        form.sync_topic(state.active_topic.as_deref());
        form.sync_message(state.prefill_message.as_deref());
        assert_eq!(form.fields.topic, "DRA1417SC");
        assert_eq!(form.fields.message, "keep me");
    }

    #[test]
    fn test_book_meeting_scenario() {
        let mut state = PageState::new();
        let target = state.book_meeting(&kimes());

        assert_eq!(target, Section::Quote);
        assert_eq!(state.active_topic.as_deref(), Some("Other"));
        assert_eq!(
            state.prefill_message.as_deref(),
            Some(
                "I would like to request a meeting during KIMES 2025.\nLocation: COEX, Seoul, Korea\nDate: March 14-17, 2025\n\nPlease let me know your available slots."
            )
        );
    }

    #[test]
    fn test_book_meeting_every_builtin_event() {
        let config = SiteConfig::builtin().unwrap();
        for event in &config.events {
            let mut state = PageState::new();
            state.book_meeting(event);
            assert_eq!(state.active_topic.as_deref(), Some(OTHER_TOPIC));

            let msg = state.prefill_message.unwrap();
            assert!(msg.contains(&event.title));
            assert!(msg.contains(&event.date));
            if event.is_past {
                assert!(!msg.contains("Location:"));
            } else {
                assert!(msg.contains(&event.location));
            }
        }
    }

    #[test]
    fn test_user_edit_survives_repeat_booking() {
        let mut state = PageState::new();
        let mut form = QuoteForm::new();

        state.book_meeting(&kimes());
        form.sync_topic(state.active_topic.as_deref());
        form.sync_message(state.prefill_message.as_deref());
        form.update(crate::FormField::Message, "Thursday afternoon works.");

        // Same event again: inputs are unchanged, so the edit stays.
        state.book_meeting(&kimes());
        form.sync_topic(state.active_topic.as_deref());
        form.sync_message(state.prefill_message.as_deref());
        assert_eq!(form.fields.message, "Thursday afternoon works.");

        let mut past = kimes();
        past.is_past = true;
        state.book_meeting(&past);
        form.sync_message(state.prefill_message.as_deref());
        assert!(form.fields.message.starts_with("I am inquiring about the KIMES 2025"));
    }

    #[test]
    fn test_section_links() {
        assert_eq!(Section::Quote.href(), "#quote");
        let ids: Vec<&str> = Section::NAV.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "products", "events", "contact"]);
    }
}
