//! Trade show events

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u32,
    pub title: String,
    /// Display string, e.g. "March 14-17, 2025"
    pub date: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub is_past: bool,
}

impl EventRecord {
    /// Message seeded into the quote form when this event's action is used
    pub fn inquiry_message(&self) -> String {
        if self.is_past {
            format!(
                "I am inquiring about the {} event held on {} and would like to receive \
                 follow-up information or materials from that show.",
                self.title, self.date
            )
        } else {
            format!(
                "I would like to request a meeting during {}.\nLocation: {}\nDate: {}\n\n\
                 Please let me know your available slots.",
                self.title, self.location, self.date
            )
        }
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_past {
            "Inquire for Details"
        } else {
            "Book Meeting"
        }
    }
}

/// Events shown for the given toggle: upcoming only, or everything.
pub fn visible_events(events: &[EventRecord], show_all: bool) -> Vec<&EventRecord> {
    events.iter().filter(|e| show_all || !e.is_past).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u32, title: &str, is_past: bool) -> EventRecord {
        EventRecord {
            id,
            title: title.to_string(),
            date: "Jan 1-2, 2025".to_string(),
            location: "Somewhere".to_string(),
            description: String::new(),
            is_past,
        }
    }

    #[test]
    fn test_visible_events_filter() {
        let events = vec![
            event(1, "A", false),
            event(2, "B", true),
            event(3, "C", false),
            event(4, "D", true),
        ];

        let upcoming = visible_events(&events, false);
        let ids: Vec<u32> = upcoming.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(upcoming.iter().all(|e| !e.is_past));

        let all = visible_events(&events, true);
        assert_eq!(all.len(), events.len());
        assert!(all.iter().zip(events.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_visible_events_empty() {
        assert!(visible_events(&[], false).is_empty());
        assert!(visible_events(&[], true).is_empty());
    }

    #[test]
    fn test_upcoming_message() {
        let kimes = EventRecord {
            id: 1,
            title: "KIMES 2025".to_string(),
            date: "March 14-17, 2025".to_string(),
            location: "COEX, Seoul, Korea".to_string(),
            description: String::new(),
            is_past: false,
        };
        assert_eq!(
            kimes.inquiry_message(),
            "I would like to request a meeting during KIMES 2025.\n\
             Location: COEX, Seoul, Korea\n\
             Date: March 14-17, 2025\n\n\
             Please let me know your available slots."
        );
        assert_eq!(kimes.action_label(), "Book Meeting");
    }

    #[test]
    fn test_past_message_has_no_location() {
        let mut past = event(9, "Hospitalar 2024", true);
        past.date = "May 21-24, 2024".to_string();
        past.location = "São Paulo, Brazil".to_string();

        let msg = past.inquiry_message();
        assert_eq!(
            msg,
            "I am inquiring about the Hospitalar 2024 event held on May 21-24, 2024 and \
             would like to receive follow-up information or materials from that show."
        );
        assert!(!msg.contains("Location:"));
        assert!(!msg.contains("São Paulo"));
        assert_eq!(past.action_label(), "Inquire for Details");
    }
}
