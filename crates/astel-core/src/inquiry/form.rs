//! Form fields and pre-fill reconciliation

use super::compose::Inquiry;
use crate::SiteResult;

/// Named form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Company,
    Topic,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Company,
        FormField::Topic,
        FormField::Message,
    ];

    /// `name` attribute of the rendered control
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Topic => "product",
            FormField::Message => "message",
        }
    }

    /// Fields carrying a native `required` marker
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::FirstName | FormField::LastName | FormField::Email
        )
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormField::FirstName => write!(f, "First Name"),
            FormField::LastName => write!(f, "Last Name"),
            FormField::Email => write!(f, "Work Email"),
            FormField::Company => write!(f, "Company / Hospital"),
            FormField::Topic => write!(f, "Topic / Product"),
            FormField::Message => write!(f, "Message"),
        }
    }
}

/// Raw field values, all independently editable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub topic: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Topic => &self.topic,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Topic => &mut self.topic,
            FormField::Message => &mut self.message,
        }
    }

    /// Replace one field, leaving every other field untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// First required field that is empty, if any
    pub fn missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|f| f.is_required() && self.get(*f).is_empty())
    }
}

/// Reconciles one field against an externally supplied pre-fill value.
///
/// The field is overwritten only when the incoming value differs from the
/// last one seen and is non-empty, so re-running with unchanged input never
/// clobbers a user edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    last_seen: Option<String>,
}

impl Prefill {
    /// Returns true if the field was overwritten
    pub fn reconcile(&mut self, incoming: Option<&str>, field: &mut String) -> bool {
        if self.last_seen.as_deref() == incoming {
            return false;
        }
        self.last_seen = incoming.map(str::to_string);

        match incoming {
            Some(value) if !value.is_empty() => {
                *field = value.to_string();
                true
            }
            _ => false,
        }
    }
}

/// Form state plus its two pre-fill rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub fields: FormState,
    topic_prefill: Prefill,
    message_prefill: Prefill,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn sync_topic(&mut self, default_interest: Option<&str>) -> bool {
        self.topic_prefill
            .reconcile(default_interest, &mut self.fields.topic)
    }

    pub fn sync_message(&mut self, initial_message: Option<&str>) -> bool {
        self.message_prefill
            .reconcile(initial_message, &mut self.fields.message)
    }

    /// Build the outgoing inquiry; fails if a required field is empty
    pub fn submit(&self) -> SiteResult<Inquiry> {
        Inquiry::from_form(&self.fields)
    }
}
