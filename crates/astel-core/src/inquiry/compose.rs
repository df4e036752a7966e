//! Subject and body formatting

use super::form::FormState;
use super::mailto::MailtoLink;
use crate::{SiteError, SiteResult};

const DEFAULT_TOPIC: &str = "General";

/// A submitted inquiry, ready to be formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub topic: String,
    pub message: String,
}

impl Inquiry {
    pub fn from_form(form: &FormState) -> SiteResult<Self> {
        if let Some(field) = form.missing_required() {
            return Err(SiteError::MissingField(field));
        }

        Ok(Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            company: form.company.clone(),
            topic: form.topic.clone(),
            message: form.message.clone(),
        })
    }

    pub fn subject(&self) -> String {
        let topic = if self.topic.is_empty() {
            DEFAULT_TOPIC
        } else {
            &self.topic
        };
        format!("Inquiry: {topic}")
    }

    pub fn body(&self, signature: &str) -> String {
        format!(
            "Name: {} {}\n\
             Email: {}\n\
             Company: {}\n\
             Interest: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             --\n\
             {}\n",
            self.first_name,
            self.last_name,
            self.email,
            self.company,
            self.topic,
            self.message,
            signature
        )
    }

    pub fn to_mailto(&self, to: &str, signature: &str) -> MailtoLink {
        MailtoLink::new(to, self.subject(), self.body(signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::FormField;

    fn filled(topic: &str) -> FormState {
        let mut form = FormState::default();
        form.set(FormField::FirstName, "Jane");
        form.set(FormField::LastName, "Park");
        form.set(FormField::Email, "jane@clinic.org");
        form.set(FormField::Company, "Seoul Clinic");
        form.set(FormField::Topic, topic);
        form.set(FormField::Message, "Two units, please.\nDelivery by May.");
        form
    }

    #[test]
    fn test_subject() {
        let inquiry = Inquiry::from_form(&filled("DRA1417SC")).unwrap();
        assert_eq!(inquiry.subject(), "Inquiry: DRA1417SC");

        let general = Inquiry::from_form(&filled("")).unwrap();
        assert_eq!(general.subject(), "Inquiry: General");
    }

    #[test]
    fn test_body_layout() {
        let inquiry = Inquiry::from_form(&filled("Other")).unwrap();
        assert_eq!(
            inquiry.body("Sent via ASTEL Website Quote Form"),
            "Name: Jane Park\n\
             Email: jane@clinic.org\n\
             Company: Seoul Clinic\n\
             Interest: Other\n\
             \n\
             Message:\n\
             Two units, please.\n\
             Delivery by May.\n\
             \n\
             --\n\
             Sent via ASTEL Website Quote Form\n"
        );
    }

    #[test]
    fn test_body_field_order() {
        let inquiry = Inquiry::from_form(&filled("RFA-1717MC")).unwrap();
        let body = inquiry.body("sig");

        let values = [
            "Jane Park",
            "jane@clinic.org",
            "Seoul Clinic",
            "RFA-1717MC",
            "Two units, please.",
        ];
        let mut cursor = 0;
        for value in values {
            assert_eq!(body.matches(value).count(), 1, "{value} repeated");
            let pos = body.find(value).unwrap();
            assert!(pos >= cursor, "{value} out of order");
            cursor = pos;
        }
    }

    #[test]
    fn test_company_optional() {
        let mut form = filled("");
        form.set(FormField::Company, "");
        let inquiry = Inquiry::from_form(&form).unwrap();
        assert!(inquiry.body("sig").contains("Company: \n"));
    }
}
