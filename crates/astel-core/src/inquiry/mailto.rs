//! `mailto:` links and the handoff seam

use crate::SiteResult;

/// A mail-composition URI with percent-encoded subject and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    to: String,
    subject: String,
    body: String,
}

impl MailtoLink {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl std::fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Hands a composed message to whatever mail client the platform has.
///
/// Success only means the handoff was issued; delivery is never observable.
pub trait MailHandoff {
    fn hand_off(&self, link: &MailtoLink) -> SiteResult<()>;
}
