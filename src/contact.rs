//! Contact form
//!
//! The form collects a name, an email and a message but has no submission
//! endpoint. Submitting is a no-op that leaves the fields as typed.

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const EMAIL_PLACEHOLDER: &str = "your.email@example.com";
pub const MESSAGE_PLACEHOLDER: &str = "Your message...";

/// Result of pressing "Send Message"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No backend is wired up; nothing was sent
    NoEndpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.message.trim().is_empty()
    }

    pub fn submit(&self) -> SubmitOutcome {
        tracing::info!(
            blank = self.is_blank(),
            "contact form submitted; no submission endpoint configured"
        );
        SubmitOutcome::NoEndpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keeps_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        let before = form.clone();
        assert_eq!(form.submit(), SubmitOutcome::NoEndpoint);
        assert_eq!(form, before);
    }

    #[test]
    fn test_blank_form() {
        let mut form = ContactForm::new();
        assert!(form.is_blank());
        form.message = "  hi ".into();
        assert!(!form.is_blank());
    }
}
