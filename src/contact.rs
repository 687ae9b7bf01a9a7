//! The contact form opens the visitor's mail client; nothing is sent from
//! the site itself.

use thiserror::Error;

use crate::profile::EMAIL;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
}

/// A validated name/email pair from the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    name: String,
    email: String,
}

impl Inquiry {
    pub fn new(name: &str, email: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn subject(&self) -> String {
        format!("Job Opportunity Inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Hello Mayank,\n\nMy name is {}.\nYou can reach me at {}.\n\nI came across your portfolio...",
            self.name, self.email
        )
    }

    /// `mailto:` link with the subject and body percent-encoded.
    pub fn mailto_href(&self) -> String {
        format!(
            "mailto:{EMAIL}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_is_percent_encoded() {
        let inquiry = Inquiry::new("Ada Lovelace", "ada@example.com").unwrap();
        let href = inquiry.mailto_href();
        assert!(href.starts_with("mailto:mayankmehra6497678@gmail.com?subject="));
        assert!(href.contains("subject=Job%20Opportunity%20Inquiry%20from%20Ada%20Lovelace"));
        assert!(href.contains("&body=Hello%20Mayank%2C%0A%0AMy%20name%20is%20Ada%20Lovelace."));
        assert!(href.contains("ada%40example.com"));
        // only one raw '&' separating the two parameters
        assert_eq!(href.matches('&').count(), 1);
    }

    #[test]
    fn test_special_characters_cannot_break_out() {
        let inquiry = Inquiry::new("Tom & Jerry?", "t@x.io").unwrap();
        let href = inquiry.mailto_href();
        assert!(href.contains("Tom%20%26%20Jerry%3F"));
        assert_eq!(href.matches('?').count(), 1);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let inquiry = Inquiry::new("  Ada ", " ada@example.com\n").unwrap();
        assert_eq!(inquiry.subject(), "Job Opportunity Inquiry from Ada");
        assert!(inquiry.body().contains("My name is Ada.\n"));
        assert!(inquiry.body().contains("reach me at ada@example.com."));
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(Inquiry::new("", "a@b.c"), Err(ContactError::MissingName));
        assert_eq!(Inquiry::new("   ", "a@b.c"), Err(ContactError::MissingName));
        assert_eq!(Inquiry::new("Ada", " "), Err(ContactError::MissingEmail));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c", "ada lovelace@example.com"] {
            assert_eq!(
                Inquiry::new("Ada", bad),
                Err(ContactError::InvalidEmail(bad.to_string())),
                "{bad} should be rejected"
            );
        }
        assert!(Inquiry::new("Ada", "ada+jobs@mail.example.com").is_ok());
    }
}
