use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Company => "Company Name",
            ContactField::Phone => "Phone Number",
            ContactField::Message => "Project details",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
}

/// Raw contents of the contact form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

/// A contact request that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Required fields are checked in form order, so the first error matches
    /// the first empty input the visitor sees.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = required(&self.name, ContactField::Name)?;
        let email = required(&self.email, ContactField::Email)?;
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }
        let message = required(&self.message, ContactField::Message)?;

        Ok(ContactSubmission {
            name,
            email,
            company: optional(&self.company),
            phone: optional(&self.phone),
            message,
        })
    }
}

fn required(value: &str, field: ContactField) -> Result<String, ContactError> {
    optional(value).ok_or(ContactError::MissingField(field))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Same bar as the browser's type="email" check: one '@', something on both sides.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".into(),
            email: "john@company.com".into(),
            message: "We need a new checkout flow.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_produces_payload() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "John Doe");
        assert_eq!(submission.email, "john@company.com");
        assert_eq!(submission.company, None);
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn optional_fields_are_kept_trimmed() {
        let mut form = filled();
        form.set(ContactField::Company, "  Acme  ".into());
        form.set(ContactField::Phone, "+1 (555) 000-0000".into());
        let submission = form.validate().unwrap();
        assert_eq!(submission.company.as_deref(), Some("Acme"));
        assert_eq!(submission.phone.as_deref(), Some("+1 (555) 000-0000"));
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            form.set(field, String::new());
            assert_eq!(form.validate(), Err(ContactError::MissingField(field)));
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set(ContactField::Message, "   \n\t".into());
        assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Message)));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(err, ContactError::MissingField(ContactField::Name));
        assert_eq!(err.to_string(), "Full Name is required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["john", "@company.com", "john@", "a@b@c"] {
            let mut form = filled();
            form.set(ContactField::Email, bad.into());
            assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))), "{bad}");
        }
    }

    #[test]
    fn submission_serializes_for_the_log() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["name"], "John Doe");
        assert!(json["company"].is_null());
    }
}
