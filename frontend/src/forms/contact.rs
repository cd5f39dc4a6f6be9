use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ActionError;
use crate::workflow::RequiredInput;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const INVALID_EMAIL: &str = "Please enter a valid business email.";
pub const COMPANY_REQUIRED: &str = "Company name is required.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    WorkEmail,
    CompanyName,
    RoleTitle,
    Message,
}

impl Field {
    pub const VALIDATED: [Field; 3] = [Field::FullName, Field::WorkEmail, Field::CompanyName];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    #[default]
    Demo,
    Sample,
    Custom,
}

impl RequestType {
    pub const ALL: [RequestType; 3] = [RequestType::Demo, RequestType::Sample, RequestType::Custom];

    pub fn label(self) -> &'static str {
        match self {
            RequestType::Demo => "Schedule Demo",
            RequestType::Sample => "Sample Report",
            RequestType::Custom => "Custom Analysis",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RequestType::Demo => "🎯",
            RequestType::Sample => "📊",
            RequestType::Custom => "⚖️",
        }
    }
}

/// What a contact endpoint would receive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub full_name: String,
    pub work_email: String,
    pub company_name: String,
    pub role_title: String,
    pub message: String,
    pub request_type: RequestType,
}

impl RequiredInput for ContactPayload {
    fn is_present(&self) -> bool {
        !self.full_name.is_empty() && !self.work_email.is_empty()
    }
}

/// Error message for a validated field, `None` when it passes.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::FullName if value.trim().chars().count() < 2 => Some(NAME_TOO_SHORT),
        Field::WorkEmail if !EMAIL_RE.is_match(value) => Some(INVALID_EMAIL),
        Field::CompanyName if value.trim().chars().count() < 2 => Some(COMPANY_REQUIRED),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    data: ContactPayload,
    errors: HashMap<Field, &'static str>,
    touched: HashSet<Field>,
}

impl ContactForm {
    pub fn data(&self) -> &ContactPayload {
        &self.data
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.data.full_name,
            Field::WorkEmail => &self.data.work_email,
            Field::CompanyName => &self.data.company_name,
            Field::RoleTitle => &self.data.role_title,
            Field::Message => &self.data.message,
        }
    }

    /// Editing a field clears its error until the next blur or submit.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.data.full_name,
            Field::WorkEmail => &mut self.data.work_email,
            Field::CompanyName => &mut self.data.company_name,
            Field::RoleTitle => &mut self.data.role_title,
            Field::Message => &mut self.data.message,
        };
        *slot = value;
        self.errors.remove(&field);
    }

    pub fn set_request_type(&mut self, request_type: RequestType) {
        self.data.request_type = request_type;
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        match validate_field(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Errors surface only once the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.touched.contains(&field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn can_submit(&self, submitting: bool) -> bool {
        !submitting && self.data.is_present()
    }

    /// Revalidates every checked field. On failure all of them are marked
    /// touched so their messages show, and nothing is handed out.
    pub fn submit(&mut self) -> Result<ContactPayload, ActionError> {
        self.errors = Field::VALIDATED
            .iter()
            .filter_map(|f| validate_field(*f, self.value(*f)).map(|m| (*f, m)))
            .collect();
        if self.has_errors() {
            self.touched.extend(Field::VALIDATED);
            let messages: Vec<&str> = Field::VALIDATED
                .iter()
                .filter_map(|f| self.error(*f))
                .collect();
            return Err(ActionError::Validation(messages.join(" ")));
        }
        Ok(self.data.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, company: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::FullName, name.to_string());
        form.set(Field::WorkEmail, email.to_string());
        form.set(Field::CompanyName, company.to_string());
        form
    }

    #[test]
    fn field_rules() {
        assert_eq!(validate_field(Field::FullName, " A "), Some(NAME_TOO_SHORT));
        assert_eq!(validate_field(Field::FullName, "Al"), None);
        assert_eq!(validate_field(Field::WorkEmail, "a@b"), Some(INVALID_EMAIL));
        assert_eq!(validate_field(Field::WorkEmail, "a b@c.com"), Some(INVALID_EMAIL));
        assert_eq!(validate_field(Field::WorkEmail, "a@b.com"), None);
        assert_eq!(validate_field(Field::CompanyName, ""), Some(COMPANY_REQUIRED));
        assert_eq!(validate_field(Field::RoleTitle, ""), None);
    }

    #[test]
    fn short_name_blocks_submission_and_touches_everything() {
        let mut form = filled("A", "a@b.com", "Acme");
        assert_eq!(form.visible_error(Field::FullName), None);

        let err = form.submit().unwrap_err();
        assert!(matches!(err, ActionError::Validation(ref m) if m.contains("Name must be at least 2 characters")));
        assert_eq!(form.visible_error(Field::FullName), Some(NAME_TOO_SHORT));
        assert_eq!(form.visible_error(Field::WorkEmail), None);
        assert!(form.has_errors());
    }

    #[test]
    fn valid_form_yields_payload_and_resets_clean() {
        let mut form = filled("Ann", "a@b.com", "Acme");
        form.set_request_type(RequestType::Custom);
        let payload = form.submit().unwrap();
        assert_eq!(payload.full_name, "Ann");
        assert_eq!(payload.request_type, RequestType::Custom);

        form.reset();
        for field in Field::VALIDATED {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.data().request_type, RequestType::Demo);
        assert!(!form.has_errors());
    }

    #[test]
    fn blur_validates_one_field_and_editing_clears_it() {
        let mut form = ContactForm::default();
        form.set(Field::WorkEmail, "nope".to_string());
        form.blur(Field::WorkEmail);
        assert_eq!(form.visible_error(Field::WorkEmail), Some(INVALID_EMAIL));
        assert_eq!(form.error(Field::FullName), None);

        form.set(Field::WorkEmail, "nope@".to_string());
        assert_eq!(form.visible_error(Field::WorkEmail), None);
    }

    #[test]
    fn submit_control_needs_name_and_email() {
        let mut form = ContactForm::default();
        assert!(!form.can_submit(false));
        form.set(Field::FullName, "Ann".to_string());
        form.set(Field::WorkEmail, "a@b.com".to_string());
        assert!(form.can_submit(false));
        assert!(!form.can_submit(true));
    }

    #[test]
    fn payload_serializes_camel_case() {
        let form = filled("Ann", "a@b.com", "Acme");
        let json = serde_json::to_value(form.data()).unwrap();
        assert_eq!(json["fullName"], "Ann");
        assert_eq!(json["requestType"], "demo");
    }
}
