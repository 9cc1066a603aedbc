use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Company => "Company",
            ContactField::Budget => "Budget",
            ContactField::Message => "Message",
        }
    }
}

pub const BUDGETS: [&str; 4] = ["Under $10k", "$10k to $25k", "$25k to $50k", "$50k and up"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", .0.as_deref().unwrap_or("the form service rejected the message"))]
    Rejected(Option<String>),
    #[error("unexpected response from the form service")]
    Decode,
}

/// Everything the contact form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        let optional = |value: String| (!value.trim().is_empty()).then_some(value);
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = optional(value),
            ContactField::Budget => self.budget = optional(value),
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => self.company.as_deref().unwrap_or(""),
            ContactField::Budget => self.budget.as_deref().unwrap_or(""),
            ContactField::Message => &self.message,
        }
    }

    /// Checks the required fields in order, then the email shape.
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = ContactField::REQUIRED
            .iter()
            .find(|field| self.get(**field).trim().is_empty())
        {
            return Err(FormError::Missing(*field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Submission<'a> {
    access_key: &'a str,
    subject: &'a str,
    from_name: &'a str,
    name: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a str>,
    message: &'a str,
}

impl<'a> Submission<'a> {
    pub fn new(form: &'a ContactForm) -> Self {
        Self {
            access_key: config::FORMS_ACCESS_KEY,
            subject: config::CONTACT_SUBJECT,
            from_name: form.name.trim(),
            name: form.name.trim(),
            email: form.email.trim(),
            company: form.company.as_deref(),
            budget: form.budget.as_deref(),
            message: form.message.trim(),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmissionResponse {
    /// Confirmation text on success, `Rejected` otherwise.
    pub fn into_result(self) -> Result<String, SubmitError> {
        if self.success {
            Ok(self
                .message
                .unwrap_or_else(|| "Thanks! We'll be in touch shortly.".to_string()))
        } else {
            Err(SubmitError::Rejected(self.message))
        }
    }
}

/// Posts the form once. No retry; the caller reports the outcome.
pub async fn submit(form: &ContactForm) -> Result<String, SubmitError> {
    let request = Request::post(config::get_forms_endpoint())
        .header("Accept", "application/json")
        .json(&Submission::new(form))
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.json::<SubmissionResponse>().await.map_err(|e| {
        warn!("contact form response ({status}) did not decode: {e}");
        SubmitError::Decode
    })?;
    let result = body.into_result();
    match &result {
        Ok(_) => info!("contact form submitted"),
        Err(e) => warn!("contact form rejected ({status}): {e}"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: None,
            budget: None,
            message: "We need a new site.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_missing_required_field_is_reported() {
        let mut form = filled();
        form.name = "  ".into();
        form.message.clear();
        assert_eq!(form.validate(), Err(FormError::Missing(ContactField::Name)));
        assert_eq!(
            FormError::Missing(ContactField::Name).to_string(),
            "Name is required"
        );
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada @example.com"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn blank_optional_fields_stay_empty() {
        let mut form = filled();
        form.set(ContactField::Company, "   ".into());
        form.set(ContactField::Budget, BUDGETS[1].into());
        assert_eq!(form.company, None);
        assert_eq!(form.get(ContactField::Budget), BUDGETS[1]);
    }

    #[test]
    fn submission_payload_shape() {
        let mut form = filled();
        form.company = Some("Acme".into());
        let json = serde_json::to_value(Submission::new(&form)).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["access_key"], config::FORMS_ACCESS_KEY);
        assert!(json.get("budget").is_none());
    }

    #[test]
    fn response_contract() {
        let ok: SubmissionResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.into_result().is_ok());

        let rejected: SubmissionResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid access key"}"#).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(SubmitError::Rejected(Some("Invalid access key".into())))
        );
        assert_eq!(
            SubmitError::Rejected(None).to_string(),
            "the form service rejected the message"
        );
    }
}
