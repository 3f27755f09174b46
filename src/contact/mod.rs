//! Contact form
//!
//! Validation, request building and the submission state machine live here
//! and are platform-free. The browser transport is in [`transport`].
//!
//! A submission is a single attempt:
//! `begin_submit` (loading on) → transport → `finish` (loading off, notice).
//! The form is cleared only on success.

#[cfg(target_arch = "wasm32")]
pub mod transport;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Contact form failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

/// EmailJS account identifiers (all public, client-side keys)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: "service_ghhiqnh".to_string(),
            template_id: "template_e2bht5q".to_string(),
            public_key: "fTUznH7Lbg9Xn7pWs".to_string(),
        }
    }
}

/// Template variables, named after the form inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

/// Body of an EmailJS send request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailJsRequest {
    pub fn new(config: &EmailJsConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                user_name: form.name.trim().to_string(),
                user_email: form.email.trim().to_string(),
                message: form.message.trim().to_string(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        serde_json::to_string(self).map_err(|e| ContactError::SubmissionFailed(e.to_string()))
    }
}

/// Form field values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Loose `local@domain.tld` check, close to what an email input accepts
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Terminal notice shown after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Transmitted,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Transmitted => "Signal Transmitted!",
            Notice::Failed => "Transmission Failed.",
        }
    }
}

/// Submission state for one contact form
#[derive(Debug, Clone, Default)]
pub struct ContactController {
    pub form: ContactForm,
    config: EmailJsConfig,
    loading: bool,
}

impl ContactController {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit button label for the current state
    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "SENDING SIGNAL..."
        } else {
            "TRANSMIT"
        }
    }

    /// Validate, mark loading and hand back the request to send
    pub fn begin_submit(&mut self) -> Result<EmailJsRequest, ContactError> {
        if self.loading {
            return Err(ContactError::InFlight);
        }
        self.form.validate()?;
        self.loading = true;
        log::info!("Sending contact message");
        Ok(EmailJsRequest::new(&self.config, &self.form))
    }

    /// Record the transport result. Clears the form only on success.
    pub fn finish(&mut self, result: Result<(), ContactError>) -> Notice {
        self.loading = false;
        match result {
            Ok(()) => {
                log::info!("Contact message sent");
                self.form.clear();
                Notice::Transmitted
            }
            Err(e) => {
                log::error!("Contact message failed: {e}");
                Notice::Failed
            }
        }
    }
}
