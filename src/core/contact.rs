use crate::domain::model::ContactForm;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{is_valid_email, Validate};
use std::time::Duration;

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::ContactValidationError {
            field: field.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(())
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !is_valid_email(&self.email) {
            return Err(FolioError::ContactValidationError {
                field: "email".to_string(),
                reason: format!("`{}` is not an email address", self.email.trim()),
            });
        }
        require("message", &self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub name: String,
    pub message: String,
}

/// Accepts contact form submissions. Nothing is stored or sent anywhere:
/// a submission is validated, logged and the form is cleared.
#[derive(Debug, Clone)]
pub struct ContactDesk {
    simulated_delay: Duration,
}

impl ContactDesk {
    pub fn new(simulated_delay: Duration) -> Self {
        Self { simulated_delay }
    }

    pub async fn submit(&self, form: &mut ContactForm) -> Result<Acknowledgement> {
        form.validate()?;

        if !self.simulated_delay.is_zero() {
            tokio::time::sleep(self.simulated_delay).await;
        }

        let submitted = std::mem::take(form);
        tracing::info!(
            name = %submitted.name.trim(),
            email = %submitted.email.trim(),
            message_len = submitted.message.len(),
            "Contact form submitted"
        );

        Ok(Acknowledgement {
            message: format!(
                "Thanks {}! Your message has been received.",
                submitted.name.trim()
            ),
            name: submitted.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contact_form() {
        assert!(ContactForm::new("Ada", "ada@example.com", "Hello").validate().is_ok());

        let err = ContactForm::new(" ", "ada@example.com", "Hello")
            .validate()
            .unwrap_err();
        assert!(matches!(err, FolioError::ContactValidationError { ref field, .. } if field == "name"));

        let err = ContactForm::new("Ada", "ada.example.com", "Hello")
            .validate()
            .unwrap_err();
        assert!(matches!(err, FolioError::ContactValidationError { ref field, .. } if field == "email"));

        let err = ContactForm::new("Ada", "ada@example.com", "")
            .validate()
            .unwrap_err();
        assert!(matches!(err, FolioError::ContactValidationError { ref field, .. } if field == "message"));
    }

    #[tokio::test]
    async fn test_submit_clears_the_form() {
        let desk = ContactDesk::new(Duration::ZERO);
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello there");

        let ack = desk.submit(&mut form).await.unwrap();

        assert_eq!(ack.name, "Ada");
        assert_eq!(ack.message, "Thanks Ada! Your message has been received.");
        assert!(form.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_submission_keeps_the_form() {
        let desk = ContactDesk::new(Duration::ZERO);
        let mut form = ContactForm::new("Ada", "not-an-email", "Hello there");

        assert!(desk.submit(&mut form).await.is_err());
        assert_eq!(form.email, "not-an-email");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_the_simulated_delay() {
        let desk = ContactDesk::new(Duration::from_secs(1));
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");

        let started = tokio::time::Instant::now();
        desk.submit(&mut form).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }
}
