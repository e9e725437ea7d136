use serde::Serialize;

use crate::errors::FormError;

/// Raw contact form values for the clinic's contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub nom: String,
    pub email: String,
    pub telephone: String,
    pub sujet: String,
    pub message: String,
}

/// Wire payload for `POST /api/contact/`. The phone number is optional on
/// the backend side.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub nom: String,
    pub email: String,
    pub telephone: String,
    pub sujet: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, FormError> {
        let nom = self.nom.trim();
        let email = self.email.trim();
        let sujet = self.sujet.trim();
        let message = self.message.trim();

        let mut missing = Vec::new();
        if nom.is_empty() {
            missing.push("nom");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if sujet.is_empty() {
            missing.push("sujet");
        }
        if message.is_empty() {
            missing.push("message");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        Ok(ContactRequest {
            nom: nom.to_string(),
            email: email.to_string(),
            telephone: self.telephone.trim().to_string(),
            sujet: sujet.to_string(),
            message: message.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
