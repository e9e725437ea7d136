use serde::Serialize;

use crate::errors::FormError;

/// Raw appointment form values, as entered. `Default` is the cleared form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub email: String,
    pub date_souhaitee: String,
    pub service: String,
    pub message: String,
    pub consentement: bool,
}

/// Wire payload for `POST /prendre-rendez-vous/`. Field names are the
/// backend's; `service` is an integer identifier, never a string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub email: String,
    pub date_souhaitee: String,
    pub service: u32,
    pub message: String,
}

impl AppointmentForm {
    /// Presence validation, re-run from scratch on every attempt.
    ///
    /// Textual fields are trimmed; every required field must be non-empty,
    /// consent must be checked and `service` must parse as a base-10
    /// integer. The desired date stays an opaque string.
    pub fn validate(&self) -> Result<AppointmentRequest, FormError> {
        let nom = self.nom.trim();
        let prenom = self.prenom.trim();
        let telephone = self.telephone.trim();
        let email = self.email.trim();
        let date_souhaitee = self.date_souhaitee.trim();
        let service = self.service.trim();

        let mut missing = Vec::new();
        if nom.is_empty() {
            missing.push("nom");
        }
        if prenom.is_empty() {
            missing.push("prenom");
        }
        if telephone.is_empty() {
            missing.push("telephone");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if date_souhaitee.is_empty() {
            missing.push("date_souhaitee");
        }
        if service.is_empty() {
            missing.push("service");
        }
        if !self.consentement {
            missing.push("consentement");
        }
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let service = service
            .parse::<u32>()
            .map_err(|_| FormError::InvalidService(service.to_string()))?;

        Ok(AppointmentRequest {
            nom: nom.to_string(),
            prenom: prenom.to_string(),
            telephone: telephone.to_string(),
            email: email.to_string(),
            date_souhaitee: date_souhaitee.to_string(),
            service,
            message: self.message.trim().to_string(),
        })
    }

    /// Clear the form back to its default empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
