use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error};

use crate::config::AppConfig;
use crate::cookies;
use crate::errors::BookingError;
use crate::models::{AppointmentForm, ContactForm, Service};
use crate::services::backend::ClinicBackend;

/// The booking form controller: validate, read the CSRF token, submit,
/// branch on the backend's status. One logical operation in flight at a
/// time; a second submission while one is pending fails fast with `Busy`.
pub struct BookingController {
    config: AppConfig,
    backend: Box<dyn ClinicBackend>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl BookingController {
    pub fn new(config: AppConfig, backend: Box<dyn ClinicBackend>) -> Self {
        Self {
            config,
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, BookingError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(BookingError::Busy);
        }
        Ok(InFlightGuard(&self.in_flight))
    }

    fn csrf_token(&self, cookie_header: &str) -> Option<String> {
        let token = cookies::get_cookie(cookie_header, &self.config.csrf_cookie);
        if token.is_none() {
            debug!(
                cookie = %self.config.csrf_cookie,
                "no CSRF cookie found, submitting without the token header"
            );
        }
        token
    }

    /// Submit an appointment request. On acceptance the form is cleared and
    /// the confirmation text returned; every failure is a `BookingError`.
    pub async fn submit_appointment(
        &self,
        form: &mut AppointmentForm,
        cookie_header: &str,
    ) -> Result<String, BookingError> {
        let request = form.validate()?;
        let _guard = self.begin()?;
        let token = self.csrf_token(cookie_header);

        let response = self
            .backend
            .submit_appointment(token.as_deref(), &request)
            .await
            .map_err(|e| {
                error!("appointment submission failed: {e:#}");
                BookingError::Transport(e)
            })?;

        if response.is_ok() {
            form.reset();
            Ok("Your appointment request has been recorded.".to_string())
        } else {
            Err(BookingError::Rejected(response.failure_notice()))
        }
    }

    /// Submit a contact message, same flow as `submit_appointment`.
    pub async fn submit_contact(
        &self,
        form: &mut ContactForm,
        cookie_header: &str,
    ) -> Result<String, BookingError> {
        let request = form.validate()?;
        let _guard = self.begin()?;
        let token = self.csrf_token(cookie_header);

        let response = self
            .backend
            .submit_contact(token.as_deref(), &request)
            .await
            .map_err(|e| {
                error!("contact submission failed: {e:#}");
                BookingError::Transport(e)
            })?;

        if response.is_ok() {
            form.reset();
            if response.message.is_empty() {
                Ok("Your message has been sent.".to_string())
            } else {
                Ok(response.message)
            }
        } else {
            Err(BookingError::Rejected(response.failure_notice()))
        }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, BookingError> {
        self.backend.list_services().await.map_err(|e| {
            error!("service listing failed: {e:#}");
            BookingError::Transport(e)
        })
    }
}
