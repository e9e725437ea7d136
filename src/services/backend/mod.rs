pub mod http;

use async_trait::async_trait;

use crate::models::{AppointmentRequest, BackendResponse, ContactRequest, Service};

/// Seam to the clinic's HTTP API, mockable in tests.
///
/// Submissions resolve to the backend's parsed response; `Err` means the
/// request never produced a usable response (connection failure).
#[async_trait]
pub trait ClinicBackend: Send + Sync {
    async fn submit_appointment(
        &self,
        csrf_token: Option<&str>,
        request: &AppointmentRequest,
    ) -> anyhow::Result<BackendResponse>;

    async fn submit_contact(
        &self,
        csrf_token: Option<&str>,
        request: &ContactRequest,
    ) -> anyhow::Result<BackendResponse>;

    async fn list_services(&self) -> anyhow::Result<Vec<Service>>;
}
