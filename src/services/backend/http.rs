use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::ClinicBackend;
use crate::models::{AppointmentRequest, BackendResponse, ContactRequest, Service};

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_form<T>(
        &self,
        path: &str,
        csrf_token: Option<&str>,
        body: &T,
    ) -> anyhow::Result<BackendResponse>
    where
        T: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("posting form to {url}");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = csrf_token {
            request = request.header("X-CSRFToken", token);
        }

        let response = request
            .send()
            .await
            .context("failed to reach the clinic server")?;

        // A body that is not valid JSON becomes the empty response; the
        // status branch downstream turns that into a rejection.
        Ok(response.json::<BackendResponse>().await.unwrap_or_default())
    }
}

#[async_trait]
impl ClinicBackend for HttpBackend {
    async fn submit_appointment(
        &self,
        csrf_token: Option<&str>,
        request: &AppointmentRequest,
    ) -> anyhow::Result<BackendResponse> {
        self.post_form("/prendre-rendez-vous/", csrf_token, request)
            .await
    }

    async fn submit_contact(
        &self,
        csrf_token: Option<&str>,
        request: &ContactRequest,
    ) -> anyhow::Result<BackendResponse> {
        self.post_form("/api/contact/", csrf_token, request).await
    }

    async fn list_services(&self) -> anyhow::Result<Vec<Service>> {
        let url = format!("{}/api/services/", self.base_url);
        debug!("fetching service list from {url}");

        self.client
            .get(&url)
            .send()
            .await
            .context("failed to reach the clinic server")?
            .error_for_status()
            .context("service list request failed")?
            .json()
            .await
            .context("failed to parse the service list")
    }
}
