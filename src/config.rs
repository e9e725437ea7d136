use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_url: String,
    pub csrf_cookie: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CLINIC_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            csrf_cookie: env::var("CSRF_COOKIE_NAME").unwrap_or_else(|_| "csrftoken".to_string()),
        }
    }
}
