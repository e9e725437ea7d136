use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use rendezvous::config::AppConfig;
use rendezvous::errors::BookingError;
use rendezvous::models::{AppointmentForm, ContactForm};
use rendezvous::services::backend::http::HttpBackend;
use rendezvous::services::booking::BookingController;

// ── Mock clinic backend ──

#[derive(Clone, Default)]
struct Received {
    bookings: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

fn csrf_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-csrftoken")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn prendre_rendezvous(
    State(received): State<Received>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let token = csrf_token(&headers);
    received
        .bookings
        .lock()
        .unwrap()
        .push((token.clone(), body.clone()));

    if token.is_none() {
        return Json(json!({"status": "error", "message": "CSRF token missing"})).into_response();
    }
    match body["service"].as_u64() {
        // Fixture id that fails field validation on the backend side.
        Some(99) => Json(json!({
            "status": "error",
            "message": "x",
            "errors": {"email": ["invalid"]}
        }))
        .into_response(),
        // Fixture id whose reply is not JSON at all.
        Some(500) => "<html>gateway error</html>".into_response(),
        _ => Json(json!({"status": "ok"})).into_response(),
    }
}

async fn contact(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    if csrf_token(&headers).is_none() {
        return Json(json!({"status": "error", "message": "CSRF token missing"}));
    }
    if body["sujet"].as_str().unwrap_or("").is_empty() {
        return Json(json!({"status": "error", "message": "Erreurs de validation: sujet"}));
    }
    Json(json!({
        "status": "ok",
        "message": "Votre message a été envoyé avec succès."
    }))
}

async fn list_services() -> Json<Value> {
    Json(json!([
        {"id": 1, "nom": "Consultation générale", "duree_minutes": 30},
        {"id": 3, "nom": "Détartrage", "description": "Nettoyage complet", "duree_minutes": 45},
        {"id": 5, "nom": "Orthodontie"}
    ]))
}

async fn spawn_clinic() -> (SocketAddr, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/prendre-rendez-vous/", post(prendre_rendezvous))
        .route("/api/contact/", post(contact))
        .route("/api/services/", get(list_services))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, received)
}

// ── Helpers ──

fn controller_for(addr: SocketAddr) -> BookingController {
    let config = AppConfig {
        base_url: format!("http://{addr}"),
        csrf_cookie: "csrftoken".to_string(),
    };
    let backend = HttpBackend::new(config.base_url.clone());
    BookingController::new(config, Box::new(backend))
}

fn filled_form(service: &str) -> AppointmentForm {
    AppointmentForm {
        nom: "Dupont".to_string(),
        prenom: "Jean".to_string(),
        telephone: "0600000000".to_string(),
        email: "a@b.com".to_string(),
        date_souhaitee: "2024-01-01".to_string(),
        service: service.to_string(),
        message: "Première visite".to_string(),
        consentement: true,
    }
}

const COOKIES: &str = "sessionid=abc123; csrftoken=integration-token";

// ── Appointment submission ──

#[tokio::test]
async fn test_accepted_booking_end_to_end() {
    let (addr, received) = spawn_clinic().await;
    let controller = controller_for(addr);
    let mut form = filled_form("3");

    let message = controller.submit_appointment(&mut form, COOKIES).await.unwrap();
    assert!(!message.is_empty());
    assert_eq!(form, AppointmentForm::default());

    let bookings = received.bookings.lock().unwrap();
    let (token, body) = &bookings[0];
    assert_eq!(token.as_deref(), Some("integration-token"));
    assert_eq!(body["nom"], "Dupont");
    assert_eq!(body["service"], json!(3));
    assert!(body["service"].is_u64());
}

#[tokio::test]
async fn test_backend_rejection_surfaces_field_errors() {
    let (addr, _received) = spawn_clinic().await;
    let controller = controller_for(addr);
    let mut form = filled_form("99");

    let err = controller.submit_appointment(&mut form, COOKIES).await.unwrap_err();
    match err {
        BookingError::Rejected(notice) => {
            assert!(notice.contains("x"));
            assert!(notice.contains("email : invalid"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_ne!(form, AppointmentForm::default());
}

#[tokio::test]
async fn test_missing_token_is_rejected_by_backend() {
    let (addr, received) = spawn_clinic().await;
    let controller = controller_for(addr);
    let mut form = filled_form("3");

    let err = controller
        .submit_appointment(&mut form, "sessionid=abc123")
        .await
        .unwrap_err();
    match err {
        BookingError::Rejected(notice) => assert!(notice.contains("CSRF token missing")),
        other => panic!("expected Rejected, got {other:?}"),
    }

    // The request went out, just without the header.
    let bookings = received.bookings.lock().unwrap();
    assert_eq!(bookings[0].0, None);
}

#[tokio::test]
async fn test_non_json_reply_becomes_generic_rejection() {
    let (addr, _received) = spawn_clinic().await;
    let controller = controller_for(addr);
    let mut form = filled_form("500");

    let err = controller.submit_appointment(&mut form, COOKIES).await.unwrap_err();
    match err {
        BookingError::Rejected(notice) => assert!(!notice.is_empty()),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind to grab a free port, then drop the listener so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = controller_for(addr);
    let mut form = filled_form("3");

    let err = controller.submit_appointment(&mut form, COOKIES).await.unwrap_err();
    assert!(matches!(err, BookingError::Transport(_)));
    assert_ne!(form, AppointmentForm::default());
}

// ── Contact form ──

#[tokio::test]
async fn test_contact_submission_end_to_end() {
    let (addr, _received) = spawn_clinic().await;
    let controller = controller_for(addr);
    let mut form = ContactForm {
        nom: "Dupont".to_string(),
        email: "a@b.com".to_string(),
        telephone: String::new(),
        sujet: "Horaires".to_string(),
        message: "Êtes-vous ouverts le samedi ?".to_string(),
    };

    let message = controller.submit_contact(&mut form, COOKIES).await.unwrap();
    assert_eq!(message, "Votre message a été envoyé avec succès.");
    assert_eq!(form, ContactForm::default());
}

// ── Service listing ──

#[tokio::test]
async fn test_service_listing() {
    let (addr, _received) = spawn_clinic().await;
    let controller = controller_for(addr);

    let services = controller.list_services().await.unwrap();
    assert_eq!(services.len(), 3);
    assert_eq!(services[1].id, 3);
    assert_eq!(services[1].nom, "Détartrage");
    assert_eq!(services[1].duree_minutes, Some(45));
    assert_eq!(services[2].duree_minutes, None);
}
