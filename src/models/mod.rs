pub mod appointment;
pub mod contact;
pub mod response;

pub use appointment::{AppointmentForm, AppointmentRequest};
pub use contact::{ContactForm, ContactRequest};
pub use response::{BackendResponse, Service};
