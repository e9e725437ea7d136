pub mod config;
pub mod cookies;
pub mod errors;
pub mod models;
pub mod services;
