pub mod backend;
pub mod booking;
