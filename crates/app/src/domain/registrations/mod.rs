//! Registrations

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::RegistrationsServiceError;
pub use service::*;
