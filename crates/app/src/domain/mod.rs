//! Pallet Domain Concerns

pub mod registrations;
