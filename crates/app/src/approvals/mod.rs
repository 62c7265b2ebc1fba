//! Approval Links

pub mod links;
pub mod token;
