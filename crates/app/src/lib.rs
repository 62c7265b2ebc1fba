//! Shared application domain and persistence modules.

pub mod approvals;
pub mod context;
pub mod database;
pub mod domain;
pub mod mail;
pub mod storefront;

mod uuids;
