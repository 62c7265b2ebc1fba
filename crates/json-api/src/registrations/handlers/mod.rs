//! Registration Handlers

pub(crate) mod get;
pub(crate) mod pending;
pub(crate) mod stats;
pub(crate) mod submit;
