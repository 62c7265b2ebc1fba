//! Approvals

mod handlers;
mod pages;

pub(crate) use handlers::*;
