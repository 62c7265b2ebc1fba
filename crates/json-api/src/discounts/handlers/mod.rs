//! Discount Handlers

pub(crate) mod run;
