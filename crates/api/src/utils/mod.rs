//! Shared application-layer utilities

pub mod logging;
