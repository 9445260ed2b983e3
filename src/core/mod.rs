//! Configuration, request-scoped models and the shared event-id memory

pub mod config;
pub mod dedupe;
pub mod models;
