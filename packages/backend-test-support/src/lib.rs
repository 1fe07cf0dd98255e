//! Shared test helpers for the backend: one-time tracing setup and
//! assertions for the problem-details error contract.

pub mod logging;
pub mod problem_details;
