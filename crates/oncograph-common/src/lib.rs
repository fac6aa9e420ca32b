//! oncograph-common — Shared types and errors used across all Oncograph crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{NodeVariant, Parameter, PatientAttributes, Treatment};
pub use error::{ApiError, OncographError, Result};
