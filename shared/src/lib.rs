//! Shared types for the Cervejaria console
//!
//! Entity records, their wire enums, field validation and the auth DTOs
//! used by the client service layer.

pub mod client;
pub mod entity;
pub mod error;
pub mod models;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{DeleteResult, LoginRequest, LoginResponse};
pub use entity::{Entity, EntityKind, parse_id};
pub use error::ValidationError;
