//! Client-related types shared between server and client
//!
//! Auth and acknowledgement DTOs used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::Usuario;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /usuarios/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token
    pub token: String,
    /// Authenticated user, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<Usuario>,
}

// =============================================================================
// CRUD acknowledgements
// =============================================================================

/// Delete acknowledgement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResult {
    pub success: bool,
}

impl DeleteResult {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
