//! Data models
//!
//! Records exchanged with the Cervejaria REST API.
//! JSON field names are camelCase; all IDs are `i64` assigned by the store.

pub mod caixa;
pub mod garcom;
pub mod pedido;
pub mod produto;
pub mod usuario;

// Re-exports
pub use caixa::*;
pub use garcom::*;
pub use pedido::*;
pub use produto::*;
pub use usuario::*;
