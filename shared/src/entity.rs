//! Entity capability trait
//!
//! Every record managed by the console (Produto, Garcom, Pedido, Caixa,
//! Usuario) implements [`Entity`], which is all the service layer needs to
//! route, store and validate it generically.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::ValidationError;

/// The five entity kinds exposed by the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Produto,
    Garcom,
    Pedido,
    Caixa,
    Usuario,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Produto,
        EntityKind::Garcom,
        EntityKind::Pedido,
        EntityKind::Caixa,
        EntityKind::Usuario,
    ];

    /// Human label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Produto => "Produto",
            EntityKind::Garcom => "Garcom",
            EntityKind::Pedido => "Pedido",
            EntityKind::Caixa => "Caixa",
            EntityKind::Usuario => "Usuario",
        }
    }

    /// REST resource segment (`/produtos`, `/garcons`, ...)
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Produto => "produtos",
            EntityKind::Garcom => "garcons",
            EntityKind::Pedido => "pedidos",
            EntityKind::Caixa => "caixas",
            EntityKind::Usuario => "usuarios",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A record with a store-assigned numeric id.
///
/// `id` is `None` until the store (server or mock) assigns one on create,
/// and it is never changed afterwards.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Field-level checks run before a create is submitted
    fn validate_create(&self) -> Result<(), ValidationError>;

    /// Field-level checks run before an update is submitted
    fn validate_update(&self) -> Result<(), ValidationError> {
        self.validate_create()
    }

    /// Shape the payload sent on update (e.g. drop write-only fields left blank)
    fn prepare_update(&mut self) {}

    /// Strip write-only fields before a stored record is handed out
    fn redact(&mut self) {}

    /// Carry write-only fields omitted from an update over from the stored record
    fn retain_write_only(&mut self, _stored: &Self) {}
}

/// Coerce a route or form value to an id.
///
/// Mirrors integer-prefix parsing: leading whitespace and an optional sign are
/// accepted, trailing garbage after the digits is ignored.
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return Err(ValidationError::new("id", format!("'{raw}' is not a number")));
    }
    digits
        .parse::<i64>()
        .map(|n| sign * n)
        .map_err(|_| ValidationError::new("id", format!("'{raw}' is out of range")))
}
