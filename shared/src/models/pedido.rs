//! Pedido Model

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Garcom;
use crate::entity::{Entity, EntityKind};
use crate::error::ValidationError;
use crate::validation::{MAX_NOTE_LEN, validate_non_negative, validate_optional_text};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusPedido {
    #[default]
    Aberto,
    EmPreparo,
    Pronto,
    Entregue,
    Pago,
    Cancelado,
}

/// Pedido entity (table order)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub numero_mesa: i32,
    /// Waiter reference
    #[serde(default)]
    pub garcom_id: Option<i64>,
    /// Waiter snapshot embedded by the server on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garcom: Option<Garcom>,
    #[serde(default)]
    pub data_pedido: Option<NaiveDateTime>,
    #[serde(default)]
    pub valor_total: Decimal,
    #[serde(default)]
    pub status: StatusPedido,
    #[serde(default)]
    pub observacoes: Option<String>,
}

impl Pedido {
    pub fn new(numero_mesa: i32, garcom_id: i64) -> Self {
        Self {
            id: None,
            numero_mesa,
            garcom_id: Some(garcom_id),
            garcom: None,
            data_pedido: None,
            valor_total: Decimal::ZERO,
            status: StatusPedido::Aberto,
            observacoes: None,
        }
    }

    /// Waiter id, from the reference or the embedded snapshot
    pub fn garcom_ref(&self) -> Option<i64> {
        self.garcom_id
            .or_else(|| self.garcom.as_ref().and_then(|g| g.id))
    }
}

impl Entity for Pedido {
    const KIND: EntityKind = EntityKind::Pedido;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_create(&self) -> Result<(), ValidationError> {
        if self.numero_mesa < 1 {
            return Err(ValidationError::new("numeroMesa", "must be 1 or greater"));
        }
        if self.garcom_ref().is_none() {
            return Err(ValidationError::new("garcomId", "must not be empty"));
        }
        validate_non_negative(self.valor_total, "valorTotal")?;
        validate_optional_text(&self.observacoes, "observacoes", MAX_NOTE_LEN)
    }
}
