//! Caixa Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::error::ValidationError;
use crate::validation::{
    MAX_CODE_LEN, MAX_NAME_LEN, validate_cpf, validate_non_negative, validate_required_text,
};

/// Caixa entity (cashier operator)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Caixa {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    /// Unique operator code
    pub codigo: String,
    #[serde(default)]
    pub salario: Decimal,
    /// Computed by the server from closed sales
    #[serde(default)]
    pub total_vendido: Decimal,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl Caixa {
    pub fn new(nome: impl Into<String>, codigo: impl Into<String>) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            cpf: None,
            data_nascimento: None,
            codigo: codigo.into(),
            salario: Decimal::ZERO,
            total_vendido: Decimal::ZERO,
            ativo: true,
        }
    }
}

impl Entity for Caixa {
    const KIND: EntityKind = EntityKind::Caixa;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_create(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.nome, "nome", MAX_NAME_LEN)?;
        validate_cpf(&self.cpf)?;
        validate_required_text(&self.codigo, "codigo", MAX_CODE_LEN)?;
        validate_non_negative(self.salario, "salario")
    }
}
