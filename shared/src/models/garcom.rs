//! Garcom Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::error::ValidationError;
use crate::validation::{
    MAX_CODE_LEN, MAX_NAME_LEN, validate_cpf, validate_non_negative, validate_required_text,
};

/// Work shift
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Turno {
    #[default]
    #[serde(rename = "Manhã")]
    Manha,
    Tarde,
    Noite,
}

/// Garcom entity (waiter)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Garcom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    /// Unique staff registration code
    pub matricula: String,
    #[serde(default)]
    pub salario: Decimal,
    #[serde(default)]
    pub turno: Turno,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl Garcom {
    pub fn new(nome: impl Into<String>, matricula: impl Into<String>, turno: Turno) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            cpf: None,
            data_nascimento: None,
            matricula: matricula.into(),
            salario: Decimal::ZERO,
            turno,
            ativo: true,
        }
    }
}

impl Entity for Garcom {
    const KIND: EntityKind = EntityKind::Garcom;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_create(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.nome, "nome", MAX_NAME_LEN)?;
        validate_cpf(&self.cpf)?;
        validate_required_text(&self.matricula, "matricula", MAX_CODE_LEN)?;
        validate_non_negative(self.salario, "salario")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turno_accented_wire_name() {
        let json = r#"{"nome":"João Silva","matricula":"GAR001","turno":"Manhã","dataNascimento":"1990-05-15","salario":2500.0}"#;
        let garcom: Garcom = serde_json::from_str(json).unwrap();
        assert_eq!(garcom.turno, Turno::Manha);
        assert_eq!(
            garcom.data_nascimento,
            NaiveDate::from_ymd_opt(1990, 5, 15)
        );
        assert!(garcom.ativo);

        let value = serde_json::to_value(&garcom).unwrap();
        assert_eq!(value["turno"], "Manhã");
        assert_eq!(value["dataNascimento"], "1990-05-15");
    }

    #[test]
    fn test_matricula_required() {
        let garcom = Garcom::new("Pedro", "  ", Turno::Noite);
        assert_eq!(garcom.validate_create().unwrap_err().field, "matricula");
    }
}
