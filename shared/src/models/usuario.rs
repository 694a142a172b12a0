//! Usuario Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::error::ValidationError;
use crate::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_cpf, validate_email, validate_optional_text,
    validate_required_text,
};

/// System role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Papel {
    Admin,
    Gerente,
    #[default]
    Usuario,
}

/// Usuario entity (system user)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    /// Unique login
    pub email: String,
    /// Write-only; never sent when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    #[serde(default)]
    pub papel: Papel,
    #[serde(default = "default_ativo")]
    pub ativo: bool,
}

fn default_ativo() -> bool {
    true
}

impl Usuario {
    pub fn new(nome: impl Into<String>, email: impl Into<String>, papel: Papel) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            cpf: None,
            data_nascimento: None,
            email: email.into(),
            senha: None,
            papel,
            ativo: true,
        }
    }

    pub fn with_senha(mut self, senha: impl Into<String>) -> Self {
        self.senha = Some(senha.into());
        self
    }

    fn validate_common(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.nome, "nome", MAX_NAME_LEN)?;
        validate_cpf(&self.cpf)?;
        validate_email(&self.email)
    }
}

impl Entity for Usuario {
    const KIND: EntityKind = EntityKind::Usuario;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_create(&self) -> Result<(), ValidationError> {
        self.validate_common()?;
        validate_required_text(
            self.senha.as_deref().unwrap_or_default(),
            "senha",
            MAX_PASSWORD_LEN,
        )
    }

    fn validate_update(&self) -> Result<(), ValidationError> {
        self.validate_common()?;
        validate_optional_text(&self.senha, "senha", MAX_PASSWORD_LEN)
    }

    // A blank password on edit means "keep the current one"
    fn prepare_update(&mut self) {
        if self.senha.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.senha = None;
        }
    }

    fn redact(&mut self) {
        self.senha = None;
    }

    fn retain_write_only(&mut self, stored: &Self) {
        if self.senha.is_none() {
            self.senha = stored.senha.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senha_required_on_create_only() {
        let usuario = Usuario::new("Admin", "admin@cervejaria.com", Papel::Admin);
        assert_eq!(usuario.validate_create().unwrap_err().field, "senha");
        assert!(usuario.validate_update().is_ok());
        assert!(usuario.with_senha("segredo").validate_create().is_ok());
    }

    #[test]
    fn test_blank_senha_omitted_from_update() {
        let mut usuario =
            Usuario::new("Gerente", "gerente@cervejaria.com", Papel::Gerente).with_senha("  ");
        usuario.prepare_update();
        assert_eq!(usuario.senha, None);

        let value = serde_json::to_value(&usuario).unwrap();
        assert!(value.get("senha").is_none());
        assert_eq!(value["papel"], "GERENTE");
    }

    #[test]
    fn test_non_blank_senha_kept() {
        let mut usuario =
            Usuario::new("Gerente", "gerente@cervejaria.com", Papel::Gerente).with_senha("nova");
        usuario.prepare_update();
        assert_eq!(usuario.senha.as_deref(), Some("nova"));
    }
}
