//! Produto Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::error::ValidationError;
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_non_negative, validate_optional_text,
    validate_required_text,
};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Categoria {
    #[default]
    Bebida,
    Entrada,
    #[serde(rename = "Prato Principal")]
    PratoPrincipal,
    Sobremesa,
}

/// Produto entity (item do cardápio)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Produto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub preco: Decimal,
    #[serde(default)]
    pub categoria: Categoria,
    #[serde(default = "default_disponivel")]
    pub disponivel: bool,
    #[serde(default)]
    pub imagem_url: Option<String>,
}

fn default_disponivel() -> bool {
    true
}

impl Produto {
    /// New, available product without description or image
    pub fn new(nome: impl Into<String>, preco: Decimal, categoria: Categoria) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            descricao: None,
            preco,
            categoria,
            disponivel: true,
            imagem_url: None,
        }
    }
}

impl Entity for Produto {
    const KIND: EntityKind = EntityKind::Produto;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn validate_create(&self) -> Result<(), ValidationError> {
        validate_required_text(&self.nome, "nome", MAX_NAME_LEN)?;
        validate_optional_text(&self.descricao, "descricao", MAX_NOTE_LEN)?;
        validate_non_negative(self.preco, "preco")?;
        validate_optional_text(&self.imagem_url, "imagemUrl", MAX_URL_LEN)
    }
}
