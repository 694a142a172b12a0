//! Entity service contracts
//!
//! Every entity kind exposes the same five-operation CRUD contract, served
//! either over HTTP ([`HttpService`]), from memory ([`crate::MockService`])
//! or by HTTP with a mock standing by ([`FallbackService`]). Screens only
//! ever see the trait objects collected in [`Services`].

mod fallback;
mod http;
mod registry;

pub use fallback::FallbackService;
pub use http::HttpService;
pub use registry::{Services, build_services};

use async_trait::async_trait;
use shared::models::{Produto, Usuario};
use shared::{DeleteResult, Entity, LoginResponse};

use crate::error::ClientResult;

/// CRUD contract shared by every entity kind
#[async_trait]
pub trait CrudService<T: Entity>: Send + Sync {
    async fn get_all(&self) -> ClientResult<Vec<T>>;

    async fn get_by_id(&self, id: i64) -> ClientResult<T>;

    async fn create(&self, item: T) -> ClientResult<T>;

    async fn update(&self, id: i64, item: T) -> ClientResult<T>;

    async fn delete(&self, id: i64) -> ClientResult<DeleteResult>;
}

/// Produto service: CRUD plus the available-items query
#[async_trait]
pub trait ProdutoService: CrudService<Produto> {
    async fn get_disponiveis(&self) -> ClientResult<Vec<Produto>>;
}

/// Usuario service: CRUD plus login
#[async_trait]
pub trait UsuarioService: CrudService<Usuario> {
    async fn login(&self, email: &str, senha: &str) -> ClientResult<LoginResponse>;
}
