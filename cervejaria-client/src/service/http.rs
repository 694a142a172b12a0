// cervejaria-client/src/service/http.rs
// REST-backed entity service

use std::marker::PhantomData;

use async_trait::async_trait;
use shared::models::{Produto, Usuario};
use shared::{DeleteResult, Entity, LoginRequest, LoginResponse};

use super::{CrudService, ProdutoService, UsuarioService};
use crate::config::ProdutosDisponiveisPath;
use crate::error::ClientResult;
use crate::http::ApiClient;

/// Entity service over `/{resource}` on the REST API
#[derive(Debug, Clone)]
pub struct HttpService<T: Entity> {
    api: ApiClient,
    disponiveis: ProdutosDisponiveisPath,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> HttpService<T> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            disponiveis: ProdutosDisponiveisPath::default(),
            _entity: PhantomData,
        }
    }

    fn collection(&self) -> String {
        format!("/{}", T::KIND.resource())
    }

    fn member(&self, id: i64) -> String {
        format!("/{}/{}", T::KIND.resource(), id)
    }
}

impl HttpService<Produto> {
    pub fn with_disponiveis_path(mut self, path: ProdutosDisponiveisPath) -> Self {
        self.disponiveis = path;
        self
    }
}

#[async_trait]
impl<T: Entity> CrudService<T> for HttpService<T> {
    async fn get_all(&self) -> ClientResult<Vec<T>> {
        self.api.get(&self.collection()).await
    }

    async fn get_by_id(&self, id: i64) -> ClientResult<T> {
        self.api.get(&self.member(id)).await
    }

    async fn create(&self, item: T) -> ClientResult<T> {
        item.validate_create()?;
        self.api.post(&self.collection(), &item).await
    }

    async fn update(&self, id: i64, mut item: T) -> ClientResult<T> {
        item.prepare_update();
        item.validate_update()?;
        self.api.put(&self.member(id), &item).await
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteResult> {
        self.api.delete(&self.member(id)).await
    }
}

#[async_trait]
impl ProdutoService for HttpService<Produto> {
    async fn get_disponiveis(&self) -> ClientResult<Vec<Produto>> {
        let path = format!("{}/{}", self.collection(), self.disponiveis.segment());
        self.api.get(&path).await
    }
}

#[async_trait]
impl UsuarioService for HttpService<Usuario> {
    async fn login(&self, email: &str, senha: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            senha: senha.to_string(),
        };
        let path = format!("{}/login", self.collection());
        self.api.post(&path, &request).await
    }
}
