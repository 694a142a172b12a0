// cervejaria-client/src/service/fallback.rs
// HTTP service with a mock standing by for outages

use async_trait::async_trait;
use shared::models::{Produto, Usuario};
use shared::{DeleteResult, Entity, LoginResponse};

use super::{CrudService, HttpService, ProdutoService, UsuarioService};
use crate::error::ClientResult;
use crate::mock::MockService;

/// Answers from the mock when the HTTP call fails with a transport error or
/// a 5xx. 401, other 4xx and validation failures pass through untouched.
///
/// Login never falls back: a mock token is not a credential the API accepts.
#[derive(Debug)]
pub struct FallbackService<T: Entity> {
    primary: HttpService<T>,
    mock: MockService<T>,
}

impl<T: Entity> FallbackService<T> {
    pub fn new(primary: HttpService<T>, mock: MockService<T>) -> Self {
        Self { primary, mock }
    }

    fn fall_back<R>(&self, operation: &'static str, result: &ClientResult<R>) -> bool {
        match result {
            Err(e) if e.is_outage() => {
                tracing::warn!(
                    kind = %T::KIND,
                    operation,
                    error = %e,
                    "API unavailable, answering from mock data"
                );
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl<T: Entity> CrudService<T> for FallbackService<T> {
    async fn get_all(&self) -> ClientResult<Vec<T>> {
        let result = self.primary.get_all().await;
        if self.fall_back("get_all", &result) {
            return self.mock.get_all().await;
        }
        result
    }

    async fn get_by_id(&self, id: i64) -> ClientResult<T> {
        let result = self.primary.get_by_id(id).await;
        if self.fall_back("get_by_id", &result) {
            return self.mock.get_by_id(id).await;
        }
        result
    }

    async fn create(&self, item: T) -> ClientResult<T> {
        let result = self.primary.create(item.clone()).await;
        if self.fall_back("create", &result) {
            return self.mock.create(item).await;
        }
        result
    }

    async fn update(&self, id: i64, item: T) -> ClientResult<T> {
        let result = self.primary.update(id, item.clone()).await;
        if self.fall_back("update", &result) {
            return self.mock.update(id, item).await;
        }
        result
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteResult> {
        let result = self.primary.delete(id).await;
        if self.fall_back("delete", &result) {
            return self.mock.delete(id).await;
        }
        result
    }
}

#[async_trait]
impl ProdutoService for FallbackService<Produto> {
    async fn get_disponiveis(&self) -> ClientResult<Vec<Produto>> {
        let result = self.primary.get_disponiveis().await;
        if self.fall_back("get_disponiveis", &result) {
            return self.mock.get_disponiveis().await;
        }
        result
    }
}

#[async_trait]
impl UsuarioService for FallbackService<Usuario> {
    async fn login(&self, email: &str, senha: &str) -> ClientResult<LoginResponse> {
        self.primary.login(email, senha).await
    }
}
