//! Mock service factory
//!
//! In-memory drop-in for [`crate::HttpService`], with the same contract and
//! async behavior. Each instance owns a private copy of its seed; mutations
//! never touch the seed data.

pub mod seed;

use std::time::Duration;

use async_trait::async_trait;
use shared::models::{Produto, Usuario};
use shared::{DeleteResult, Entity, EntityKind, LoginResponse};
use tokio::sync::RwLock;

use crate::config::DEFAULT_MOCK_LATENCY_MS;
use crate::error::{ClientError, ClientResult};
use crate::service::{CrudService, ProdutoService, UsuarioService};

#[derive(Debug)]
struct MockState<T> {
    data: Vec<T>,
    next_id: i64,
}

/// In-memory entity service
#[derive(Debug)]
pub struct MockService<T: Entity> {
    state: RwLock<MockState<T>>,
    latency: Duration,
}

impl<T: Entity> MockService<T> {
    /// Build a service over a copy of `seed`.
    ///
    /// The next id is `max(seed ids, 0) + 1`, computed once here.
    pub fn new(seed: &[T]) -> Self {
        let data = seed.to_vec();
        let next_id = data.iter().filter_map(|d| d.id()).max().unwrap_or(0) + 1;
        tracing::debug!(kind = %T::KIND, records = data.len(), next_id, "Mock service created");
        Self {
            state: RwLock::new(MockState { data, next_id }),
            latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }

    /// Override the artificial delay applied before every call resolves
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn kind(&self) -> EntityKind {
        T::KIND
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn not_found(id: i64) -> ClientError {
        ClientError::NotFound { kind: T::KIND, id }
    }

    fn position(data: &[T], id: i64) -> Option<usize> {
        data.iter().position(|d| d.id() == Some(id))
    }
}

fn redacted<T: Entity>(mut item: T) -> T {
    item.redact();
    item
}

#[async_trait]
impl<T: Entity> CrudService<T> for MockService<T> {
    async fn get_all(&self) -> ClientResult<Vec<T>> {
        self.delay().await;
        let state = self.state.read().await;
        Ok(state.data.iter().cloned().map(redacted).collect())
    }

    async fn get_by_id(&self, id: i64) -> ClientResult<T> {
        self.delay().await;
        let state = self.state.read().await;
        Self::position(&state.data, id)
            .map(|i| redacted(state.data[i].clone()))
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, mut item: T) -> ClientResult<T> {
        self.delay().await;
        item.validate_create()?;
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        item.set_id(id);
        state.data.push(item.clone());
        tracing::debug!(kind = %T::KIND, id, "Mock record created");
        Ok(redacted(item))
    }

    async fn update(&self, id: i64, mut item: T) -> ClientResult<T> {
        self.delay().await;
        item.prepare_update();
        item.validate_update()?;
        let mut state = self.state.write().await;
        let index = Self::position(&state.data, id).ok_or_else(|| Self::not_found(id))?;
        item.set_id(id);
        item.retain_write_only(&state.data[index]);
        state.data[index] = item.clone();
        Ok(redacted(item))
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteResult> {
        self.delay().await;
        let mut state = self.state.write().await;
        let index = Self::position(&state.data, id).ok_or_else(|| Self::not_found(id))?;
        state.data.remove(index);
        tracing::debug!(kind = %T::KIND, id, "Mock record deleted");
        Ok(DeleteResult::ok())
    }
}

#[async_trait]
impl ProdutoService for MockService<Produto> {
    async fn get_disponiveis(&self) -> ClientResult<Vec<Produto>> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|p| p.disponivel)
            .collect())
    }
}

#[async_trait]
impl UsuarioService for MockService<Usuario> {
    /// Any active user may sign in; a stored password, if set, must match
    async fn login(&self, email: &str, senha: &str) -> ClientResult<LoginResponse> {
        self.delay().await;
        let state = self.state.read().await;
        let usuario = state
            .data
            .iter()
            .find(|u| u.ativo && u.email.eq_ignore_ascii_case(email.trim()))
            .filter(|u| u.senha.as_deref().is_none_or(|s| s == senha))
            .ok_or_else(|| ClientError::Unauthorized("Credenciais inválidas".into()))?;
        let id = usuario.id.unwrap_or_default();
        Ok(LoginResponse {
            token: format!("mock-token-{id}"),
            usuario: Some(redacted(usuario.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{Categoria, Papel};

    fn produtos() -> MockService<Produto> {
        MockService::new(&seed::produtos()).with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_seed_is_copied() {
        let seed = seed::produtos();
        let service = MockService::new(&seed).with_latency(Duration::ZERO);
        service.delete(1).await.unwrap();
        assert_eq!(seed.len(), 4);
        assert_eq!(service.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_next_id_from_empty_seed() {
        let service: MockService<Produto> = MockService::new(&[]).with_latency(Duration::ZERO);
        let created = service
            .create(Produto::new("Água", Decimal::new(500, 2), Categoria::Bebida))
            .await
            .unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_next_id_uses_max_not_len() {
        let mut seed = seed::produtos();
        seed.remove(0);
        seed[0].id = Some(10);
        let service = MockService::new(&seed).with_latency(Duration::ZERO);
        let created = service
            .create(Produto::new("Água", Decimal::new(500, 2), Categoria::Bebida))
            .await
            .unwrap();
        assert_eq!(created.id, Some(11));
    }

    #[tokio::test]
    async fn test_validation_blocks_create() {
        let service = produtos();
        let err = service
            .create(Produto::new("", Decimal::ONE, Categoria::Bebida))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(service.get_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_disponiveis_filters_unavailable() {
        let service = produtos();
        let mut batata = service.get_by_id(2).await.unwrap();
        batata.disponivel = false;
        service.update(2, batata).await.unwrap();

        let ids: Vec<_> = service
            .get_disponiveis()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_login() {
        let service = MockService::new(&seed::usuarios()).with_latency(Duration::ZERO);
        let resp = service.login("admin@cervejaria.com", "qualquer").await.unwrap();
        assert_eq!(resp.token, "mock-token-1");
        assert_eq!(resp.usuario.unwrap().papel, Papel::Admin);

        let err = service.login("ninguem@cervejaria.com", "x").await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_stored_senha_checked_and_never_returned() {
        let service = MockService::new(&seed::usuarios()).with_latency(Duration::ZERO);
        let created = service
            .create(
                Usuario::new("Caixa Noite", "noite@cervejaria.com", Papel::Usuario)
                    .with_senha("s3nha"),
            )
            .await
            .unwrap();
        assert_eq!(created.senha, None);
        let id = created.id.unwrap();

        assert!(service.login("noite@cervejaria.com", "errada").await.is_err());
        assert!(service.login("noite@cervejaria.com", "s3nha").await.is_ok());

        // blank senha on edit keeps the stored one
        let mut edit = service.get_by_id(id).await.unwrap();
        edit.nome = "Caixa Madrugada".into();
        edit.senha = Some(String::new());
        service.update(id, edit).await.unwrap();
        assert!(service.login("noite@cervejaria.com", "s3nha").await.is_ok());
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_login() {
        let service = MockService::new(&seed::usuarios()).with_latency(Duration::ZERO);
        let mut gerente = service.get_by_id(2).await.unwrap();
        gerente.ativo = false;
        service.update(2, gerente).await.unwrap();
        assert!(service.login("gerente@cervejaria.com", "x").await.is_err());
    }
}
