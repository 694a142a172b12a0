//! Per-entity service map
//!
//! [`build_services`] decides once, from [`ApiConfig`], which implementation
//! backs each entity kind.

use std::sync::Arc;
use std::time::Duration;

use shared::models::{Caixa, Garcom, Pedido, Produto, Usuario};
use shared::{Entity, LoginResponse};

use super::{CrudService, FallbackService, HttpService, ProdutoService, UsuarioService};
use crate::auth::AuthContext;
use crate::config::ApiConfig;
use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::mock::{MockService, seed};

/// The service for every entity kind, plus the auth context they share
#[derive(Clone)]
pub struct Services {
    pub produtos: Arc<dyn ProdutoService>,
    pub garcons: Arc<dyn CrudService<Garcom>>,
    pub pedidos: Arc<dyn CrudService<Pedido>>,
    pub caixas: Arc<dyn CrudService<Caixa>>,
    pub usuarios: Arc<dyn UsuarioService>,
    auth: AuthContext,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").field("auth", &self.auth).finish_non_exhaustive()
    }
}

fn mock<T: Entity>(seed: Vec<T>, latency: Duration) -> MockService<T> {
    MockService::new(&seed).with_latency(latency)
}

impl Services {
    /// Every entity served from its seed data
    pub fn mocked(latency: Duration, auth: AuthContext) -> Self {
        Self {
            produtos: Arc::new(mock(seed::produtos(), latency)),
            garcons: Arc::new(mock(seed::garcons(), latency)),
            pedidos: Arc::new(mock(seed::pedidos(), latency)),
            caixas: Arc::new(mock(seed::caixas(), latency)),
            usuarios: Arc::new(mock(seed::usuarios(), latency)),
            auth,
        }
    }

    fn http(config: &ApiConfig, auth: AuthContext) -> ClientResult<Self> {
        let api = ApiClient::new(config, auth.clone())?;
        let produtos = HttpService::<Produto>::new(api.clone())
            .with_disponiveis_path(config.produtos_disponiveis);

        if !config.fallback_to_mock_on_error {
            return Ok(Self {
                produtos: Arc::new(produtos),
                garcons: Arc::new(HttpService::<Garcom>::new(api.clone())),
                pedidos: Arc::new(HttpService::<Pedido>::new(api.clone())),
                caixas: Arc::new(HttpService::<Caixa>::new(api.clone())),
                usuarios: Arc::new(HttpService::<Usuario>::new(api)),
                auth,
            });
        }

        let latency = config.mock_latency;
        Ok(Self {
            produtos: Arc::new(FallbackService::new(produtos, mock(seed::produtos(), latency))),
            garcons: Arc::new(FallbackService::new(
                HttpService::new(api.clone()),
                mock(seed::garcons(), latency),
            )),
            pedidos: Arc::new(FallbackService::new(
                HttpService::new(api.clone()),
                mock(seed::pedidos(), latency),
            )),
            caixas: Arc::new(FallbackService::new(
                HttpService::new(api.clone()),
                mock(seed::caixas(), latency),
            )),
            usuarios: Arc::new(FallbackService::new(
                HttpService::new(api),
                mock(seed::usuarios(), latency),
            )),
            auth,
        })
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Log in and persist the returned token for later requests
    pub async fn sign_in(&self, email: &str, senha: &str) -> ClientResult<LoginResponse> {
        let response = self.usuarios.login(email, senha).await?;
        self.auth.store_token(&response.token)?;
        tracing::info!(email, "Signed in");
        Ok(response)
    }

    pub fn sign_out(&self) -> ClientResult<()> {
        self.auth.clear_token()
    }
}

/// Build the service map for this process
pub fn build_services(config: &ApiConfig, auth: AuthContext) -> ClientResult<Services> {
    let auth = auth.with_login_route(config.login_route.clone());
    tracing::info!(
        base_url = %config.base_url,
        use_mocks = config.use_mocks,
        fallback = config.fallback_to_mock_on_error,
        "API config"
    );
    if config.use_mocks {
        return Ok(Services::mocked(config.mock_latency, auth));
    }
    Services::http(config, auth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Headless;
    use crate::storage::{MemoryTokenStore, TokenStore};

    #[tokio::test]
    async fn test_mocked_map_serves_seeds() {
        let config = ApiConfig::mocked().with_mock_latency(Duration::ZERO);
        let services = build_services(&config, AuthContext::in_memory()).unwrap();

        assert_eq!(services.produtos.get_all().await.unwrap().len(), 4);
        assert_eq!(services.garcons.get_all().await.unwrap().len(), 3);
        assert_eq!(services.pedidos.get_all().await.unwrap().len(), 3);
        assert_eq!(services.caixas.get_all().await.unwrap().len(), 2);
        assert_eq!(services.usuarios.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_sign_in_persists_token() {
        let store = Arc::new(MemoryTokenStore::new());
        let auth = AuthContext::new(store.clone(), Arc::new(Headless));
        let services = Services::mocked(Duration::ZERO, auth);

        services.sign_in("gerente@cervejaria.com", "x").await.unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("mock-token-2"));
        assert!(services.auth().is_authenticated());

        services.sign_out().unwrap();
        assert!(!services.auth().is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_no_token() {
        let services = Services::mocked(Duration::ZERO, AuthContext::in_memory());
        assert!(services.sign_in("nobody@cervejaria.com", "x").await.is_err());
        assert!(!services.auth().is_authenticated());
    }

    #[test]
    fn test_login_route_from_config() {
        let config = ApiConfig::mocked().with_login_route("/entrar");
        let services = build_services(&config, AuthContext::in_memory()).unwrap();
        assert_eq!(services.auth().login_route(), "/entrar");
    }
}
