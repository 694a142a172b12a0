//! Cervejaria Client - service layer for the Cervejaria management console
//!
//! Provides the per-entity CRUD services (Produto, Garcom, Pedido, Caixa,
//! Usuario) over the REST API, with an in-memory mock implementation and an
//! optional fallback-to-mock policy.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod logger;
pub mod mock;
pub mod navigation;
pub mod service;
pub mod storage;

pub use auth::AuthContext;
pub use config::{ApiConfig, ProdutosDisponiveisPath};
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use interceptor::{AuthInterceptor, Interceptor, LoggingInterceptor};
pub use mock::MockService;
pub use navigation::{Headless, Navigator, RouteNavigator};
pub use service::{
    CrudService, FallbackService, HttpService, ProdutoService, Services, UsuarioService,
    build_services,
};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{DeleteResult, Entity, EntityKind, LoginResponse, ValidationError, parse_id};
