//! Authentication context
//!
//! Carries the token storage, the navigator and the login route through the
//! service layer. Every request reads the token through it and every 401
//! goes through [`AuthContext::handle_unauthorized`].

use std::sync::Arc;

use crate::config::DEFAULT_LOGIN_ROUTE;
use crate::error::ClientResult;
use crate::navigation::{Headless, Navigator};
use crate::storage::{MemoryTokenStore, TokenStore};

#[derive(Debug, Clone)]
pub struct AuthContext {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl AuthContext {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            navigator,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }

    /// Headless context with in-memory storage
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()), Arc::new(Headless))
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Current token; storage failures read as "no token"
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token");
                None
            }
        }
    }

    /// `Authorization` header value, if a token is stored
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) -> ClientResult<()> {
        self.store.save(token)
    }

    pub fn clear_token(&self) -> ClientResult<()> {
        self.store.clear()
    }

    /// 401 policy: drop the token and send the user to the login route.
    ///
    /// The redirect only happens with a browser-like location that is not
    /// already the login route. Returns whether a redirect was issued.
    pub fn handle_unauthorized(&self) -> bool {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Error removing token");
        }
        match self.navigator.redirect_unless_on(&self.login_route) {
            Some(from) => {
                tracing::info!(from = %from, to = %self.login_route, "Redirected to login");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::navigation::RouteNavigator;

    #[derive(Debug)]
    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> ClientResult<Option<String>> {
            Err(ClientError::Storage("denied".into()))
        }
        fn save(&self, _token: &str) -> ClientResult<()> {
            Err(ClientError::Storage("denied".into()))
        }
        fn clear(&self) -> ClientResult<()> {
            Err(ClientError::Storage("denied".into()))
        }
    }

    #[test]
    fn test_bearer_from_store() {
        let auth = AuthContext::new(
            Arc::new(MemoryTokenStore::with_token("abc")),
            Arc::new(Headless),
        );
        assert_eq!(auth.bearer().as_deref(), Some("Bearer abc"));

        auth.clear_token().unwrap();
        assert_eq!(auth.bearer(), None);
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let nav = Arc::new(RouteNavigator::new("/pedidos"));
        let auth = AuthContext::new(Arc::new(BrokenStore), nav.clone());
        assert_eq!(auth.bearer(), None);
        assert!(auth.handle_unauthorized());
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_unauthorized_clears_and_redirects_once() {
        let store = Arc::new(MemoryTokenStore::with_token("abc"));
        let nav = Arc::new(RouteNavigator::new("/caixas"));
        let auth = AuthContext::new(store.clone(), nav.clone());

        assert!(auth.handle_unauthorized());
        assert_eq!(store.load().unwrap(), None);
        // now on /login: no second redirect
        assert!(!auth.handle_unauthorized());
        assert_eq!(nav.redirects().len(), 1);
    }

    #[test]
    fn test_no_redirect_without_location() {
        let store = Arc::new(MemoryTokenStore::with_token("abc"));
        let auth = AuthContext::new(store.clone(), Arc::new(Headless));
        assert!(!auth.handle_unauthorized());
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_401s_redirect_once() {
        let nav = Arc::new(RouteNavigator::new("/garcons"));
        let auth = AuthContext::new(Arc::new(MemoryTokenStore::with_token("abc")), nav.clone());
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let auth = auth.clone();
                tokio::spawn(async move { auth.handle_unauthorized() })
            })
            .collect();
        let mut redirected = 0;
        for task in tasks {
            if task.await.unwrap() {
                redirected += 1;
            }
        }
        assert_eq!(redirected, 1);
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_custom_login_route() {
        let nav = Arc::new(RouteNavigator::new("/entrar"));
        let auth = AuthContext::new(Arc::new(MemoryTokenStore::new()), nav.clone())
            .with_login_route("/entrar");
        assert!(!auth.handle_unauthorized());
        assert!(nav.redirects().is_empty());
    }
}
