// cervejaria-client/src/navigation.rs
// Navigation seam - lets the 401 policy redirect without knowing the UI

use std::sync::Mutex;

/// Client-side navigation
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Current route, or `None` outside a browser-like context
    fn current_path(&self) -> Option<String>;

    /// Navigate to `path`
    fn redirect(&self, path: &str);

    /// Redirect to `target` unless the current route already contains it.
    ///
    /// Returns the route left behind when a redirect happened. Implementations
    /// with shared state must check and redirect atomically so concurrent
    /// callers redirect at most once.
    fn redirect_unless_on(&self, target: &str) -> Option<String> {
        let from = self.current_path().filter(|p| !p.contains(target))?;
        self.redirect(target);
        Some(from)
    }
}

/// No UI attached: never redirects
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Navigator for Headless {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn redirect(&self, _path: &str) {}
}

/// In-memory router state
#[derive(Debug)]
pub struct RouteNavigator {
    inner: Mutex<RouteState>,
}

#[derive(Debug)]
struct RouteState {
    current: String,
    redirects: Vec<String>,
}

impl RouteState {
    fn go(&mut self, path: &str) {
        self.current = path.to_string();
        self.redirects.push(path.to_string());
    }
}

impl RouteNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(RouteState {
                current: initial.into(),
                redirects: Vec::new(),
            }),
        }
    }

    /// User-initiated navigation
    pub fn navigate(&self, path: impl Into<String>) {
        if let Ok(mut state) = self.inner.lock() {
            state.current = path.into();
        }
    }

    /// Redirects performed so far, oldest first
    pub fn redirects(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|s| s.redirects.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RouteNavigator {
    fn current_path(&self) -> Option<String> {
        self.inner.lock().ok().map(|s| s.current.clone())
    }

    fn redirect(&self, path: &str) {
        if let Ok(mut state) = self.inner.lock() {
            state.go(path);
        }
    }

    fn redirect_unless_on(&self, target: &str) -> Option<String> {
        let mut state = self.inner.lock().ok()?;
        if state.current.contains(target) {
            return None;
        }
        let from = std::mem::take(&mut state.current);
        state.go(target);
        Some(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_navigator_records_redirects() {
        let nav = RouteNavigator::new("/produtos");
        assert_eq!(nav.current_path().as_deref(), Some("/produtos"));
        nav.redirect("/login");
        nav.navigate("/garcons");
        assert_eq!(nav.current_path().as_deref(), Some("/garcons"));
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_headless_has_no_location() {
        assert_eq!(Headless.current_path(), None);
        assert_eq!(Headless.redirect_unless_on("/login"), None);
    }

    #[test]
    fn test_redirect_unless_on_target() {
        let nav = RouteNavigator::new("/pedidos");
        assert_eq!(nav.redirect_unless_on("/login").as_deref(), Some("/pedidos"));
        assert_eq!(nav.redirect_unless_on("/login"), None);
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_concurrent_redirects_happen_once() {
        let nav = std::sync::Arc::new(RouteNavigator::new("/caixas"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let nav = nav.clone();
                std::thread::spawn(move || nav.redirect_unless_on("/login").is_some())
            })
            .collect();
        let redirected = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| *r)
            .count();
        assert_eq!(redirected, 1);
        assert_eq!(nav.redirects().len(), 1);
    }
}
