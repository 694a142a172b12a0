//! Request/response interceptors
//!
//! Every call made by [`crate::ApiClient`] runs its interceptor chain:
//! `on_request` before sending, then `on_response` or `on_error` once the
//! outcome is known. Interceptors observe and decorate; they never turn a
//! failure into a success.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, StatusCode, Url};

use crate::auth::AuthContext;
use crate::error::ClientError;

pub trait Interceptor: Send + Sync + std::fmt::Debug {
    fn on_request(&self, _request: &mut Request) {}

    fn on_response(&self, _method: &Method, _url: &Url, _status: StatusCode) {}

    fn on_error(&self, _method: &Method, _url: &Url, _error: &ClientError) {}
}

/// Bearer token injection and the 401 policy
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    auth: AuthContext,
}

impl AuthInterceptor {
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }
}

impl Interceptor for AuthInterceptor {
    fn on_request(&self, request: &mut Request) {
        let Some(bearer) = self.auth.bearer() else {
            return;
        };
        match HeaderValue::from_str(&bearer) {
            Ok(value) => {
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(e) => tracing::warn!(error = %e, "Stored token is not a valid header value"),
        }
    }

    fn on_error(&self, _method: &Method, _url: &Url, error: &ClientError) {
        if matches!(error, ClientError::Unauthorized(_)) {
            self.auth.handle_unauthorized();
        }
    }
}

/// Structured request/response logging
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

impl Interceptor for LoggingInterceptor {
    fn on_request(&self, request: &mut Request) {
        tracing::debug!(method = %request.method(), url = %request.url(), "API request");
    }

    fn on_response(&self, method: &Method, url: &Url, status: StatusCode) {
        tracing::debug!(%method, %url, status = status.as_u16(), "API response");
    }

    fn on_error(&self, method: &Method, url: &Url, error: &ClientError) {
        tracing::warn!(
            %method,
            %url,
            status = ?error.status(),
            error = %error,
            "API error"
        );
    }
}
