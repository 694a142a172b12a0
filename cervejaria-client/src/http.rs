//! HTTP client core
//!
//! One configured `reqwest::Client` shared by every HTTP-backed service,
//! running the interceptor chain around each call.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::DeleteResult;

use crate::auth::AuthContext;
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::interceptor::{AuthInterceptor, Interceptor, LoggingInterceptor};

/// Error body shape returned by the backend
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the Cervejaria REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ApiClient {
    /// Build the client with logging and auth interceptors installed
    pub fn new(config: &ApiConfig, auth: AuthContext) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {e}", config.base_url)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            interceptors: vec![
                Arc::new(LoggingInterceptor),
                Arc::new(AuthInterceptor::new(auth)),
            ],
        })
    }

    /// Append an interceptor to the chain
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let body = self.send::<()>(Method::GET, path, None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = self.send(Method::POST, path, Some(body)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = self.send(Method::PUT, path, Some(body)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// DELETE; an empty 2xx (typically 204) counts as success
    pub async fn delete(&self, path: &str) -> ClientResult<DeleteResult> {
        let body = self.send::<()>(Method::DELETE, path, None).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(DeleteResult::ok());
        }
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(path, error = %e, "Unreadable delete response body");
            ClientError::InvalidResponse(format!("DELETE {path}: {e}"))
        })
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| ClientError::Config(format!("invalid URL {raw}: {e}")))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Vec<u8>> {
        let url = self.url(path)?;
        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let mut request = builder.build()?;
        for interceptor in &self.interceptors {
            interceptor.on_request(&mut request);
        }

        match self.execute(request).await {
            Ok((status, body)) => {
                for interceptor in &self.interceptors {
                    interceptor.on_response(&method, &url, status);
                }
                Ok(body)
            }
            Err(error) => {
                for interceptor in &self.interceptors {
                    interceptor.on_error(&method, &url, &error);
                }
                Err(error)
            }
        }
    }

    async fn execute(&self, request: reqwest::Request) -> ClientResult<(StatusCode, Vec<u8>)> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            let message = error_message(status, &body);
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
                _ => ClientError::Status { status, message },
            });
        }
        Ok((status, body))
    }
}

/// Server message from the body, falling back to the raw text, then the reason phrase
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ApiErrorResponse>(body)
        && let Some(message) = parsed.message.or(parsed.error)
    {
        return message;
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_message() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            br#"{"message":"Matricula duplicada","status":400}"#,
        );
        assert_eq!(msg, "Matricula duplicada");
    }

    #[test]
    fn test_error_message_falls_back() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, b"upstream down"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, b""),
            "Not Found"
        );
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("http://localhost:8080/api/");
        let client = ApiClient::new(&config, AuthContext::in_memory()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(
            client.url("/produtos/3").unwrap().as_str(),
            "http://localhost:8080/api/produtos/3"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ApiConfig::new("not a url");
        assert!(matches!(
            ApiClient::new(&config, AuthContext::in_memory()),
            Err(ClientError::Config(_))
        ));
    }
}
