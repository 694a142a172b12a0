// cervejaria-client/src/storage.rs
// Token storage - where the bearer token lives between requests

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ClientError, ClientResult};

/// Storage key the token is persisted under
pub const TOKEN_KEY: &str = "token";

/// Persisted bearer token storage
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    fn load(&self) -> ClientResult<Option<String>>;
    fn save(&self, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// In-process token storage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        self.token
            .read()
            .map(|t| t.clone())
            .map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// On-disk JSON record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Token storage in a JSON file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store under `{base_path}/{TOKEN_KEY}.json`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join(format!("{TOKEN_KEY}.json"));
        Self { path }
    }

    /// Path of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path).map_err(|e| ClientError::Storage(e.to_string()))?;
        let stored: StoredToken = serde_json::from_str(&json)?;
        Ok(Some(stored.token).filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        self.ensure_dir()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        let json = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| ClientError::Storage(e.to_string()))?;
        }
        Ok(())
    }
}
