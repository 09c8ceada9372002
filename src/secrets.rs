//! Secret store access for API token retrieval.
//!
//! The vault proper is an external collaborator; this module defines the
//! `SecretStore` seam the session builder talks to, plus an
//! environment-backed implementation so the crate runs without wiring up
//! a real vault.

use async_trait::async_trait;

use crate::error::Error;

/// Reference to a secret: which vault, and which entry inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    /// The vault name.
    pub vault: String,

    /// The secret name inside the vault.
    pub name: String,
}

impl SecretRef {
    /// Creates a new secret reference.
    pub fn new(vault: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            vault: vault.into(),
            name: name.into(),
        }
    }
}

/// A store that resolves secret references to plaintext values.
///
/// Implementations must not log the returned value.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Looks up the plaintext secret stored under `name` in `vault`.
    ///
    /// # Errors
    ///
    /// Returns `Error::SecretRetrieval` if the vault is unreachable or
    /// the secret does not exist.
    async fn lookup(&self, vault: &str, name: &str) -> Result<String, Error>;
}

/// Secret store backed by process environment variables.
///
/// A secret `(KV1, api-token)` resolves from the variable `KV1_API_TOKEN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    /// Creates a new environment-backed store.
    pub fn new() -> Self {
        Self
    }

    /// Environment variable name for a given secret reference.
    fn env_key(vault: &str, name: &str) -> String {
        format!("{}_{}", vault, name)
            .to_uppercase()
            .replace('-', "_")
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn lookup(&self, vault: &str, name: &str) -> Result<String, Error> {
        let key = Self::env_key(vault, name);
        match std::env::var(&key) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) => Err(Error::secret_retrieval(
                vault,
                name,
                format!("environment variable {} is empty", key),
            )),
            Err(_) => Err(Error::secret_retrieval(
                vault,
                name,
                format!("environment variable {} is not set", key),
            )),
        }
    }
}
