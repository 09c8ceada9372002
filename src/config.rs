//! Configuration management for the wicket client.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present. The API
//! token itself never transits configuration; only the reference to it
//! (vault name + secret name) does.

use crate::error::Error;
use crate::secrets::SecretRef;
use std::env;

/// Configuration for connecting to a Zendesk tenant.
///
/// All fields are required and loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Agent email used for token authentication (e.g., `agent@acme.com`).
    pub email: String,

    /// Fully-qualified tenant domain (e.g., `acme.zendesk.com`).
    pub domain: String,

    /// Name of the vault holding the API token.
    pub vault: String,

    /// Name of the secret inside the vault.
    pub secret_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZD_EMAIL`: Agent email for token authentication
    /// - `ZD_DOMAIN`: Fully-qualified tenant domain
    /// - `ZD_VAULT`: Vault holding the API token
    /// - `ZD_SECRET_NAME`: Secret name inside the vault
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any required variable is missing or if
    /// values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, Error> {
        let email = Self::get_required_env("ZD_EMAIL")?;
        let domain = Self::get_required_env("ZD_DOMAIN")?;
        let vault = Self::get_required_env("ZD_VAULT")?;
        let secret_name = Self::get_required_env("ZD_SECRET_NAME")?;

        Self::validate_email(&email)?;

        Ok(Config {
            email,
            domain,
            vault,
            secret_name,
        })
    }

    /// Returns the secret reference described by this configuration.
    pub fn secret_ref(&self) -> SecretRef {
        SecretRef::new(&self.vault, &self.secret_name)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, Error> {
        env::var(name)
            .map_err(|_| Error::missing_env(name))
            .and_then(|value| {
                let value = value.trim().to_string();
                if value.is_empty() {
                    Err(Error::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates the email has a plausible `local@domain` shape.
    fn validate_email(email: &str) -> Result<(), Error> {
        let mut parts = email.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let host = parts.next().unwrap_or_default();
        if local.is_empty() || host.is_empty() {
            return Err(Error::invalid_config(format!(
                "ZD_EMAIL must look like an email address, got: {:?}",
                email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Tests that modify environment variables should not run in parallel.
    // Only pure helpers are tested here.

    #[test]
    fn test_validate_email_accepts_plain_address() {
        assert!(Config::validate_email("agent@acme.com").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_missing_at() {
        assert!(Config::validate_email("agent.acme.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_empty_local_part() {
        assert!(Config::validate_email("@acme.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_empty_host() {
        assert!(Config::validate_email("agent@").is_err());
    }

    #[test]
    fn test_secret_ref_round_trip() {
        let config = Config {
            email: "agent@acme.com".to_string(),
            domain: "acme.zendesk.com".to_string(),
            vault: "KV1".to_string(),
            secret_name: "S1".to_string(),
        };
        let secret = config.secret_ref();
        assert_eq!(secret.vault, "KV1");
        assert_eq!(secret.name, "S1");
    }
}
