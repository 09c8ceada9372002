//! Session construction for the Zendesk API.
//!
//! The builder resolves the API token from a [`SecretStore`], composes
//! the Basic credential and base URI, and verifies connectivity with a
//! single liveness request. Only a fully verified [`Session`] is ever
//! returned; downstream operations cannot run unauthenticated.
//!
//! # Security
//!
//! The plaintext token is dropped as soon as the credential is encoded.
//! The credential itself is never logged.

use base64::prelude::{Engine as _, BASE64_STANDARD};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::secrets::{SecretRef, SecretStore};

/// An immutable, liveness-verified session against one tenant.
///
/// Holds only data (base URI + credential), no live resources; cloning
/// is cheap and a single session is safe to reuse across tasks.
#[derive(Clone)]
pub struct Session {
    /// API root, `https://{domain}/api/v2`.
    base_url: String,

    /// `Authorization` header value.
    /// SECURITY: Never log this value!
    authorization: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .finish()
    }
}

impl Session {
    /// The API root this session talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `Authorization` header value.
    ///
    /// Exposed to the crate for request building and error
    /// sanitization only.
    pub(crate) fn authorization(&self) -> &str {
        &self.authorization
    }
}

/// Builder producing a verified [`Session`].
///
/// # Example
///
/// ```ignore
/// let session = SessionBuilder::new("agent@acme.com", "acme.zendesk.com", SecretRef::new("KV1", "S1"))
///     .connect(&EnvSecretStore::new())
///     .await?;
/// ```
#[derive(Clone)]
pub struct SessionBuilder {
    email: String,
    domain: String,
    secret: SecretRef,
    endpoint: Option<String>,
}

impl SessionBuilder {
    /// Creates a builder for the given agent email, tenant domain, and
    /// secret reference.
    pub fn new(email: impl Into<String>, domain: impl Into<String>, secret: SecretRef) -> Self {
        Self {
            email: email.into(),
            domain: domain.into(),
            secret,
            endpoint: None,
        }
    }

    /// Creates a builder from environment configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.email, &config.domain, config.secret_ref())
    }

    /// Points the session at an explicit API root instead of the one
    /// derived from the domain (reverse proxies, test servers).
    pub fn with_endpoint(mut self, base_url: impl Into<String>) -> Self {
        self.endpoint = Some(base_url.into());
        self
    }

    /// Resolves the secret, builds the credential, and verifies
    /// connectivity.
    ///
    /// Performs exactly one secret-store read and one HTTP GET; there
    /// are no retries.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if the domain is not FQDN-shaped (checked
    ///   before any vault or network call)
    /// - `Error::SecretRetrieval` if the store cannot produce the token
    /// - `Error::Connectivity` if the liveness request fails or returns
    ///   a non-success status
    pub async fn connect(self, store: &dyn SecretStore) -> Result<Session, Error> {
        validate_domain(&self.domain)?;

        let token = store.lookup(&self.secret.vault, &self.secret.name).await?;
        tracing::debug!(
            vault = %self.secret.vault,
            name = %self.secret.name,
            "API token resolved"
        );

        let authorization = basic_credential(&self.email, &token);
        drop(token);

        let base_url = match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}/api/v2", self.domain),
        };

        // A crafted domain must not smuggle a path or userinfo into the URL.
        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::validation(format!("invalid API root {:?}: {}", base_url, e)))?;
        if self.endpoint.is_none() && parsed.host_str() != Some(self.domain.as_str()) {
            return Err(Error::validation(format!(
                "domain {:?} does not produce a clean tenant URL",
                self.domain
            )));
        }

        let http = crate::client::http_client()?;
        let url = format!("{}/tickets.json", base_url);
        tracing::debug!(domain = %self.domain, "running liveness check");

        let response = http
            .get(&url)
            .header(AUTHORIZATION, &authorization)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                Error::connectivity(Error::sanitize_message(&e.to_string(), &authorization))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = Error::http_status(status, &body, &authorization);
            return Err(Error::connectivity(detail.to_string()));
        }

        tracing::info!(domain = %self.domain, "session established");

        Ok(Session {
            base_url,
            authorization,
        })
    }
}

/// Validates the tenant domain is FQDN-shaped: dot-separated labels of
/// letters, digits and inner hyphens, ending in an alphabetic TLD of at
/// least two characters.
fn validate_domain(domain: &str) -> Result<(), Error> {
    let labels: Vec<&str> = domain.split('.').collect();
    let shaped = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && label
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        })
        && labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic()));

    if shaped {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "domain {:?} is not a fully-qualified domain name",
            domain
        )))
    }
}

/// Composes the Basic credential for the API's token-auth mode.
///
/// The `/token` suffix on the email is the API's documented username
/// convention for token authentication.
fn basic_credential(email: &str, token: &str) -> String {
    let credentials = format!("{email}/token:{token}");
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_domain_accepts_tenant_domains() {
        assert!(validate_domain("tenant.zendesk.com").is_ok());
        assert!(validate_domain("support.acme.co.uk").is_ok());
        assert!(validate_domain("a-b.example.io").is_ok());
        assert!(validate_domain("x1.example.com").is_ok());
    }

    #[test]
    fn test_validate_domain_rejects_malformed() {
        assert!(validate_domain("").is_err());
        assert!(validate_domain("localhost").is_err());
        assert!(validate_domain("tenant.").is_err());
        assert!(validate_domain(".zendesk.com").is_err());
        assert!(validate_domain("tenant..com").is_err());
        assert!(validate_domain("tenant.zendesk.c").is_err());
        assert!(validate_domain("tenant.zendesk.c0m").is_err());
        assert!(validate_domain("-tenant.zendesk.com").is_err());
        assert!(validate_domain("tenant-.zendesk.com").is_err());
        assert!(validate_domain("tenant.zendesk.com/api").is_err());
        assert!(validate_domain("evil.com@tenant.zendesk.com").is_err());
        assert!(validate_domain("tenant zendesk.com").is_err());
    }

    #[test]
    fn test_basic_credential_encoding() {
        assert_eq!(
            basic_credential("foo@bar.com", "abc123"),
            "Basic Zm9vQGJhci5jb20vdG9rZW46YWJjMTIz"
        );
    }

    #[test]
    fn test_session_accessors() {
        let session = Session {
            base_url: "https://tenant.zendesk.com/api/v2".to_string(),
            authorization: "Basic abc".to_string(),
        };
        assert_eq!(session.base_url(), "https://tenant.zendesk.com/api/v2");
        assert_eq!(session.authorization(), "Basic abc");
    }
}
