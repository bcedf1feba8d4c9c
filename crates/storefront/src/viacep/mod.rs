//! ViaCEP address lookup client.
//!
//! # Architecture
//!
//! - One endpoint: `GET {base_url}/ws/{cep}/json/`
//! - The service answers `200 OK` for well-formed codes it cannot resolve,
//!   with the body `{"erro": true}` (some deployments send `"erro": "true"`)
//! - Anything else that is not a 2xx address object is a generic lookup
//!   failure; the caller decides how to surface it
//!
//! The base URL is injected via [`ViaCepConfig`] so tests can point the
//! client at a local stub.
//!
//! [`ViaCepConfig`]: crate::config::ViaCepConfig

use std::sync::Arc;
use std::time::Duration;

use camiseta_core::Cep;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::config::ViaCepConfig;

/// Timeout applied to each lookup request.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when looking up an address.
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The code is well-formed but does not resolve to an address.
    #[error("CEP not found: {0}")]
    NotFound(Cep),
}

/// A resolved address, fields verbatim from the lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub cep: String,
    /// Street.
    #[serde(default)]
    pub logradouro: String,
    /// District / neighborhood.
    #[serde(default)]
    pub bairro: String,
    /// City.
    #[serde(default)]
    pub localidade: String,
    /// State abbreviation.
    #[serde(default)]
    pub uf: String,
}

/// Client for the ViaCEP lookup API.
#[derive(Clone)]
pub struct ViaCepClient {
    inner: Arc<ViaCepClientInner>,
}

struct ViaCepClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new lookup client.
    #[must_use]
    pub fn new(config: &ViaCepConfig) -> Self {
        Self {
            inner: Arc::new(ViaCepClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Resolve a complete CEP to an address.
    ///
    /// # Errors
    ///
    /// - [`ViaCepError::NotFound`] when the service reports `{"erro": true}`
    /// - [`ViaCepError::Http`] / [`ViaCepError::Status`] /
    ///   [`ViaCepError::Parse`] for transport and protocol failures
    #[instrument(skip(self), fields(cep = %cep))]
    pub async fn lookup(&self, cep: &Cep) -> Result<Address, ViaCepError> {
        let url = format!("{}/ws/{}/json/", self.inner.base_url, cep);

        let response = self
            .inner
            .client
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "ViaCEP returned non-success status");
            return Err(ViaCepError::Status(status));
        }

        let body = response.text().await?;
        parse_lookup_response(cep, &body)
    }
}

/// Interpret a 2xx ViaCEP response body.
fn parse_lookup_response(cep: &Cep, body: &str) -> Result<Address, ViaCepError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    // Unresolvable codes come back as 200 with a truthy error flag
    let erro = match value.get("erro") {
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::String(flag)) => flag == "true",
        _ => false,
    };
    if erro {
        return Err(ViaCepError::NotFound(cep.clone()));
    }

    Ok(serde_json::from_value(value)?)
}
