//! HTTP client for the remote polynomial computation service.
//!
//! The service exposes one endpoint per operation:
//! `POST {base-url}/api/polinomios/{operation}` with a JSON body
//! `{"polinomios": [...]}`. The response carries two string fields,
//! `resultado` and `explicacion`; absence or emptiness of either is treated
//! as a failure, never as a partial success.
//!
//! One outbound call per invocation, fail-fast: no retries, no
//! user-initiated abort. Errors are delivered as a typed [`ComputeError`]
//! so the session layer can fold every failure into its
//! remote-computation-failed condition.

use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use polycalc_types::{Operand, Operation};

/// Canonical deployment of the computation service.
pub const DEFAULT_BASE_URL: &str = "https://polinomios-api.vercel.app";

const CONNECT_TIMEOUT_SECS: u64 = 30;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Shared HTTP client, built once.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build configured HTTP client: {e}. Using defaults.");
                reqwest::Client::new()
            })
    })
}

/// Where the computation service lives.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// Build a config for the given base URL; a trailing slash is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}/api/polinomios/{}", self.base_url, operation.wire_name())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// A well-formed service answer: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    /// The computed polynomial expression.
    pub result_expression: String,
    /// The raw delimiter-annotated explanation, not yet parsed into steps.
    pub explanation: String,
}

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("network error calling computation service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("computation service returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("computation service response is missing or empty: {field}")]
    MalformedResponse { field: &'static str },
}

#[derive(Serialize)]
struct ComputeRequest<'a> {
    polinomios: Vec<&'a str>,
}

#[derive(Deserialize)]
struct ComputeResponse {
    #[serde(default)]
    resultado: Option<String>,
    #[serde(default)]
    explicacion: Option<String>,
}

/// Submit the operands to the service for one operation.
///
/// Exactly one outbound call; the precondition that `operands.len() >= 2`
/// belongs to the caller, this function sends whatever it is given.
pub async fn compute(
    config: &ServiceConfig,
    operation: Operation,
    operands: &[Operand],
) -> Result<Computation, ComputeError> {
    let url = config.endpoint(operation);
    let body = ComputeRequest {
        polinomios: operands.iter().map(Operand::as_str).collect(),
    };

    tracing::debug!(%url, operands = operands.len(), "Submitting computation request");

    let response = http_client().post(&url).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = read_capped_error_body(response).await;
        tracing::warn!(%status, "Computation service rejected the request");
        return Err(ComputeError::Http { status, body });
    }

    let parsed: ComputeResponse = response.json().await?;
    let result_expression = non_empty_field(parsed.resultado, "resultado")?;
    let explanation = non_empty_field(parsed.explicacion, "explicacion")?;

    Ok(Computation {
        result_expression,
        explanation,
    })
}

fn non_empty_field(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ComputeError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ComputeError::MalformedResponse { field }),
    }
}

/// Read an error body, truncating so a misbehaving service cannot make us
/// buffer arbitrarily much diagnostics text.
async fn read_capped_error_body(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body;
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated)", &body[..end])
}
