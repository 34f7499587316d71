use std::time::Duration;

use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;
use secrecy::SecretString;
use url::Url;

use crate::Result;
use crate::config::SubmitConfig;
use crate::error::Error;
use crate::payload::{SubmissionPayload, canonical_bytes};
use crate::sign::{self, SIGNATURE_HEADER};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the one-shot signed submission flow.
#[derive(Clone, Debug)]
pub struct SubmitClient {
    endpoint: Url,
    secret: SecretString,
    client: ReqwestClient,
}

impl SubmitClient {
    /// Creates a client with a default HTTP client and request timeout.
    pub fn new(endpoint: Url, secret: SecretString) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::network)?;
        Ok(Self::with_client(endpoint, secret, client))
    }

    /// Creates a client with a custom HTTP client.
    #[must_use]
    pub fn with_client(endpoint: Url, secret: SecretString, client: ReqwestClient) -> Self {
        Self {
            endpoint,
            secret,
            client,
        }
    }

    /// Creates a client from resolved configuration.
    pub fn from_config(config: &SubmitConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.secret.clone())
    }

    /// Canonicalizes, signs, and submits the payload, returning the receipt
    /// body verbatim.
    ///
    /// The request body is byte-identical to the MAC input; the signature is
    /// never recomputed over a re-parsed or re-formatted copy.
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<String> {
        let body = canonical_bytes(payload)?;
        let signature = sign::sign(&self.secret, &body);

        tracing::debug!(
            payload = %String::from_utf8_lossy(&body),
            signature = %signature.to_hex(),
            "submitting signed payload"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature.header_value())
            .body(body)
            .send()
            .await
            .map_err(Error::network)?;

        let status = response.status();
        let receipt = response.text().await.map_err(Error::network)?;

        if !status.is_success() {
            return Err(Error::rejected(status, receipt));
        }

        tracing::info!(status = status.as_u16(), "submission accepted");
        Ok(receipt)
    }
}
