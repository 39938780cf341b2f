//! gRPC client for the NEST speech gateway
//!
//! Opens a TLS-secured channel to the gateway using system-trusted roots,
//! attaches the bearer credential as per-call metadata, and drives the unary
//! recognition call. The channel is created lazily, reused across calls, and
//! released when the client is dropped or `close()` is called.
//!
//! # Usage
//!
//! ```
//! use nest_core::ClientConfig;
//! use nest_grpc::NestClient;
//!
//! # tokio_test::block_on(async {
//! let client = NestClient::new(ClientConfig::new("demo-secret-key")).unwrap();
//! // client.recognize(request).await drives one call
//! client.close().await.unwrap();
//! # });
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nest_core::{
    ClientConfig, Error, RecognitionRequest, RecognitionResult, Result, SpeechClient,
};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::adapters;
use crate::auth;
use crate::generated::NestServiceClient;
use crate::status;

/// Secure client for the NEST gateway
///
/// The client owns its channel: dropping the value releases the connection,
/// and `close()` releases it early for long-lived processes. A closed client
/// stays usable; the next call reconnects.
pub struct NestClient {
    /// Validated configuration, fixed for the client's lifetime
    config: Arc<ClientConfig>,

    /// gRPC channel (created lazily, reused across calls)
    channel: tokio::sync::Mutex<Option<Channel>>,
}

impl NestClient {
    /// Create a new client from a validated configuration
    ///
    /// No connection is opened here; the channel is established on the first
    /// call.
    ///
    /// # Errors
    ///
    /// * `Error::Config` - empty endpoint, missing secret key, or zero
    ///   connect timeout
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            channel: tokio::sync::Mutex::new(None),
        })
    }

    /// Create a client configured from the environment
    ///
    /// Reads `NEST_ENDPOINT`, `NEST_SECRET_KEY`, `NEST_CONNECT_TIMEOUT_MS`
    /// and `NEST_REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get or create the gRPC channel
    async fn channel(&self) -> Result<Channel> {
        let mut guard = self.channel.lock().await;

        if let Some(ref channel) = *guard {
            return Ok(channel.clone());
        }

        let channel = self.connect().await?;
        *guard = Some(channel.clone());
        Ok(channel)
    }

    /// Establish the secured channel
    ///
    /// Channel establishment is bounded by the configured connect timeout;
    /// an unreachable gateway never blocks indefinitely.
    async fn connect(&self) -> Result<Channel> {
        let uri = normalize_endpoint(&self.config.endpoint);

        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| {
                Error::Config(format!(
                    "Invalid gateway endpoint '{}': {}",
                    self.config.endpoint, e
                ))
            })?
            .connect_timeout(Duration::from_millis(self.config.connect_timeout_ms));

        if let Some(timeout_ms) = self.config.request_timeout_ms {
            endpoint = endpoint.timeout(Duration::from_millis(timeout_ms));
        }

        // TLS with system-trusted roots for https targets; plain http is
        // only reached when explicitly configured (local mocks)
        if uri.starts_with("https://") {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(|e| Error::Connection {
                    endpoint: uri.clone(),
                    reason: format!("TLS configuration failed: {}", e),
                })?;
        }

        tracing::debug!("opening channel to {}", uri);

        endpoint.connect().await.map_err(|e| Error::Connection {
            endpoint: uri,
            reason: e.to_string(),
        })
    }

    /// Perform one recognition call against the gateway
    ///
    /// # Errors
    ///
    /// * `Error::Connection` - channel establishment failed
    /// * `Error::Auth` - the gateway rejected the bearer token
    /// * `Error::Rpc` - any other non-success status from the gateway
    pub async fn recognize(&self, request: RecognitionRequest) -> Result<RecognitionResult> {
        let channel = self.channel().await?;
        let metadata = auth::bearer_metadata(&self.config.secret_key)?;

        let mut call = tonic::Request::new(adapters::to_wire(request)?);
        *call.metadata_mut() = metadata;

        let mut stub = NestServiceClient::new(channel);
        let response = stub.recognize(call).await.map_err(status::map_status)?;

        Ok(adapters::from_wire(response.into_inner()))
    }

    /// Check if the gateway endpoint is reachable
    pub async fn health_check(&self) -> Result<bool> {
        match self.channel().await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Health check failed for {}: {}", self.config.endpoint, e);
                Ok(false)
            }
        }
    }

    /// Release the cached channel
    ///
    /// The next call reconnects. Dropping the client has the same effect on
    /// the transport; `close()` exists for deterministic release inside
    /// long-lived processes.
    pub async fn close(&self) -> Result<()> {
        let mut guard = self.channel.lock().await;
        if guard.take().is_some() {
            tracing::debug!("released channel to {}", self.config.endpoint);
        }
        Ok(())
    }
}

#[async_trait]
impl SpeechClient for NestClient {
    async fn recognize(&self, request: RecognitionRequest) -> Result<RecognitionResult> {
        NestClient::recognize(self, request).await
    }

    async fn health_check(&self) -> Result<bool> {
        NestClient::health_check(self).await
    }

    async fn close(&self) -> Result<()> {
        NestClient::close(self).await
    }
}

/// Default the scheme to https; the gateway only speaks TLS
fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = NestClient::new(ClientConfig::new("test-secret"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_client_missing_secret() {
        let client = NestClient::new(ClientConfig::default());
        assert!(matches!(client, Err(Error::Config(_))));
    }

    #[test]
    fn test_create_client_empty_endpoint() {
        let config = ClientConfig {
            endpoint: String::new(),
            ..ClientConfig::new("test-secret")
        };
        assert!(matches!(NestClient::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(
            normalize_endpoint("clovaspeech-gw.ncloud.com:50051"),
            "https://clovaspeech-gw.ncloud.com:50051"
        );
        assert_eq!(
            normalize_endpoint("http://127.0.0.1:50051"),
            "http://127.0.0.1:50051"
        );
        assert_eq!(
            normalize_endpoint("https://clovaspeech-gw.ncloud.com:50051"),
            "https://clovaspeech-gw.ncloud.com:50051"
        );
    }

    #[tokio::test]
    async fn test_health_check_unreachable() {
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            connect_timeout_ms: 1_000,
            ..ClientConfig::new("test-secret")
        };
        let client = NestClient::new(config).unwrap();

        let result = client.health_check().await;
        // Unreachable endpoints report unhealthy, they don't error
        assert!(result.is_ok());
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_close_without_channel_is_noop() {
        let client = NestClient::new(ClientConfig::new("test-secret")).unwrap();
        assert!(client.close().await.is_ok());
    }
}
