//! Client-side transport interface for the NEST gateway
//!
//! The trait mirrors the single call shape the gateway exposes, keeping the
//! wire protocol out of the core crate so another transport could be bound
//! without touching callers.

use async_trait::async_trait;

use crate::recognition::{RecognitionRequest, RecognitionResult};
use crate::Result;

/// Client-side interface to a speech recognition gateway
///
/// # Thread Safety
///
/// Implementations must be Send + Sync to allow concurrent access from
/// multiple async tasks.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    /// Perform one recognition call
    ///
    /// # Errors
    ///
    /// * `Error::Connection` - channel establishment failed (DNS, TCP, TLS,
    ///   connect timeout)
    /// * `Error::Auth` - the gateway rejected the bearer token
    /// * `Error::Rpc` - the gateway returned any other non-success status
    async fn recognize(&self, request: RecognitionRequest) -> Result<RecognitionResult>;

    /// Check if the gateway endpoint is reachable
    ///
    /// Returns `Ok(false)` rather than an error for unreachable endpoints.
    async fn health_check(&self) -> Result<bool>;

    /// Release the underlying channel
    ///
    /// The client stays usable; the next call reconnects.
    async fn close(&self) -> Result<()>;
}
