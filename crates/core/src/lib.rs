//! Core types for the NEST speech gateway SDK
//!
//! Transport-agnostic foundation shared by the transport crates: client
//! configuration, the error taxonomy, the recognition request/response
//! model, and the client-side trait seam.

pub mod config;
pub mod error;
pub mod recognition;
pub mod transport;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use recognition::{RecognitionConfig, RecognitionRequest, RecognitionResult};
pub use transport::SpeechClient;
