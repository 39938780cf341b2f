//! Recognition request/response model
//!
//! The NEST gateway takes its recognition parameters as a JSON document
//! travelling next to the raw audio payload, and answers with a JSON
//! document of its own. The wire framing around these is owned by the
//! transport crate; this module only models the two sides of the call.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Recognition parameters serialized as the gateway's JSON config document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// BCP-47 language code (e.g. "ko-KR")
    pub language: String,
    /// Completion mode accepted by the gateway (e.g. "sync")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
    /// Whether to include word-level alignment in the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_alignment: Option<bool>,
    /// Whether to include the full transcript text in the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<bool>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "ko-KR".to_string(),
            completion: None,
            word_alignment: None,
            full_text: None,
        }
    }
}

impl RecognitionConfig {
    /// Create a config for the given language with gateway defaults
    pub fn for_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Serialize to the JSON document the gateway expects
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A single recognition call: parameters plus the audio payload
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// Recognition parameters
    pub config: RecognitionConfig,
    /// Raw audio payload, encoding owned by the external contract
    pub audio: Vec<u8>,
}

impl RecognitionRequest {
    /// Create a request from a config and audio payload
    pub fn new(config: RecognitionConfig, audio: Vec<u8>) -> Self {
        Self { config, audio }
    }
}

/// The gateway's response, passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    /// JSON document returned by the gateway
    pub contents: String,
}

impl RecognitionResult {
    /// Wrap the gateway's response body
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}
