//! Conversions between the domain model and the wire types

use nest_core::{RecognitionRequest, RecognitionResult, Result};

use crate::generated::{NestRequest, NestResponse};

/// Convert a domain request into the wire message
///
/// The recognition parameters travel as a JSON document next to the raw
/// audio payload.
pub fn to_wire(request: RecognitionRequest) -> Result<NestRequest> {
    Ok(NestRequest {
        config: request.config.to_json()?,
        audio: request.audio,
    })
}

/// Convert the wire response into the domain result, unchanged
pub fn from_wire(response: NestResponse) -> RecognitionResult {
    RecognitionResult::new(response.contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nest_core::RecognitionConfig;

    #[test]
    fn test_to_wire_serializes_config() {
        let request = RecognitionRequest::new(
            RecognitionConfig::for_language("ko-KR"),
            vec![1, 2, 3, 4],
        );

        let wire = to_wire(request).unwrap();
        assert!(wire.config.contains("\"language\":\"ko-KR\""));
        assert_eq!(wire.audio, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_wire_passes_contents_through() {
        let response = NestResponse {
            contents: r#"{"text":"ok"}"#.to_string(),
        };
        let result = from_wire(response);
        assert_eq!(result.contents, r#"{"text":"ok"}"#);
    }
}
