//! Bearer-token call metadata for the NEST gateway
//!
//! The secret key is passed in gRPC metadata as "authorization: Bearer
//! <secret>". The gateway requires the lowercase key; uppercase variants are
//! rejected upstream.

use nest_core::{Error, Result};
use tonic::metadata::{MetadataMap, MetadataValue};

/// Metadata key the gateway expects the credential under
pub const AUTHORIZATION_KEY: &str = "authorization";

/// Build the single-entry call metadata carrying the bearer credential
///
/// The secret format is not validated beyond being encodable as an ASCII
/// header value; whether it grants access is the gateway's call.
pub fn bearer_metadata(secret: &str) -> Result<MetadataMap> {
    let header_value = MetadataValue::try_from(format!("Bearer {}", secret))
        .map_err(|e| Error::Config(format!("secret key is not a valid header value: {}", e)))?;

    let mut metadata = MetadataMap::new();
    metadata.insert(AUTHORIZATION_KEY, header_value);
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_metadata_single_entry() {
        let metadata = bearer_metadata("abc123").unwrap();
        assert_eq!(metadata.len(), 1);
        assert_eq!(
            metadata.get(AUTHORIZATION_KEY).unwrap().to_str().unwrap(),
            "Bearer abc123"
        );
    }

    #[test]
    fn test_bearer_metadata_key_is_lowercase() {
        let metadata = bearer_metadata("abc123").unwrap();
        // The gateway contract requires the lowercase key exactly
        assert!(metadata.contains_key("authorization"));
    }

    #[test]
    fn test_bearer_metadata_arbitrary_secret() {
        let secret = "1c1176a9-77eb-43e1-a4af-demo";
        let metadata = bearer_metadata(secret).unwrap();
        assert_eq!(
            metadata.get(AUTHORIZATION_KEY).unwrap().to_str().unwrap(),
            format!("Bearer {}", secret)
        );
    }

    #[test]
    fn test_bearer_metadata_rejects_unencodable_secret() {
        let result = bearer_metadata("line\nbreak");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
