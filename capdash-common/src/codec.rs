//! Data-URL image codec
//!
//! Browser canvas captures arrive as base64 data URLs
//! (`data:image/jpeg;base64,<payload>`). Storage wants raw bytes. This is
//! the only transformation performed on captured frames: no resize, no
//! recompress, no check that the decoded bytes are a well-formed JPEG.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{Error, Result};

/// Decode a base64 data URL into raw image bytes.
///
/// Everything up to and including the first comma is discarded; the
/// remainder is base64-decoded with the standard alphabet.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let (_, payload) = data_url
        .split_once(',')
        .ok_or_else(|| Error::MalformedInput("data URL has no comma separator".to_string()))?;

    STANDARD
        .decode(payload)
        .map_err(|e| Error::MalformedInput(format!("invalid base64 payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_after_first_comma() {
        let bytes = decode_data_url("data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(bytes, vec![0, 0, 0]);
    }

    #[test]
    fn matches_plain_base64_decoding_of_payload() {
        let payload = STANDARD.encode(b"jpeg bytes here");
        let data_url = format!("data:image/jpeg;base64,{}", payload);
        assert_eq!(decode_data_url(&data_url).unwrap(), b"jpeg bytes here");
    }

    #[test]
    fn metadata_is_ignored_not_validated() {
        // Only the comma matters; the prefix is never inspected.
        assert_eq!(decode_data_url("anything,AAAA").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn rejects_missing_comma() {
        let err = decode_data_url("data:image/jpeg;base64").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_data_url("data:image/jpeg;base64,not base64!").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
