//! Base64 codec for image payloads.
//!
//! Standard alphabet, padded output. Decode accepts both padded and
//! unpadded input; some clients strip trailing `=` from their payloads.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine as _};

const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as padded standard Base64. Empty input yields an empty
/// string.
pub fn encode(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}

/// Decode standard Base64 text.
///
/// Fails on any character outside `[A-Za-z0-9+/=]` and on malformed
/// padding. The empty string decodes to empty bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    ENGINE.decode(text)
}
