//! Base64 encoding of asset bytes

use base64::{engine::general_purpose, Engine};
use crate::error::Result;

/// Encode bytes with the standard padded alphabet
pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Decode a standard padded base64 string
pub fn decode(data: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(data)?)
}
