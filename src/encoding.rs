//! Base64 detection and decoding for subscription bodies.
//!
//! Detection is a round-trip heuristic: decode, re-encode, compare. Plain text that
//! happens to be canonical Base64 (for example a single word like `abcd`) is reported
//! as encoded. That false positive is accepted; a stricter guess would reject feeds
//! that are legitimately encoded.

use base64::{engine::general_purpose, Engine as _};

use crate::error::DecodeError;

/// Returns true when `content` survives a standard Base64 decode/encode round trip.
pub fn is_base64(content: &str) -> bool {
    let trimmed = content.trim();
    match general_purpose::STANDARD.decode(trimmed) {
        Ok(bytes) => general_purpose::STANDARD.encode(bytes) == trimmed,
        Err(_) => false,
    }
}

/// Decodes standard Base64 into UTF-8 text.
pub fn decode_base64(content: &str) -> Result<String, DecodeError> {
    let bytes = general_purpose::STANDARD.decode(content.trim())?;
    Ok(String::from_utf8(bytes)?)
}
