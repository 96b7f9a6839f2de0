//! Decoder implementation
//!
//! Tries each charset in priority order until one accepts the buffer.

use super::types::{Charset, DecodedText};
use crate::error::{Error, Result};

/// Multi-charset text decoder
#[derive(Debug, Clone)]
pub struct TextDecoder {
    /// Charsets in the order they are attempted
    encodings: Vec<Charset>,
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self {
            encodings: Charset::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl TextDecoder {
    /// Create a decoder with the default charset order
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom charset order
    pub fn with_encodings(encodings: impl Into<Vec<Charset>>) -> Self {
        Self {
            encodings: encodings.into(),
        }
    }

    /// Charsets in attempt order
    pub fn encodings(&self) -> &[Charset] {
        &self.encodings
    }

    /// Decode an upload into text
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedText> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }

        for &encoding in &self.encodings {
            if let Some(text) = encoding.decode(bytes) {
                tracing::debug!(%encoding, bytes = bytes.len(), "Decoded upload");
                return Ok(DecodedText { text, encoding });
            }
            tracing::debug!(%encoding, "Charset rejected upload");
        }

        Err(Error::DecodeFailure {
            tried: self
                .encodings
                .iter()
                .map(|e| e.name().to_string())
                .collect(),
        })
    }
}
