//! Charset types
//!
//! Defines the supported encodings and the decoded text value.

use crate::error::{Error, Result};
use encoding_rs::{Encoding, ISO_8859_2, UTF_8, WINDOWS_1250};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bytes the Windows-1250 codepage leaves unassigned.
///
/// WHATWG (and so encoding_rs) maps them to C1 controls instead of failing.
const WINDOWS_1250_UNDEFINED: [u8; 5] = [0x81, 0x83, 0x88, 0x90, 0x98];

/// Character encoding candidate for an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Charset {
    /// UTF-8, validated strictly
    Utf8,
    /// Windows-1250 (Central European)
    Windows1250,
    /// ISO-8859-2 (Latin-2)
    Iso8859_2,
    /// CP1250, the same table as Windows-1250 under its codepage name
    Cp1250,
    /// ISO-8859-1, maps every byte to the code point of the same value
    Latin1,
}

impl Charset {
    /// Default priority order
    pub const DEFAULT_ORDER: [Charset; 5] = [
        Charset::Utf8,
        Charset::Windows1250,
        Charset::Iso8859_2,
        Charset::Cp1250,
        Charset::Latin1,
    ];

    /// Canonical name of the charset
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Windows1250 => "windows-1250",
            Charset::Iso8859_2 => "iso-8859-2",
            Charset::Cp1250 => "cp1250",
            Charset::Latin1 => "latin-1",
        }
    }

    /// Parse a charset label, case-insensitively
    pub fn from_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "windows-1250" | "win-1250" | "win1250" => Ok(Charset::Windows1250),
            "iso-8859-2" | "iso8859-2" | "latin-2" | "latin2" | "l2" => Ok(Charset::Iso8859_2),
            "cp1250" | "cp-1250" => Ok(Charset::Cp1250),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Charset::Latin1),
            _ => Err(Error::config(format!("Unknown encoding: {label}"))),
        }
    }

    /// Decode the whole buffer, or `None` if any sequence is malformed.
    ///
    /// A byte-order mark belonging to this charset is removed. Windows-1250
    /// and CP1250 reject the codepage's unassigned bytes.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        if matches!(self, Charset::Windows1250 | Charset::Cp1250)
            && bytes.iter().any(|b| WINDOWS_1250_UNDEFINED.contains(b))
        {
            return None;
        }

        match self.encoding() {
            Some(encoding) => {
                let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
            None => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Backing encoding_rs table (Latin-1 has none: WHATWG maps that label to windows-1252)
    fn encoding(self) -> Option<&'static Encoding> {
        match self {
            Charset::Utf8 => Some(UTF_8),
            Charset::Windows1250 | Charset::Cp1250 => Some(WINDOWS_1250),
            Charset::Iso8859_2 => Some(ISO_8859_2),
            Charset::Latin1 => None,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Charset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Charset::from_label(&value)
    }
}

impl From<Charset> for String {
    fn from(charset: Charset) -> Self {
        charset.name().to_string()
    }
}

/// Text decoded from an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded content
    pub text: String,
    /// Charset that accepted the bytes (diagnostic)
    pub encoding: Charset,
}
