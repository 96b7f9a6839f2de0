//! Upload decoder module
//!
//! Supports: UTF-8, Windows-1250, ISO-8859-2, CP1250, Latin-1
//!
//! # Overview
//!
//! Uploaded order files arrive as raw bytes of unknown encoding. The decoder
//! tries each configured charset in order and keeps the first one that
//! accepts the whole buffer. Latin-1 accepts every byte sequence, so a list
//! ending in it always succeeds.

mod decoders;
mod types;

pub use decoders::TextDecoder;
pub use types::{Charset, DecodedText};
