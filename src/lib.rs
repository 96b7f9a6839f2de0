// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Order Mailer
//!
//! Turns CSV order exports of unknown encoding and layout into a localized
//! plain-text order message for a supplier.
//!
//! ## Features
//!
//! - **Encoding Fallback**: UTF-8, Windows-1250, ISO-8859-2, CP1250, Latin-1
//! - **Layout Detection**: `;`/`,` delimiters, header names or positional columns
//! - **Row Cleaning**: quotes, decimal separators and whitespace normalized
//! - **Localized Output**: Polish and English templates, extensible via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_mailer::Pipeline;
//!
//! let pipeline = Pipeline::builtin()?;
//! let document = pipeline.process_upload(b"LP;Indeks katalogowy;Zamowiono\n1;747211;1", "en");
//! assert!(document.success);
//! println!("{}", document.content.unwrap());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌────────────┐   ┌──────────┐
//! │  Decode  │──▶│   Schema   │──▶│ Normalize  │──▶│  Render  │
//! │ charsets │   │ delimiter, │   │ per row:   │   │ header + │
//! │ in order │   │ columns    │   │ line/skip  │   │ footer   │
//! └──────────┘   └────────────┘   └────────────┘   └──────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pipeline configuration
pub mod config;

/// Multi-charset upload decoding
pub mod decode;

/// Delimiter and column detection
pub mod schema;

/// Row cleaning into order lines
pub mod normalize;

/// Locale templates and message rendering
pub mod render;

/// End-to-end upload processing
pub mod pipeline;

/// Upload checks shared by transports
pub mod upload;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use render::LocaleCatalog;
pub use types::OrderDocument;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
