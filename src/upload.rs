//! Upload checks performed before the pipeline runs
//!
//! Both the HTTP endpoint and the CLI apply these rules so that a missing
//! file or a non-CSV filename is reported the same way.

use crate::pipeline::Pipeline;
use crate::render::ErrorKey;
use crate::types::OrderDocument;

/// Required filename suffix (case-sensitive)
pub const CSV_SUFFIX: &str = ".csv";

/// An uploaded file as received by a transport
#[derive(Debug, Clone, Default)]
pub struct RawUpload {
    /// Client-supplied filename, if any
    pub filename: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

impl RawUpload {
    /// Create an upload
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: Some(filename.into()),
            bytes: bytes.into(),
        }
    }
}

/// Check the filename rules, returning the error key on rejection
pub fn check_filename(filename: Option<&str>) -> Result<(), ErrorKey> {
    match filename {
        None | Some("") => Err(ErrorKey::NoFile),
        Some(name) if !name.ends_with(CSV_SUFFIX) => Err(ErrorKey::NotCsv),
        Some(_) => Ok(()),
    }
}

/// Validate an upload and run it through the pipeline
pub fn process(pipeline: &Pipeline, upload: Option<&RawUpload>, language: &str) -> OrderDocument {
    let Some(upload) = upload else {
        return OrderDocument::failure(pipeline.catalog().message(language, ErrorKey::NoFile));
    };

    if let Err(key) = check_filename(upload.filename.as_deref()) {
        tracing::info!(filename = ?upload.filename, ?key, "Upload refused");
        return OrderDocument::failure(pipeline.catalog().message(language, key));
    }

    pipeline.process_upload(&upload.bytes, language)
}
