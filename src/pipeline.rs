//! Upload processing pipeline
//!
//! Decoder → structure detector → row normalizer → renderer. Every failure
//! is converted into a localized [`OrderDocument`]; nothing escapes
//! [`Pipeline::process_upload`].

use crate::config::PipelineConfig;
use crate::decode::TextDecoder;
use crate::error::{Error, Result};
use crate::normalize::normalize_rows;
use crate::render::{LocaleCatalog, Renderer};
use crate::schema::StructureDetector;
use crate::types::OrderDocument;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Stateless order pipeline; cheap to clone and safe to share across requests
#[derive(Debug, Clone)]
pub struct Pipeline {
    decoder: TextDecoder,
    detector: StructureDetector,
    renderer: Renderer,
}

impl Pipeline {
    /// Build a pipeline from config and a shared locale catalog
    pub fn new(config: &PipelineConfig, catalog: Arc<LocaleCatalog>) -> Self {
        Self {
            decoder: TextDecoder::with_encodings(config.encodings.clone()),
            detector: StructureDetector::new()
                .with_delimiters(config.delimiters.clone())
                .with_rules(config.header_rules()),
            renderer: Renderer::new(catalog),
        }
    }

    /// Pipeline with default config and the built-in locales
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            &PipelineConfig::default(),
            Arc::new(LocaleCatalog::builtin()?),
        ))
    }

    /// Shared locale catalog
    pub fn catalog(&self) -> &LocaleCatalog {
        self.renderer.catalog()
    }

    /// Process an upload into an order document
    pub fn process_upload(&self, bytes: &[u8], language: &str) -> OrderDocument {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.render_order(bytes, language)))
            .unwrap_or_else(|payload| Err(Error::internal(panic_message(&*payload))));

        match outcome {
            Ok(content) => OrderDocument::success(content),
            Err(e) => {
                tracing::warn!(language, error = %e, "Upload rejected");
                self.failure(language, &e)
            }
        }
    }

    /// Run the stages, returning the rendered content or the first error
    pub fn render_order(&self, bytes: &[u8], language: &str) -> Result<String> {
        let decoded = self.decoder.decode(bytes)?;
        let structure = self.detector.detect(&decoded.text)?;
        let normalized = normalize_rows(
            &structure.data_rows,
            structure.index_column,
            structure.quantity_column,
        );

        tracing::info!(
            encoding = %decoded.encoding,
            delimiter = %structure.delimiter.escape_default(),
            strategy = ?structure.strategy,
            lines = normalized.lines.len(),
            skipped = normalized.skipped,
            "Processed order upload"
        );

        self.renderer.render(language, &normalized.lines)
    }

    /// Localized failure document for an error
    pub fn failure(&self, language: &str, error: &Error) -> OrderDocument {
        match error.locale_key() {
            Some(key) => OrderDocument::failure(self.catalog().message(language, key)),
            None => OrderDocument::failure(error.to_string()),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic while processing upload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Charset;
    use pretty_assertions::assert_eq;

    fn pipeline() -> Pipeline {
        Pipeline::builtin().unwrap()
    }

    fn body(doc: &OrderDocument) -> Vec<&str> {
        let content = doc.content.as_deref().unwrap();
        let template = pipeline().catalog().resolve("pl").clone();
        let start = template.header.len();
        let end = content.len() - template.footer.len();
        content[start..end].split('\n').collect()
    }

    #[test]
    fn test_named_header_scenario() {
        let doc = pipeline().process_upload(
            "LP;Indeks katalogowy;Zamówiono\n1;747211;\"1,0\"".as_bytes(),
            "pl",
        );
        assert!(doc.success);
        assert_eq!(body(&doc), vec!["747211 - 1"]);
    }

    #[test]
    fn test_positional_scenario() {
        let doc = pipeline().process_upload(b"A,B,C,D\nx,9001,5,extra", "pl");
        assert!(doc.success);
        assert_eq!(body(&doc), vec!["9001 - 5"]);
    }

    #[test]
    fn test_empty_upload() {
        let doc = pipeline().process_upload(b"", "en");
        assert_eq!(doc, OrderDocument::failure("Selected file is empty"));
    }

    #[test]
    fn test_header_only() {
        let doc = pipeline().process_upload(b"LP;Indeks katalogowy;Zamowiono\n", "en");
        assert_eq!(
            doc,
            OrderDocument::failure("Invalid file format. No order lines were found.")
        );
    }

    #[test]
    fn test_all_rows_skipped() {
        let doc = pipeline().process_upload(b"A;B;C\n1;2\n3\n", "pl");
        assert!(!doc.success);
        assert_eq!(
            doc.error.as_deref(),
            Some(pipeline().catalog().message("pl", crate::render::ErrorKey::InvalidFormat))
        );
    }

    #[test]
    fn test_decode_failure_is_localized() {
        let config = PipelineConfig {
            encodings: vec![Charset::Utf8],
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(&config, Arc::new(LocaleCatalog::builtin().unwrap()));

        let doc = pipeline.process_upload(b"A;B;C\n1;\xff;2", "en");
        assert_eq!(
            doc.error.as_deref(),
            Some("Could not read the file. Please check if the file is in the correct format.")
        );
    }

    #[test]
    fn test_windows_1250_upload() {
        let doc = pipeline().process_upload(
            b"Lp;Indeks katalogowy;Nazwa;Zam\xf3wiono\n1;AB-7;\xa3\xf3\xbfko;3,0\n",
            "pl",
        );
        assert_eq!(body(&doc), vec!["AB-7 - 3"]);
    }

    #[test]
    fn test_generic_failure_keeps_diagnostic() {
        let doc = pipeline().failure("en", &Error::internal("boom"));
        assert_eq!(doc, OrderDocument::failure("Internal error: boom"));
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("kaboom");
        assert_eq!(panic_message(&*payload), "kaboom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(
            panic_message(&*payload),
            "unexpected panic while processing upload"
        );
    }
}
