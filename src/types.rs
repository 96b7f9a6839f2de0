//! Common types used throughout order-mailer
//!
//! This module contains the result document returned to callers and
//! the small shared value types passed between pipeline stages.

use serde::{Deserialize, Serialize};

// ============================================================================
// Pipeline Values
// ============================================================================

/// A single rendered order line, `"<identifier> - <quantity>"`
pub type NormalizedLine = String;

/// A parsed row of cells
pub type Row = Vec<String>;

// ============================================================================
// Order Document
// ============================================================================

/// The outcome of processing one upload.
///
/// Serializes to `{"success": true, "content": "..."}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    /// Whether the upload produced an order message
    pub success: bool,
    /// Rendered order text (success only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// User-facing error message (failure only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderDocument {
    /// Create a successful document
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: Some(content.into()),
            error: None,
        }
    }

    /// Create a failed document
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.into()),
        }
    }

    /// Check if this document carries content
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_document_success_json() {
        let doc = OrderDocument::success("hello");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value, json!({"success": true, "content": "hello"}));
    }

    #[test]
    fn test_order_document_failure_json() {
        let doc = OrderDocument::failure("Nie wybrano pliku");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Nie wybrano pliku"}));
        assert!(!doc.is_success());
    }
}
