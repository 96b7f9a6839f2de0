//! Order message renderer

use super::locale::LocaleCatalog;
use crate::error::{Error, Result};
use crate::types::NormalizedLine;
use std::sync::Arc;

/// Renders order lines with a locale template
#[derive(Debug, Clone)]
pub struct Renderer {
    catalog: Arc<LocaleCatalog>,
}

impl Renderer {
    /// Create a renderer over a shared catalog
    pub fn new(catalog: Arc<LocaleCatalog>) -> Self {
        Self { catalog }
    }

    /// Shared catalog
    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.catalog
    }

    /// Render `header + lines joined by newline + footer`.
    ///
    /// Unknown languages use the default template. An empty line list is
    /// [`Error::NoValidRows`].
    pub fn render(&self, language: &str, lines: &[NormalizedLine]) -> Result<String> {
        if lines.is_empty() {
            return Err(Error::NoValidRows);
        }

        let template = self.catalog.resolve(language);
        let body = lines.join("\n");

        let mut content =
            String::with_capacity(template.header.len() + body.len() + template.footer.len());
        content.push_str(&template.header);
        content.push_str(&body);
        content.push_str(&template.footer);
        Ok(content)
    }
}
