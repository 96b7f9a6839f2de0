//! Order message rendering module
//!
//! Wraps normalized order lines in a language-specific header and footer.
//!
//! # Locales
//!
//! Built-in locales (`pl`, `en`) are embedded from `locales/*.yaml`. A custom
//! catalog can replace them at startup; it is read once and shared immutably.

mod locale;
mod renderer;

pub use locale::{
    CatalogFile, ErrorKey, LocaleCatalog, LocaleErrors, LocaleTemplate, BUILTIN_LOCALES,
    DEFAULT_LANGUAGE,
};
pub use renderer::Renderer;
