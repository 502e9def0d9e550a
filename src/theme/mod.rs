//! Server-side rendering of the login theme.
//!
//! The identity server hands every page a [`context::KcContext`]. Pages are
//! rendered inside the shared [`template::Template`] shell into a
//! [`pages::Page`], which can be emitted as a complete HTML document or driven
//! through its lifecycle with a [`mount::Mount`].

pub mod assets;
pub mod classes;
pub mod context;
pub mod document;
pub mod form;
pub mod gate;
pub mod i18n;
pub mod mock;
pub mod mount;
pub mod pages;
pub mod template;

use crate::theme::classes::KcClasses;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeError {
    /// The context names a page this theme does not provide.
    UnsupportedPage(String),
    InvalidContext(String),
    InvalidClasses(String),
    Serialization(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnsupportedPage(page_id) => {
                write!(formatter, "Unsupported page: {page_id}")
            }
            ThemeError::InvalidContext(message) => write!(formatter, "Invalid context: {message}"),
            ThemeError::InvalidClasses(message) => {
                write!(formatter, "Invalid class overrides: {message}")
            }
            ThemeError::Serialization(message) => {
                write!(formatter, "Serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::InvalidContext(err.to_string())
    }
}

/// Theme-wide settings fixed at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    pub classes: KcClasses,
}

impl ThemeConfig {
    #[must_use]
    pub const fn new(classes: KcClasses) -> Self {
        Self { classes }
    }
}

/// Parse a context and render it as a complete HTML document.
///
/// # Errors
/// Returns an error if the context is invalid or names an unsupported page.
pub fn render_document(context_json: &str, config: &ThemeConfig) -> Result<String, ThemeError> {
    let context = context::KcContext::from_json(context_json)?;
    pages::render_page(&context, config)?.to_html()
}
