//! Read the theme inputs named on the command line.

use crate::cli::commands::theme::Options;
use crate::theme::{ThemeConfig, classes::KcClasses, context::KcContext, mock};
use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info};

/// Build the theme configuration from the class override file, if any.
///
/// # Errors
/// Returns an error if the file cannot be read or holds invalid overrides.
pub fn config(options: &Options) -> Result<ThemeConfig> {
    let mut classes = KcClasses::new(!options.no_default_css);

    if let Some(path) = &options.classes {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read class overrides at {}", path.display()))?;
        classes = classes
            .with_overrides_json(&json)
            .with_context(|| format!("Invalid class overrides in {}", path.display()))?;
        debug!("Loaded class overrides from {}", path.display());
    }

    Ok(ThemeConfig::new(classes))
}

/// Read the context file, falling back to the mock login context.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid context.
pub fn context(options: &Options) -> Result<KcContext> {
    let Some(path) = &options.context else {
        info!("No context file given, using the mock login context");
        return Ok(mock::login_context());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read context at {}", path.display()))?;

    KcContext::from_json(&json).with_context(|| format!("Invalid context in {}", path.display()))
}
