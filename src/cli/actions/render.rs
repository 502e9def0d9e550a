use crate::{
    cli::{actions::load, commands::theme},
    theme::pages,
};
use anyhow::{Context, Result};
use std::{fs, io::Write, path::PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    /// Write to stdout when absent.
    pub output: Option<PathBuf>,
    pub theme: theme::Options,
}

/// Render one page and write it out.
/// # Errors
/// Returns an error if the inputs cannot be loaded, the page is not supported, or the output cannot be written.
pub fn execute(args: &Args) -> Result<()> {
    let html = render(&args.theme)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn render(options: &theme::Options) -> Result<String> {
    let config = load::config(options)?;
    let context = load::context(options)?;
    let page = pages::render_page(&context, &config)
        .with_context(|| format!("Cannot render page {}", context.page_id))?;

    Ok(page.to_html()?)
}
