use crate::{
    api::{self, AppState},
    cli::{actions::load, commands::theme},
};
use anyhow::{Result, ensure};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub resources_dir: Option<PathBuf>,
    pub theme: theme::Options,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the theme inputs cannot be loaded or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let config = load::config(&args.theme)?;
    let preview = load::context(&args.theme)?;

    if let Some(dir) = &args.resources_dir {
        ensure!(
            dir.is_dir(),
            "resources directory does not exist: {}",
            dir.display()
        );
    }

    let state = AppState::new(config, preview).with_resources_dir(args.resources_dir);

    api::new(args.port, state).await
}

fn log_startup_args(args: &Args) {
    let display = |path: Option<&PathBuf>, fallback: &str| {
        path.map_or_else(|| fallback.to_string(), |path| path.display().to_string())
    };
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("resources_dir", display(args.resources_dir.as_ref(), "none")),
        ("context", display(args.theme.context.as_ref(), "mock")),
        ("classes", display(args.theme.classes.as_ref(), "none")),
        ("default_css", (!args.theme.no_default_css).to_string()),
    ];
    log_entries("Startup configuration", &entries);
}

fn log_entries(title: &str, entries: &[(&str, String)]) {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const BANNER: &str = r"
  +-----------+
  |  [_____]  |
  |  [*****]  |   L O G I N   T H E M E {VERSION}
  |  ( log in)|
  +-----------+";
