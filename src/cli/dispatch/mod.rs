//! Map parsed command-line arguments to the action to run.

use crate::cli::actions::{Action, render, server};
use crate::cli::commands::{self, ARG_OUTPUT, ARG_PORT, ARG_RESOURCES_DIR, theme};
use anyhow::{Result, bail};
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((commands::CMD_SERVER, sub)) => Ok(Action::Server(server::Args {
            port: sub.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080),
            resources_dir: sub.get_one::<String>(ARG_RESOURCES_DIR).map(PathBuf::from),
            theme: theme::Options::parse(sub),
        })),
        Some((commands::CMD_RENDER, sub)) => Ok(Action::Render(render::Args {
            output: sub.get_one::<String>(ARG_OUTPUT).map(PathBuf::from),
            theme: theme::Options::parse(sub),
        })),
        Some((name, _)) => bail!("unknown subcommand: {name}"),
        None => bail!("missing subcommand"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_subcommand_maps_to_server_action() -> Result<()> {
        temp_env::with_vars(
            [
                ("LOGIN_THEME_PORT", None::<&str>),
                ("LOGIN_THEME_CONTEXT", None),
                ("LOGIN_THEME_CLASSES", None),
                ("LOGIN_THEME_NO_DEFAULT_CSS", None),
                ("LOGIN_THEME_RESOURCES_DIR", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "login-theme",
                    "server",
                    "--classes",
                    "classes.json",
                ]);

                match handler(&matches)? {
                    Action::Server(args) => {
                        assert_eq!(args.port, 8080);
                        assert_eq!(args.resources_dir, None);
                        assert_eq!(args.theme.classes, Some(PathBuf::from("classes.json")));
                    }
                    Action::Render(_) => bail!("expected the server action"),
                }
                Ok(())
            },
        )
    }

    #[test]
    fn render_subcommand_maps_to_render_action() -> Result<()> {
        temp_env::with_vars(
            [
                ("LOGIN_THEME_OUTPUT", None::<&str>),
                ("LOGIN_THEME_CONTEXT", None),
                ("LOGIN_THEME_NO_DEFAULT_CSS", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "login-theme",
                    "render",
                    "--context",
                    "context.json",
                ]);

                match handler(&matches)? {
                    Action::Render(args) => {
                        assert_eq!(args.output, None);
                        assert_eq!(args.theme.context, Some(PathBuf::from("context.json")));
                        assert!(!args.theme.no_default_css);
                    }
                    Action::Server(_) => bail!("expected the render action"),
                }
                Ok(())
            },
        )
    }
}
