use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_CONTEXT: &str = "context";
pub const ARG_CLASSES: &str = "classes";
pub const ARG_NO_DEFAULT_CSS: &str = "no-default-css";

/// Theme inputs shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// JSON context file; the mock login context is used when absent.
    pub context: Option<PathBuf>,
    /// JSON object of class overrides keyed by slot name.
    pub classes: Option<PathBuf>,
    pub no_default_css: bool,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let read_path = |id: &str| {
            matches
                .get_one::<String>(id)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            context: read_path(ARG_CONTEXT),
            classes: read_path(ARG_CLASSES),
            no_default_css: matches.get_flag(ARG_NO_DEFAULT_CSS),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_CONTEXT)
                .short('c')
                .long(ARG_CONTEXT)
                .help("Path to a JSON login context (default: built-in mock context)")
                .env("LOGIN_THEME_CONTEXT"),
        )
        .arg(
            Arg::new(ARG_CLASSES)
                .long(ARG_CLASSES)
                .help("Path to a JSON object of class overrides, e.g. {\"kcHtmlClass\": \"my-html\"}")
                .env("LOGIN_THEME_CLASSES"),
        )
        .arg(
            Arg::new(ARG_NO_DEFAULT_CSS)
                .long(ARG_NO_DEFAULT_CSS)
                .help("Do not load the default PatternFly stylesheets and classes")
                .env("LOGIN_THEME_NO_DEFAULT_CSS")
                .action(ArgAction::SetTrue),
        )
}
