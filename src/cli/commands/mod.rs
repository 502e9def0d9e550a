pub mod logging;
pub mod theme;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_SERVER: &str = "server";
pub const CMD_RENDER: &str = "render";
pub const ARG_PORT: &str = "port";
pub const ARG_RESOURCES_DIR: &str = "resources-dir";
pub const ARG_OUTPUT: &str = "output";

fn server() -> Command {
    let command = Command::new(CMD_SERVER)
        .about("Serve rendered login pages over HTTP")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("LOGIN_THEME_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_RESOURCES_DIR)
                .long(ARG_RESOURCES_DIR)
                .help("Directory served under /resources (theme images, scripts, stylesheets)")
                .env("LOGIN_THEME_RESOURCES_DIR"),
        );

    theme::with_args(command)
}

fn render() -> Command {
    let command = Command::new(CMD_RENDER)
        .about("Render one login page to a file or stdout")
        .arg(
            Arg::new(ARG_OUTPUT)
                .short('o')
                .long(ARG_OUTPUT)
                .help("Write the page to this file instead of stdout")
                .env("LOGIN_THEME_OUTPUT"),
        );

    theme::with_args(command)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("login-theme")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(server())
        .subcommand(render());

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "login-theme");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_server_args() {
        temp_env::with_vars(
            [
                ("LOGIN_THEME_PORT", None::<&str>),
                ("LOGIN_THEME_CONTEXT", None),
                ("LOGIN_THEME_CLASSES", None),
                ("LOGIN_THEME_NO_DEFAULT_CSS", None),
                ("LOGIN_THEME_RESOURCES_DIR", None),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "login-theme",
                    "server",
                    "--port",
                    "9090",
                    "--context",
                    "/tmp/context.json",
                    "--resources-dir",
                    "/srv/resources",
                ]);
                let Some((name, server)) = matches.subcommand() else {
                    panic!("expected a subcommand");
                };

                assert_eq!(name, CMD_SERVER);
                assert_eq!(server.get_one::<u16>(ARG_PORT).copied(), Some(9090));
                assert_eq!(
                    server.get_one::<String>(ARG_RESOURCES_DIR).cloned(),
                    Some("/srv/resources".to_string())
                );

                let options = theme::Options::parse(server);
                assert_eq!(options.context, Some(PathBuf::from("/tmp/context.json")));
                assert_eq!(options.classes, None);
                assert!(!options.no_default_css);
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("LOGIN_THEME_PORT", Some("443")),
                ("LOGIN_THEME_CONTEXT", Some("/etc/login/context.json")),
                ("LOGIN_THEME_CLASSES", Some("/etc/login/classes.json")),
                ("LOGIN_THEME_NO_DEFAULT_CSS", Some("true")),
                ("LOGIN_THEME_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["login-theme", "server"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let Some((_, server)) = matches.subcommand() else {
                    panic!("expected a subcommand");
                };
                assert_eq!(server.get_one::<u16>(ARG_PORT).copied(), Some(443));

                let options = theme::Options::parse(server);
                assert_eq!(
                    options.context,
                    Some(PathBuf::from("/etc/login/context.json"))
                );
                assert_eq!(
                    options.classes,
                    Some(PathBuf::from("/etc/login/classes.json"))
                );
                assert!(options.no_default_css);
            },
        );
    }

    #[test]
    fn test_render_args() {
        temp_env::with_vars([("LOGIN_THEME_OUTPUT", None::<&str>)], || {
            let matches = new().get_matches_from(vec![
                "login-theme",
                "render",
                "--no-default-css",
                "-o",
                "/tmp/login.html",
            ]);
            let Some((name, render)) = matches.subcommand() else {
                panic!("expected a subcommand");
            };

            assert_eq!(name, CMD_RENDER);
            assert_eq!(
                render.get_one::<String>(ARG_OUTPUT).cloned(),
                Some("/tmp/login.html".to_string())
            );
            assert!(render.get_flag(theme::ARG_NO_DEFAULT_CSS));
        });
    }

    #[test]
    fn test_missing_subcommand() {
        let result = new().try_get_matches_from(vec!["login-theme"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("LOGIN_THEME_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["login-theme", "render"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("LOGIN_THEME_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["login-theme".to_string(), "render".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
