//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use qabot_constant::app;
use qabot_tui::Appearance;

#[derive(Parser)]
#[command(name = app::NAME, about = app::DESCRIPTION, version = app::VERSION, propagate_version = true)]
pub struct Cli {
    /// Defaults to the interactive chat
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Server base URL (overrides QABOT_SERVER_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Per-request timeout in seconds (overrides QABOT_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Color theme (overrides QABOT_THEME)
    #[arg(long, global = true)]
    pub theme: Option<ThemeArg>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Appearance {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Appearance::Dark,
            ThemeArg::Light => Appearance::Light,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive chat (default)
    Tui,
    /// Ask one question and print the answer
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Inspect and persist qabot settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Save the server URL to ~/.qabot/env
    SetServer {
        /// Server base URL, e.g. http://127.0.0.1:5000
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_metadata_comes_from_app_constants() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), app::NAME);
        assert_eq!(cmd.get_about().map(|a| a.to_string()).as_deref(), Some(app::DESCRIPTION));
        cmd.debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["qabot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["qabot", "ask", "what", "is", "this?", "--server", "http://x"]).unwrap();
        match cli.command {
            Some(Command::Ask { question }) => assert_eq!(question.join(" "), "what is this?"),
            _ => panic!("expected ask"),
        }
        assert_eq!(cli.server.as_deref(), Some("http://x"));
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["qabot", "ask"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["qabot", "--timeout", "0"]).is_err());
        let cli = Cli::try_parse_from(["qabot", "--timeout", "5"]).unwrap();
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn theme_maps_to_appearance() {
        let cli = Cli::try_parse_from(["qabot", "--theme", "light"]).unwrap();
        assert_eq!(cli.theme.map(Appearance::from), Some(Appearance::Light));
    }
}
