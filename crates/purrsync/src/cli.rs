//! Clap derive structures for the `purrsync` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// purrsync -- browse cat images and keep favourites in sync
#[derive(Debug, Parser)]
#[command(
    name = "purrsync",
    version,
    about = "Browse cat images and manage favourites from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to an alternate config file
    #[arg(long, env = "PURRSYNC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, env = "PURRSYNC_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Favourites file (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one image id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a page of cat images, marking local favourites
    #[command(alias = "c")]
    Cats(CatsArgs),

    /// List a user's favourites from the remote service
    #[command(alias = "favs", alias = "f")]
    Favourites(FavouritesArgs),

    /// Toggle the local favourite state of an image
    #[command(alias = "t")]
    Toggle(ToggleArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct CatsArgs {
    /// Page number, starting at 0
    #[arg(long, short = 'p', default_value_t = 0)]
    pub page: u32,
}

#[derive(Debug, Args)]
pub struct FavouritesArgs {
    /// Remote user id (defaults to `user_id` from config)
    #[arg(long, short = 'u')]
    pub user: Option<String>,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Image id to toggle
    pub image_id: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Print the effective configuration (API key redacted)
    Show,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cats_defaults_to_first_page() {
        let cli = Cli::try_parse_from(["purrsync", "cats"]).unwrap();
        assert!(matches!(cli.command, Command::Cats(CatsArgs { page: 0 })));
        assert_eq!(cli.global.output, OutputFormat::Table);
    }

    #[test]
    fn globals_after_subcommand() {
        let cli = Cli::try_parse_from(["purrsync", "favs", "-u", "u1", "-o", "plain", "-vv"]).unwrap();
        let Command::Favourites(args) = cli.command else {
            panic!("expected favourites");
        };
        assert_eq!(args.user.as_deref(), Some("u1"));
        assert_eq!(cli.global.output, OutputFormat::Plain);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn toggle_requires_image_id() {
        assert!(Cli::try_parse_from(["purrsync", "toggle"]).is_err());
        let cli = Cli::try_parse_from(["purrsync", "toggle", "img1"]).unwrap();
        assert!(matches!(cli.command, Command::Toggle(ToggleArgs { ref image_id }) if image_id == "img1"));
    }

    #[test]
    fn config_needs_subcommand() {
        assert!(Cli::try_parse_from(["purrsync", "config"]).is_err());
        let cli = Cli::try_parse_from(["purrsync", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                command: ConfigCommand::Show
            })
        ));
    }
}
