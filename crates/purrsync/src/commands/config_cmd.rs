//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::context;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = match args.command {
        ConfigCommand::Path => context::config_path(global).display().to_string(),

        ConfigCommand::Show => {
            let cfg = context::load_config(global)?.redacted();
            match global.output {
                OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
                OutputFormat::JsonCompact => serde_json::to_string(&cfg)?,
                OutputFormat::Table | OutputFormat::Plain => cfg.to_toml()?,
            }
        }
    };
    output::print_output(&out, global.quiet)
}
