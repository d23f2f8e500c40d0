use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "A small content-listing site")]
pub struct Cli {
    /// Load configuration from a custom location. Defaults to: $XDG_CONFIG/flatbed/config.yml
    #[arg(short, long = "config", value_name = "FILE", global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print a config template
    ConfigTemplate,
    /// Create a config file at the configured location
    ConfigInit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_flag_applies_to_subcommands() {
        let cli = Cli::parse_from(["flatbed", "config-init", "--config", "custom.yml"]);

        assert!(matches!(cli.command, Some(Command::ConfigInit)));
        assert_eq!(cli.config_path, Some(PathBuf::from("custom.yml")));
    }
}
