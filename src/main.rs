use clap::Parser as _;
use flatbed::cli::{Cli, Command};
use flatbed::config::{self, Config};
use flatbed::Flatbed;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::ConfigTemplate) => {
            config::print_config_template();
            return Ok(());
        }
        Some(Command::ConfigInit) => {
            config::init_config(cli.config_path)?;
            return Ok(());
        }
        None => {}
    }

    let config = Config::load(cli.config_path)?;

    Flatbed::boot(config).await?.serve().await?;

    Ok(())
}
