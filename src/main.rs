use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

use volume_focus::{
    app,
    config::{Cli, Config},
};

fn main() -> iced::Result {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::try_from(&cli) {
        Ok(config) => config,
        Err(err) => Cli::command()
            .error(ErrorKind::ValueValidation, err)
            .exit(),
    };

    tracing::info!(max = config.max, "starting volume demo");
    app::run(config)
}
