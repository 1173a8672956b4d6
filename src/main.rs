use clap::Parser;
use lcrail_format::utils::{logger, validation::Validate};
use lcrail_format::{CliConfig, FormatError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid arguments: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match config.execute() {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e @ FormatError::NoMatchFound { .. }) => {
            tracing::warn!("{}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => Err(anyhow::Error::new(e).context("Formatting failed")),
    }
}
