use anyhow::Result;
use behaviors::config::PlaygroundConfig;
use behaviors::errors::{ BehaviorError, RecoverableError };
use behaviors::models::common::BehaviorKind;
use clap::Parser;
use log::{ debug, info };
mod cli;
use cli::{ BehaviorsCli, Commands };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = BehaviorsCli::parse();

    // Load the config file first so it can supply the log level
    let config = PlaygroundConfig::load(cli.config.as_deref()).map_err(with_hint)?;

    let log_level = cli.log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    setup_logging(&log_level);
    debug!("Loaded configuration: {:?}", config);

    match &cli.command {
        Commands::List => {
            cli::commands::list::execute(&cli.output_format)?;
        }

        Commands::Demo { behavior, value, reads, threads, misuse } => {
            let kind = behavior.parse::<BehaviorKind>().map_err(with_hint)?;
            let config = config
                .with_overrides(value.as_deref(), *reads, *threads)
                .map_err(|e| with_hint(BehaviorError::from(e)))?;
            cli::commands::demo::execute(kind, &config, *misuse, &cli.output_format)?;
        }
    }

    Ok(())
}

// anyhow prints the error itself on exit, so only the hint is printed here
fn with_hint(err: BehaviorError) -> anyhow::Error {
    if let Some(hint) = err.recovery_strategy() {
        cli::ui::print_info(&hint);
    }
    err.into()
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
