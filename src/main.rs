use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cagr::api::{Cli, Command, run_http_server, run_once};
use cagr::config::{LogLevel, ServerConfig};

fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Serve { host, port }) => {
            let config =
                match ServerConfig::build(host.clone(), *port, cli.log_level.as_deref()) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Configuration error: {e}");
                        std::process::exit(1);
                    }
                };
            init_tracing(config.log_level);
            if let Err(e) = run_http_server(&config).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            let level = match cli.log_level.as_deref().map(str::parse::<LogLevel>) {
                Some(Ok(level)) => level,
                Some(Err(e)) => {
                    eprintln!("Configuration error: {e}");
                    std::process::exit(1);
                }
                None => LogLevel::Warn,
            };
            init_tracing(level);
            match run_once(&cli) {
                Ok(output) => print!("{output}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
