//! portopt - Portfolio Optimizer terminal client.
//!
//! Runs the terminal UI by default, or a single headless optimization with
//! `--once`.

use clap::Parser;
use portopt::api::OptimizerClient;
use portopt::{App, Config, Result, portfolio};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portopt", version)]
#[command(about = "Portfolio optimizer terminal client", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Optimization endpoint URL (overrides configuration)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Optimize the given tickers (e.g. "AAPL, MSFT"), print the result and exit
    #[arg(long, value_name = "TICKERS")]
    once: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal UI owns stdout, so logs go to a file
    let _guard = init_logging()?;

    // Load configuration
    let mut config = Config::load(cli.config)?;
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }

    let client = OptimizerClient::new(config.api.clone())?;

    if let Some(tickers) = cli.once {
        let result = portfolio::perform(&client, &tickers).await;
        println!("{}", portfolio::render(&result).trim_end());
        return Ok(());
    }

    // Run the application
    let mut app = App::new(config, Arc::new(client))?;
    app.run().await?;

    Ok(())
}

fn init_logging() -> Result<WorkerGuard> {
    let log_dir = portopt::config::log_dir()
        .unwrap_or_else(|_| std::env::temp_dir().join("portopt"));
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::daily(&log_dir, "portopt.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portopt=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(guard)
}
