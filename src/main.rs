use clap::Parser;
use kinesis_splitter::{Args, Config};
use std::process::ExitCode;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = match Config::new(Args::parse()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    info!("{:?}", config);

    match kinesis_splitter::run(&config, interrupted()).await {
        Ok(report) => {
            info!(
                "Split [{}] shards, skipped [{}]",
                report.split.len(),
                report.skipped.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(
                "Error while splitting the stream [{}]: {err:#}",
                config.stream_name()
            );
            ExitCode::FAILURE
        }
    }
}

async fn interrupted() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
}
