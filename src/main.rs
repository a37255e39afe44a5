use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use guardian_autoplay::agent::{Agent, Completion};
use guardian_autoplay::cli::Cli;
use guardian_autoplay::client::HttpLiveClient;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = HttpLiveClient::new(cli.url.clone());

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("[AGENT] interrupt received, finishing the current cycle");
            flag.store(true, Ordering::SeqCst);
        }
    });

    let agent = Agent::new(client, cli.agent_config(), shutdown);
    match agent.run().await {
        Ok(Completion::Finished { status, result }) => {
            info!(
                "[AGENT] game over: {} ({})",
                status.as_deref().unwrap_or("finished"),
                result.as_deref().unwrap_or("no result reported")
            );
            ExitCode::SUCCESS
        }
        Ok(Completion::MoveLimit { moves }) => {
            info!("[AGENT] stopped after {moves} moves");
            ExitCode::SUCCESS
        }
        Ok(Completion::Stopped) => {
            info!("[AGENT] stopped on request");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            error!("[AGENT] fatal: {err:#}");
            ExitCode::FAILURE
        }
    }
}
