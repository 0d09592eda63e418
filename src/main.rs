mod config;
mod dashboard;
mod estimate;
mod report;
mod store;
mod types;
mod view;
mod vote;

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ipo_rs::IpoClient;

use config::Config;
use dashboard::Dashboard;
use store::{FileVoteFlags, MemoryVoteFlags, PrefsStore, VoteFlags};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    dotenv().ok();

    let mut cfg = Config::from_env();
    cfg.color = cfg.color && io::stdout().is_terminal();
    info!(?cfg, "starting ipo dashboard");

    let client = Arc::new(IpoClient::new_with_config(Some(cfg.api_url.clone())));
    match client.get_health().await {
        Ok(h) => info!(status = %h.status, service = %h.service, "backend reachable"),
        Err(e) => warn!("backend health check failed: {e}"),
    }

    let flags: Arc<dyn VoteFlags> = match &cfg.votes_file {
        Some(path) => Arc::new(FileVoteFlags::open(path)),
        None => {
            info!("vote flags kept in memory only");
            Arc::new(MemoryVoteFlags::default())
        }
    };
    let prefs = PrefsStore::open(&cfg.prefs_file);

    // Prompt lines -> dashboard loop
    let (cmd_tx, cmd_rx) = mpsc::channel(32);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if cmd_tx.send(line).await.is_err() {
                break;
            }
        }
    });

    let (dash, fetched) = Dashboard::new(cfg, client, flags, prefs, io::stdout());
    dash.run(cmd_rx, fetched).await?;

    info!("bye");
    Ok(())
}
