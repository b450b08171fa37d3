//! Cotacao CLI
//!
//! One-shot client: fetches the current bid from the quote relay server and
//! records it to a file. Any failure at any stage terminates the process
//! with a non-zero exit code; this tool has no recovery path by design.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use cotacao_client::{ClientError, CotacaoClient};
use cotacao_types::Deadline;

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "One-shot USD-BRL quote fetcher", long_about = None)]
struct Cli {
    /// Base URL of the quote relay server
    #[arg(
        long,
        env = "COTACAO_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    /// File the fetched bid is written to (created/truncated on success)
    #[arg(long, default_value = "cotacao.txt")]
    output: PathBuf,

    /// Total budget for the whole exchange, in milliseconds
    #[arg(long, default_value_t = 300)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // The budget runs from program start, before any IO happens.
    let deadline = Deadline::within(Duration::from_millis(cli.timeout_ms));

    run(cli, deadline).await
}

async fn run(cli: Cli, deadline: Deadline) -> Result<()> {
    let client = CotacaoClient::new(&cli.server_url);

    let response = match client.fetch_bid(deadline).await {
        Ok(response) => response,
        Err(ClientError::DeadlineExceeded) => {
            tracing::error!(
                budget_ms = cli.timeout_ms,
                "quote server did not answer within the client budget"
            );
            anyhow::bail!(
                "quote request exceeded the {}ms client budget",
                cli.timeout_ms
            );
        }
        Err(err) => {
            return Err(anyhow::Error::new(err).context("failed to fetch the current quote"));
        }
    };

    // The sink is only touched once the bid is in hand; a failed run leaves
    // any previous file as it was.
    tokio::fs::write(&cli.output, format!("Dólar: {}", response.bid))
        .await
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(bid = %response.bid, file = %cli.output.display(), "quote recorded");

    Ok(())
}
