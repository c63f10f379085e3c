use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use pinpoint_config::Config;
use pinpoint_core::LocateOutcome;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod command;
mod pipeline;
mod worker;

#[cfg(test)]
mod tests;

use command::{Command, parse_command};
use pipeline::Pipeline;
use worker::ClickWorker;

/// Locate visible text on screen and click it.
#[derive(Parser)]
#[command(name = "pinpoint", version)]
struct Cli {
    /// Click this text once and exit instead of reading commands from stdin.
    #[arg(long)]
    query: Option<String>,

    /// Trained-language-data directory for the OCR engine.
    #[arg(long)]
    tessdata_dir: Option<PathBuf>,

    /// OCR language code, e.g. "eng".
    #[arg(long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Cli {
        query,
        tessdata_dir,
        language,
    } = Cli::parse();

    let mut config = Config::new();
    if let Some(dir) = tessdata_dir {
        config.ocr.tessdata_dir = dir;
    }
    if let Some(language) = language {
        config.ocr.language = language;
    }

    let pipeline = Arc::new(Pipeline::new(config)?);
    let cancel = CancellationToken::new();
    let (worker, worker_handle) = ClickWorker::spawn(pipeline.clone(), cancel.clone());

    // One-shot mode: a single click request, then exit.
    if let Some(query) = query {
        let outcome = worker.submit(&query).await?;
        report(&outcome);
        cancel.cancel();
        let _ = worker_handle.await;
        if matches!(outcome, LocateOutcome::NotFound { .. }) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let loop_handle = tokio::spawn(command_loop(pipeline, worker, cancel.clone()));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = loop_handle => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("command loop exited: {e:#}"),
                Err(e) => tracing::error!("command loop panicked: {e}"),
            }
        }
    }

    cancel.cancel();
    let _ = worker_handle.await;
    Ok(())
}

/// Interactive driver: one command per stdin line until quit or EOF.
async fn command_loop(
    pipeline: Arc<Pipeline>,
    worker: ClickWorker,
    cancel: CancellationToken,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Type text to click (e.g. `click Submit`), `rescale` after a display change, `exit` to quit.");

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break; // stdin closed
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Rescale => pipeline.display_changed(),
            Command::Click(query) => match worker.submit(&query).await {
                Ok(outcome) => report(&outcome),
                Err(e) => tracing::error!("click failed: {e:#}"),
            },
        }
    }

    Ok(())
}

fn report(outcome: &LocateOutcome) {
    match outcome {
        LocateOutcome::Clicked { text, target } => {
            println!("clicked '{}' at ({:.0}, {:.0})", text, target.x, target.y);
        }
        LocateOutcome::NotFound { query } => {
            println!("no element matching '{query}' found");
        }
    }
}
