use std::sync::Arc;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender, bounded_async};
use pinpoint_core::{ClickError, LocateOutcome};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::pipeline::Pipeline;

/// One queued locate-and-click request.
struct ClickRequest {
    query: String,
    reply: oneshot::Sender<Result<LocateOutcome, ClickError>>,
}

pub(crate) type ClickJob = Arc<dyn Fn(&str) -> Result<LocateOutcome, ClickError> + Send + Sync>;

/// Serializes pipeline invocations: a bounded queue drained by a single
/// consumer, one capture in flight at a time.
///
/// Two overlapping captures would race on the shared screenshot artifact
/// and could hand OCR a frame from the wrong request.
pub struct ClickWorker {
    tx: AsyncSender<ClickRequest>,
}

impl ClickWorker {
    pub fn spawn(pipeline: Arc<Pipeline>, cancel: CancellationToken) -> (Self, JoinHandle<()>) {
        Self::spawn_with(
            Arc::new(move |query: &str| pipeline.locate_and_click(query)),
            cancel,
        )
    }

    pub(crate) fn spawn_with(job: ClickJob, cancel: CancellationToken) -> (Self, JoinHandle<()>) {
        let (tx, rx) = bounded_async::<ClickRequest>(8);
        let handle = tokio::spawn(worker_loop(rx, job, cancel));
        (Self { tx }, handle)
    }

    /// Queue a query and wait for its outcome.
    pub async fn submit(&self, query: &str) -> anyhow::Result<LocateOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(ClickRequest {
                query: query.to_string(),
                reply: reply_tx,
            })
            .await
            .context("Click worker is gone")?;

        let outcome = reply_rx.await.context("Click worker dropped the request")?;
        outcome.map_err(anyhow::Error::from)
    }
}

async fn worker_loop(rx: AsyncReceiver<ClickRequest>, job: ClickJob, cancel: CancellationToken) {
    loop {
        let request = tokio::select! {
            _ = cancel.cancelled() => break,
            request = rx.recv() => match request {
                Ok(request) => request,
                Err(_) => break,
            },
        };

        let job = job.clone();
        let query = request.query.clone();
        match tokio::task::spawn_blocking(move || job(&query)).await {
            Ok(outcome) => {
                let _ = request.reply.send(outcome);
            }
            Err(e) => {
                // The dropped reply surfaces as a closed channel upstream.
                tracing::error!("click task panicked: {e}");
            }
        }
    }
    tracing::info!("click worker stopping");
}
