//! Tests for the serialized click worker

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::anyhow;
use pinpoint_core::{ClickError, ClickTarget, LocateOutcome};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::worker::ClickWorker;

fn clicked(query: &str) -> Result<LocateOutcome, ClickError> {
    Ok(LocateOutcome::Clicked {
        text: query.to_string(),
        target: ClickTarget { x: 10.0, y: 20.0 },
    })
}

/// Concurrent submissions run one at a time, never overlapping.
#[tokio::test]
async fn invocations_are_serialized() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let job = {
        let in_flight = in_flight.clone();
        let peak = peak.clone();
        move |query: &str| {
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(30));
            in_flight.fetch_sub(1, Ordering::SeqCst);
            clicked(query)
        }
    };
    let (worker, handle) = ClickWorker::spawn_with(Arc::new(job), CancellationToken::new());
    let worker = Arc::new(worker);

    let submissions: Vec<_> = (0..4)
        .map(|i| {
            let worker = worker.clone();
            tokio::spawn(async move { worker.submit(&format!("target {i}")).await })
        })
        .collect();

    for submission in submissions {
        let outcome = timeout(Duration::from_secs(5), submission)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(matches!(outcome, LocateOutcome::Clicked { .. }));
    }

    assert_eq!(peak.load(Ordering::SeqCst), 1, "captures overlapped");

    drop(worker);
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
}

/// NotFound flows back to the submitter as an outcome, not an error.
#[tokio::test]
async fn not_found_is_an_outcome() {
    let job = |query: &str| {
        Ok(LocateOutcome::NotFound {
            query: query.to_string(),
        })
    };
    let (worker, _handle) = ClickWorker::spawn_with(Arc::new(job), CancellationToken::new());

    let outcome = worker.submit("nowhere").await.unwrap();
    assert_eq!(
        outcome,
        LocateOutcome::NotFound {
            query: "nowhere".to_string()
        }
    );
}

/// Pipeline errors surface to the submitter instead of being swallowed.
#[tokio::test]
async fn errors_surface_to_the_submitter() {
    let job = |_: &str| Err(ClickError::Capture(anyhow!("no display")));
    let (worker, _handle) = ClickWorker::spawn_with(Arc::new(job), CancellationToken::new());

    let error = worker.submit("anything").await.unwrap_err();
    assert!(error.downcast_ref::<ClickError>().is_some());
}

/// Cancellation stops the consumer; later submissions fail cleanly.
#[tokio::test]
async fn cancellation_stops_the_worker() {
    let cancel = CancellationToken::new();
    let job = |query: &str| clicked(query);
    let (worker, handle) = ClickWorker::spawn_with(Arc::new(job), cancel.clone());

    cancel.cancel();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();

    assert!(worker.submit("too late").await.is_err());
}

/// Requests queue up while one is in flight and all complete in order.
#[tokio::test]
async fn queued_requests_complete_in_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let job = {
        let order = order.clone();
        move |query: &str| {
            std::thread::sleep(Duration::from_millis(10));
            order.lock().unwrap().push(query.to_string());
            clicked(query)
        }
    };
    let (worker, _handle) = ClickWorker::spawn_with(Arc::new(job), CancellationToken::new());

    for i in 0..3 {
        timeout(Duration::from_secs(2), worker.submit(&format!("q{i}")))
            .await
            .unwrap()
            .unwrap();
    }

    assert_eq!(*order.lock().unwrap(), ["q0", "q1", "q2"]);
}
