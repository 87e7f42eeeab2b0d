use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::info;

use crate::executor::QueryExecutor;
use crate::query::expand_template;
use crate::test_result::TestResult;

/// Runs `num_requests` queries against `executor` with at most
/// `concurrency` in flight and aggregates the boolean outcomes.
///
/// Every task is expanded from the template up front and runs to
/// completion; a failing query never short-circuits the rest of the batch.
/// After the run, `success + failures == num_requests` holds.
pub async fn run_stress_test(
    executor: Arc<dyn QueryExecutor>,
    query_template: &str,
    num_requests: u32,
    concurrency: u32,
) -> TestResult {
    let start = Instant::now();
    let queries: Arc<[String]> = (0..num_requests)
        .map(|_| expand_template(query_template))
        .collect();
    let next_query = Arc::new(AtomicUsize::new(0));
    let (outcome_sender, mut outcomes) = mpsc::unbounded_channel();

    info!("Dispatching {num_requests} queries across {concurrency} workers...");
    let workers: Vec<_> = (0..concurrency)
        .map(|_| {
            let executor = executor.clone();
            let queries = queries.clone();
            let next_query = next_query.clone();
            let outcome_sender = outcome_sender.clone();
            tokio::spawn(async move {
                loop {
                    let index = next_query.fetch_add(1, Ordering::Relaxed);
                    let Some(query) = queries.get(index) else {
                        break;
                    };
                    let outcome = executor.execute(query).await;
                    if outcome_sender.send(outcome).is_err() {
                        break;
                    }
                }
            })
        })
        .collect();
    drop(outcome_sender);

    let mut result = TestResult::default();
    while let Some(outcome) = outcomes.recv().await {
        if outcome {
            result.success += 1;
        } else {
            result.failures += 1;
        }
    }
    join_all(workers).await;
    result.duration = start.elapsed();
    result
}
