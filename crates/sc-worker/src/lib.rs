//! Background aggregation worker.
//!
//! Moves [`sc_core::aggregate`] off the caller's task: the caller posts the
//! full input as one message and gets one result back, with no partial
//! results and no cancellation.
//!
//! # Ordering
//!
//! A single worker task drains the request queue in submission order, so
//! results appear in the same order requests were made. Every request gets a
//! [`RequestSeq`] and every response carries it back, which lets a caller
//! drop responses that a newer request has already superseded.

use std::fmt;
use std::sync::Arc;

use sc_core::{AggregationResult, ColorTable, DateWindow, RawEventRecord, aggregate};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Worker errors.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The worker task is gone and accepts no more requests.
    #[error("aggregation worker has shut down")]
    Closed,
    /// The aggregation task panicked.
    #[error("aggregation task failed: {0}")]
    Panicked(#[from] tokio::task::JoinError),
}

/// Everything one aggregation run needs.
#[derive(Debug, Clone)]
pub struct AggregationRequest {
    pub records: Vec<RawEventRecord>,
    pub colors: ColorTable,
    pub window: DateWindow,
}

impl AggregationRequest {
    pub fn run(&self) -> AggregationResult {
        aggregate(&self.records, &self.colors, &self.window)
    }
}

/// Position of a request in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finished run and the request it answers.
#[derive(Debug, Clone)]
pub struct AggregationResponse {
    pub seq: RequestSeq,
    pub result: Arc<AggregationResult>,
}

type Queued = (RequestSeq, AggregationRequest);

/// Handle to a running worker task.
///
/// Must be spawned from inside a tokio runtime.
pub struct AggregationWorker {
    requests: mpsc::UnboundedSender<Queued>,
    responses: watch::Receiver<Option<AggregationResponse>>,
    next_seq: u64,
    task: JoinHandle<()>,
}

impl AggregationWorker {
    pub fn spawn() -> Self {
        let (requests, queue) = mpsc::unbounded_channel();
        let (publisher, responses) = watch::channel(None);
        let task = tokio::spawn(process_queue(queue, publisher));

        Self {
            requests,
            responses,
            next_seq: 0,
            task,
        }
    }

    /// Queues a request and returns its sequence number.
    pub fn submit(&mut self, request: AggregationRequest) -> Result<RequestSeq, WorkerError> {
        self.next_seq += 1;
        let seq = RequestSeq(self.next_seq);
        self.requests
            .send((seq, request))
            .map_err(|_| WorkerError::Closed)?;
        tracing::trace!(%seq, "queued aggregation request");
        Ok(seq)
    }

    /// Most recent completed response, if any.
    pub fn latest(&self) -> Option<AggregationResponse> {
        self.responses.borrow().clone()
    }

    /// Waits until `seq` or a newer request has been answered.
    ///
    /// The response may belong to a later request; callers only interested in
    /// the newest data can use it directly, since it supersedes `seq`.
    pub async fn wait_for(&self, seq: RequestSeq) -> Result<AggregationResponse, WorkerError> {
        let mut responses = self.responses.clone();
        let response = responses
            .wait_for(|r| r.as_ref().is_some_and(|r| r.seq >= seq))
            .await
            .map_err(|_| WorkerError::Closed)?
            .clone();
        response.ok_or(WorkerError::Closed)
    }

    /// Stops accepting requests and waits for queued ones to finish.
    pub async fn shutdown(self) -> Result<(), WorkerError> {
        drop(self.requests);
        self.task.await?;
        Ok(())
    }
}

async fn process_queue(
    mut queue: mpsc::UnboundedReceiver<Queued>,
    publisher: watch::Sender<Option<AggregationResponse>>,
) {
    while let Some((seq, request)) = queue.recv().await {
        tracing::trace!(%seq, records = request.records.len(), "aggregating");

        match tokio::task::spawn_blocking(move || request.run()).await {
            Ok(result) => {
                publisher.send_replace(Some(AggregationResponse {
                    seq,
                    result: Arc::new(result),
                }));
            }
            Err(e) => {
                tracing::error!(%seq, error = %e, "aggregation task failed, stopping worker");
                break;
            }
        }
    }
}

/// One-shot offload: runs a single request on the blocking pool.
pub async fn run_offloaded(request: AggregationRequest) -> Result<AggregationResult, WorkerError> {
    Ok(tokio::task::spawn_blocking(move || request.run()).await?)
}
