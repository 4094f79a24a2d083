//! Task queue for extracting many independent fields in parallel.
//!
//! Following the stage pattern: Enqueue → Tick → Completions.
//!
//! Each field is extracted by one rayon task; nothing is shared between
//! tasks, so results do not depend on scheduling. A single extraction stays
//! sequential.

use crossbeam_channel::{self as channel, Receiver, TryRecvError};
use rayon::prelude::*;
use web_time::Instant;

use crate::extract::{extract, Extraction};
use crate::types::ExtractionConfig;
use crate::ScalarField;

/// Request to extract one field.
#[derive(Clone, Debug)]
pub struct ExtractionRequest {
  /// Unique identifier for this request
  pub id: u64,
  /// Field to extract (owned by the request while it is in flight)
  pub field: ScalarField,
  /// Extraction configuration
  pub config: ExtractionConfig,
}

/// Completed extraction.
#[derive(Debug)]
pub struct ExtractionCompletion {
  /// Request ID this completion corresponds to
  pub id: u64,
  /// Extraction result
  pub extraction: Extraction,
  /// Raw extraction time in microseconds
  pub extract_time_us: u64,
}

/// Extract every `(field, config)` job in parallel, preserving input order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "task_queue::extract_batch"))]
pub fn extract_batch(jobs: &[(ScalarField, ExtractionConfig)]) -> Vec<Extraction> {
  jobs
    .par_iter()
    .map(|(field, config)| extract(field, config))
    .collect()
}

/// Extraction stage that processes queued requests in parallel.
#[derive(Default)]
pub struct ExtractionStage {
  /// Pending requests waiting to be processed
  pending: Vec<ExtractionRequest>,
  /// Completed results ready to be collected
  completed: Vec<ExtractionCompletion>,
  /// Next request ID
  next_id: u64,
}

impl ExtractionStage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Enqueue an extraction request, returning the assigned ID.
  pub fn enqueue(&mut self, field: ScalarField, config: ExtractionConfig) -> u64 {
    let id = self.next_id;
    self.next_id += 1;

    self.pending.push(ExtractionRequest { id, field, config });
    id
  }

  /// Process pending requests in parallel and move completions to output.
  /// Returns the number of requests processed this tick.
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();
    self.completed.extend(run_requests(requests));
    count
  }

  /// Take all completed extractions.
  pub fn drain_completions(&mut self) -> Vec<ExtractionCompletion> {
    std::mem::take(&mut self.completed)
  }

  /// Hand the pending requests to `background`, leaving the stage's queue
  /// empty. Returns false (and keeps the queue) if it is already busy.
  pub fn submit_to(&mut self, background: &mut BackgroundExtraction) -> bool {
    if background.is_busy() || self.pending.is_empty() {
      return false;
    }
    background.start(std::mem::take(&mut self.pending))
  }

  /// Number of pending requests.
  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.pending.is_empty() && self.completed.is_empty()
  }
}

/// Non-blocking batch extraction on rayon's thread pool.
///
/// At most one batch is in flight. Results arrive through a bounded channel
/// and are picked up with [`BackgroundExtraction::poll`].
#[derive(Default)]
pub struct BackgroundExtraction {
  /// Receiver for the in-flight batch.
  receiver: Option<Receiver<Vec<ExtractionCompletion>>>,
}

impl BackgroundExtraction {
  pub fn new() -> Self {
    Self::default()
  }

  /// Check if a batch is running.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Start extracting `requests` in the background.
  ///
  /// Returns `true` if started, `false` if already busy.
  pub fn start(&mut self, requests: Vec<ExtractionRequest>) -> bool {
    if self.is_busy() {
      return false;
    }

    let (sender, receiver) = channel::bounded(1);
    self.receiver = Some(receiver);

    rayon::spawn(move || {
      // Receiver dropped means the batch was cancelled.
      let _ = sender.send(run_requests(requests));
    });

    true
  }

  /// Poll for results (non-blocking).
  ///
  /// Returns `Some(completions)` once the batch finishes, `None` while it is
  /// still running or when nothing was started.
  pub fn poll(&mut self) -> Option<Vec<ExtractionCompletion>> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(completions) => {
        self.receiver = None;
        Some(completions)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        log::warn!("background extraction worker exited without a result");
        self.receiver = None;
        None
      }
    }
  }

  /// Drop the in-flight batch.
  ///
  /// The worker still runs to completion; its results are discarded.
  pub fn cancel(&mut self) {
    self.receiver = None;
  }
}

fn run_requests(requests: Vec<ExtractionRequest>) -> Vec<ExtractionCompletion> {
  requests
    .into_par_iter()
    .map(|req| {
      let start = Instant::now();
      let extraction = extract(&req.field, &req.config);
      let extract_time_us = start.elapsed().as_micros() as u64;
      ExtractionCompletion {
        id: req.id,
        extraction,
        extract_time_us,
      }
    })
    .collect()
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod task_queue_test;
