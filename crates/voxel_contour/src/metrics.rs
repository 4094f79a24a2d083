//! Extraction metrics: rolling timings and output counters.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use voxel_contour::metrics::{ExtractionMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Record every completion drained from a stage:
//! for completion in stage.drain_completions() {
//!     metrics.record_completion(&completion);
//! }
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use crate::extract::{Extraction, ExtractionStats};
use crate::task_queue::ExtractionCompletion;
use crate::types::{ExtractionMode, Vertex};

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Default number of passes kept in a [`TimingWindow`].
pub const TIMING_WINDOW_LEN: usize = 128;

/// Durations in microseconds of the most recent passes, oldest first.
///
/// Keeps a running total so [`average`](Self::average) does not rescan the
/// window.
#[derive(Debug, Clone)]
pub struct TimingWindow {
    samples_us: VecDeque<u64>,
    capacity: usize,
    total_us: u64,
}

impl TimingWindow {
    /// Window holding at most `capacity` passes. A zero capacity records
    /// nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples_us: VecDeque::with_capacity(capacity),
            capacity,
            total_us: 0,
        }
    }

    /// Record one pass, dropping the oldest once full.
    pub fn push(&mut self, timing_us: u64) {
        if self.capacity == 0 {
            return;
        }
        if self.samples_us.len() == self.capacity {
            if let Some(evicted) = self.samples_us.pop_front() {
                self.total_us = self.total_us.saturating_sub(evicted);
            }
        }
        self.samples_us.push_back(timing_us);
        self.total_us = self.total_us.saturating_add(timing_us);
    }

    /// Passes currently held.
    pub fn len(&self) -> usize {
        self.samples_us.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples_us.is_empty()
    }

    /// Forget every recorded pass.
    pub fn clear(&mut self) {
        self.samples_us.clear();
        self.total_us = 0;
    }

    /// Most recent timing.
    pub fn last(&self) -> Option<u64> {
        self.samples_us.back().copied()
    }

    /// Sum of the held timings.
    pub fn total_us(&self) -> u64 {
        self.total_us
    }

    /// Mean of the held timings, 0 when empty.
    pub fn average(&self) -> f64 {
        if self.samples_us.is_empty() {
            return 0.0;
        }
        self.total_us as f64 / self.samples_us.len() as f64
    }

    /// Fastest and slowest held timing.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = self.samples_us.iter().copied().min()?;
        let max = self.samples_us.iter().copied().max()?;
        Some((min, max))
    }
}

impl Default for TimingWindow {
    fn default() -> Self {
        Self::new(TIMING_WINDOW_LEN)
    }
}

/// Counters and timings accumulated over extraction passes.
#[derive(Debug, Clone, Default)]
pub struct ExtractionMetrics {
    // Timing
    /// Rolling window of extraction times in microseconds.
    pub extract_timings: TimingWindow,
    /// Last extraction time in microseconds.
    pub last_extract_us: u64,

    // Last pass snapshot (for UI)
    /// Counts from the most recent pass.
    pub last_stats: ExtractionStats,

    // Totals
    /// Passes run in uniform mode.
    pub uniform_extractions: u64,
    /// Passes run in octree mode.
    pub octree_extractions: u64,
    /// Vertices produced across all passes.
    pub total_vertices: u64,
    /// Triangles produced across all passes.
    pub total_triangles: u64,
    /// Approximate mesh memory of the most recent pass (vertices + indices).
    pub mesh_memory_bytes: u64,
}

impl ExtractionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset timings and the last-pass snapshot. Totals are cumulative and
    /// survive.
    pub fn reset(&mut self) {
        self.extract_timings.clear();
        self.last_extract_us = 0;
        self.last_stats = ExtractionStats::default();
        self.mesh_memory_bytes = 0;
    }

    /// Record one finished pass and how long it took.
    pub fn record(&mut self, extraction: &Extraction, timing_us: u64) {
        if !is_enabled() {
            return;
        }

        let stats = extraction.stats();
        match extraction.mode {
            ExtractionMode::Uniform => self.uniform_extractions += 1,
            ExtractionMode::Octree => self.octree_extractions += 1,
        }
        self.total_vertices += stats.vertices as u64;
        self.total_triangles += stats.triangles as u64;
        self.mesh_memory_bytes = (stats.vertices * std::mem::size_of::<Vertex>()
            + extraction.mesh.indices.len() * std::mem::size_of::<u32>())
            as u64;

        self.extract_timings.push(timing_us);
        self.last_extract_us = timing_us;
        self.last_stats = stats;
    }

    /// Record a completion drained from a stage or background batch.
    pub fn record_completion(&mut self, completion: &ExtractionCompletion) {
        self.record(&completion.extraction, completion.extract_time_us);
    }

    pub fn total_extractions(&self) -> u64 {
        self.uniform_extractions + self.octree_extractions
    }

    /// Average extraction timing in microseconds.
    pub fn avg_extract_timing_us(&self) -> f64 {
        self.extract_timings.average()
    }

    pub fn mesh_memory_mb(&self) -> f64 {
        self.mesh_memory_bytes as f64 / 1_048_576.0
    }
}
