//! Orchestration of one calculation cycle: generate, time both sorts,
//! render the chart, publish the formatted results.

use crate::benchmark::{time_sort, SortTiming};
use crate::chart::{render_comparison, ChartArtifact, ChartStore};
use crate::config::Config;
use crate::generator::generate_array;
use crate::sorting::{bubble_sort, insertion_sort};
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub const BUBBLE_LABEL: &str = "Bubble sort";
pub const INSERTION_LABEL: &str = "Insertion sort";

/// Format one timing line the way the UI displays it.
pub fn format_timing(timing: &SortTiming) -> String {
    format!("{} time: {:.4} sec", timing.label, timing.seconds)
}

/// Why a calculation cycle failed.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("element count {requested} is outside the allowed range {min}..={max}")]
    InvalidElementCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Calculating,
}

/// Shared handle onto the controller's phase, readable while a cycle runs.
#[derive(Debug, Clone)]
pub struct PhaseFlag(Arc<AtomicBool>);

impl PhaseFlag {
    fn new() -> Self {
        PhaseFlag(Arc::new(AtomicBool::new(false)))
    }

    pub fn get(&self) -> Phase {
        if self.0.load(Ordering::SeqCst) {
            Phase::Calculating
        } else {
            Phase::Idle
        }
    }

    fn set(&self, phase: Phase) {
        self.0.store(phase == Phase::Calculating, Ordering::SeqCst);
    }
}

/// Everything one completed cycle publishes to the UI.
#[derive(Debug, Clone)]
pub struct CycleOutput {
    /// Status line shown above the timings
    pub status: String,
    /// Formatted bubble-sort timing
    pub bubble_line: String,
    /// Formatted insertion-sort timing
    pub insertion_line: String,
    /// The rendered chart file
    pub chart: ChartArtifact,
}

/// Runs calculation cycles and owns the chart store.
///
/// A cycle is synchronous from trigger to published output; callers that
/// need serialization wrap the controller in a mutex, which makes a second
/// trigger wait for the running cycle instead of interleaving with it.
pub struct Controller {
    config: Config,
    store: ChartStore,
    phase: PhaseFlag,
}

impl Controller {
    pub fn new(config: Config) -> io::Result<Self> {
        let store = ChartStore::new(config.chart.cache_size)?;
        Ok(Self {
            config,
            store,
            phase: PhaseFlag::new(),
        })
    }

    /// Clone a handle for observing the phase without holding the controller.
    pub fn phase(&self) -> PhaseFlag {
        self.phase.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a previously rendered chart by id.
    pub fn chart_path(&self, id: u64) -> Option<&Path> {
        self.store.path_of(id)
    }

    /// Run one full cycle for `n_elements` random values.
    ///
    /// Out-of-range requests are rejected before anything is generated or
    /// timed. On chart failure the cycle fails as a whole and the phase
    /// returns to idle with no chart published.
    pub fn run_cycle(&mut self, n_elements: usize) -> Result<CycleOutput, CycleError> {
        let bounds = &self.config.array;
        if n_elements < bounds.min_elements || n_elements > bounds.max_elements {
            return Err(CycleError::InvalidElementCount {
                requested: n_elements,
                min: bounds.min_elements,
                max: bounds.max_elements,
            });
        }

        self.phase.set(Phase::Calculating);
        let result = self.measure_and_render(n_elements);
        self.phase.set(Phase::Idle);
        result
    }

    fn measure_and_render(&mut self, n_elements: usize) -> Result<CycleOutput, CycleError> {
        let input = generate_array(
            n_elements,
            self.config.array.value_low,
            self.config.array.value_high,
        );

        // Sequential on purpose: timing the sorts in parallel would make the
        // wall-clock numbers contend for the same cores. Each sort gets its
        // own copy of the input.
        let bubble = time_sort(BUBBLE_LABEL, &input, bubble_sort);
        let insertion = time_sort(INSERTION_LABEL, &input, insertion_sort);
        let timings = [bubble, insertion];

        let (id, path) = self.store.allocate();
        render_comparison(
            &timings,
            &path,
            (self.config.chart.width, self.config.chart.height),
        )
        .map_err(|e| CycleError::Chart(e.to_string()))?;
        let chart = self.store.commit(id, path);

        Ok(CycleOutput {
            status: format!("Compared both sorts on {} elements", n_elements),
            bubble_line: format_timing(&timings[0]),
            insertion_line: format_timing(&timings[1]),
            chart,
        })
    }
}
