//! Library for the sorting comparison demo.
//!
//! Races bubble sort against insertion sort on random integer arrays, times
//! both runs, and renders the two durations as a bar chart served by a small
//! web UI.
//!
//! # Modules
//!
//! - `config` - Configuration structures using serde
//! - `generator` - Random input-array generation
//! - `sorting` - The two in-place comparison sorts
//! - `benchmark` - Wall-clock timing over private input copies
//! - `chart` - Bar-chart rendering and the rotating store of chart files
//! - `controller` - One calculation cycle from trigger to published output
//! - `server` - The axum web UI

pub mod benchmark;
pub mod chart;
pub mod config;
pub mod controller;
pub mod generator;
pub mod server;
pub mod sorting;

// Re-export commonly used types and functions
pub use benchmark::{time_sort, SortTiming};
pub use chart::{render_comparison, ChartArtifact, ChartStore};
pub use config::Config;
pub use controller::{
    format_timing, Controller, CycleError, CycleOutput, Phase, BUBBLE_LABEL, INSERTION_LABEL,
};
pub use generator::generate_array;
pub use sorting::{bubble_sort, insertion_sort};
