//! Domain models
//!
//! This module contains the statistics and result types shared by the strategy
//! context, the benchmark runner and the reporters.

pub mod benchmark;
pub mod stats;

pub use benchmark::*;
pub use stats::*;
