//! Reporting of comparison results

pub mod console;
pub mod json;

pub use console::{format_milliseconds, render_comparison};
pub use json::{load_results, save_report, save_results, BenchmarkReport};
