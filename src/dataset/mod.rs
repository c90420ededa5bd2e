//! Dataset generation and loading

pub mod file;
pub mod generator;

pub use file::{dataset_path, generate_dataset_file, parse_dataset, read_dataset, write_dataset};
pub use generator::{generate_random_data, generate_seeded_data};
