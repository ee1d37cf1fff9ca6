pub mod aggregator;
pub mod calculator;
pub mod columns;
pub mod concat;
pub mod config;
pub mod extractor;
pub mod loader;
pub mod logic;
pub mod process;

pub use logic::{Core, PipelineStats, Summary};
