pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::{EnvConfig, RunConfig};
pub use core::{engine::ReportEngine, pipeline::SumPipeline};
pub use utils::error::{ReportError, Result};
