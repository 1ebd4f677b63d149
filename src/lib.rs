pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::GeneratorConfig;
pub use crate::core::{engine::RteEngine, pipeline::RtePipeline};
pub use utils::error::{Result, RteGenError};
