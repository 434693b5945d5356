pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{etl::ImportEngine, pipeline::ImportPipeline};
pub use domain::model::{DomainAggregate, DomainCount, ImportResult, SortMode};
pub use utils::error::{ImportError, Result};
