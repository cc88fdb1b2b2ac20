pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
pub use config::WatchConfig;
pub use core::{engine::WatchEngine, pipeline::RankPipeline};
pub use utils::error::{RankError, Result};
