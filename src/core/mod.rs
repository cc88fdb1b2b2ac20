pub mod engine;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod resolve;

pub use crate::domain::model::{RankOutcome, RankResult, RunReport, Status};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
