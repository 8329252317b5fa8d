pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{NumberSource, Report, Summary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
