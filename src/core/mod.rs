pub mod clean;
pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{FeatureCollection, LayerSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
