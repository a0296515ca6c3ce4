pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::LayerFileConfig, RunConfig};
pub use core::{
    engine::LayerEngine,
    extractor::{list_layers, LayerExtractor},
    pipeline::LayerPipeline,
};
pub use domain::model::{
    ExtractOptions, Feature, FeatureCollection, LayerSummary, NonStringPolicy, OutputFormat,
};
pub use utils::error::{LayerError, Result};
