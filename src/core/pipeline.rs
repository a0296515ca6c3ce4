use crate::core::extractor::{parse_collection, LayerExtractor};
use crate::core::render::render;
use crate::core::{ConfigProvider, FeatureCollection, LayerSummary, Pipeline, Storage};
use crate::utils::error::{LayerError, Result};
use tokio::io::AsyncWriteExt;

/// Reads a feature collection through `Storage`, summarizes its layers and
/// writes the rendered list to the configured output or stdout.
pub struct LayerPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: LayerExtractor,
}

impl<S: Storage, C: ConfigProvider> LayerPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let extractor = LayerExtractor::new(config.extract_options().clone())?;
        Ok(Self {
            storage,
            config,
            extractor,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LayerPipeline<S, C> {
    async fn extract(&self) -> Result<FeatureCollection> {
        let input = self.config.input_path();
        let bytes = self.storage.read_file(input).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), input);

        parse_collection(&bytes)
    }

    async fn transform(&self, collection: FeatureCollection) -> Result<LayerSummary> {
        self.extractor.summarize(&collection)
    }

    async fn load(&self, summary: LayerSummary) -> Result<String> {
        let rendered = render(
            &summary,
            self.config.output_format(),
            self.config.include_counts(),
        )?;

        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                let write_error = |source| LayerError::FileWriteError {
                    path: "<stdout>".to_string(),
                    source,
                };
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(rendered.as_bytes())
                    .await
                    .map_err(write_error)?;
                stdout.flush().await.map_err(write_error)?;
                Ok("-".to_string())
            }
        }
    }
}
