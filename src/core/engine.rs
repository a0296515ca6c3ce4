use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct LayerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LayerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract → transform → load，回傳輸出位置（stdout 為 `-`）
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading feature collection...");
        let collection = self.pipeline.extract().await?;
        tracing::info!("Parsed {} features", collection.features().len());

        let summary = self.pipeline.transform(collection).await?;
        tracing::info!(
            "Found {} distinct layers ({} features without a layer)",
            summary.len(),
            summary.features_without_layer
        );

        let destination = self.pipeline.load(summary).await?;
        tracing::info!("Layer list written to: {}", destination);

        Ok(destination)
    }
}
