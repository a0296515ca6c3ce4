use crate::domain::model::{ExtractOptions, FeatureCollection, LayerSummary, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    /// `None` 代表輸出到 stdout
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn include_counts(&self) -> bool;
    fn extract_options(&self) -> &ExtractOptions;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FeatureCollection>;
    async fn transform(&self, collection: FeatureCollection) -> Result<LayerSummary>;
    async fn load(&self, summary: LayerSummary) -> Result<String>;
}
