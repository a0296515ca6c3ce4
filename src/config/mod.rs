pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{ExtractOptions, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
use crate::domain::model::NonStringPolicy;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use self::toml_config::LayerFileConfig;

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: Option<String>,
    pub output_format: OutputFormat,
    pub include_counts: bool,
    pub extract: ExtractOptions,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            output_format: OutputFormat::default(),
            include_counts: false,
            extract: ExtractOptions::default(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn include_counts(&self) -> bool {
        self.include_counts
    }

    fn extract_options(&self) -> &ExtractOptions {
        &self.extract
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;

        if let Some(path) = &self.output_path {
            validation::validate_path("output", path)?;
        }

        validation::validate_property_path("property", &self.extract.property_path.join("."))?;

        if let Some(pattern) = &self.extract.pattern {
            validation::validate_pattern("pattern", pattern)?;
        }

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "geo-layers")]
#[command(about = "List the distinct layer names in a GeoJSON FeatureCollection")]
pub struct CliConfig {
    #[arg(help = "GeoJSON file to read")]
    pub input: Option<String>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Dotted property path holding the layer name [default: layer]")]
    pub property: Option<String>,

    #[arg(long, value_enum, help = "How to treat non-string layer values [default: reject]")]
    pub non_string: Option<NonStringPolicy>,

    #[arg(long, help = "Strip bidi marks and HTML tags from layer names")]
    pub clean_text: bool,

    #[arg(long, help = "Only keep layer names matching this regex")]
    pub pattern: Option<String>,

    #[arg(long, value_enum, help = "Output format [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Include the number of features per layer")]
    pub counts: bool,

    #[arg(long, help = "Write to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與設定檔：命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => LayerFileConfig::from_file(path)?,
            None => LayerFileConfig::default(),
        };
        file.validate()?;

        let input = self
            .input
            .clone()
            .or_else(|| file.input_path().map(str::to_string));
        let input_path = validation::validate_required_field("input", &input)?.clone();

        let mut extract = ExtractOptions::default();
        if let Some(property) = self.property.as_deref().or(file.property()) {
            extract = extract.with_property(property);
        }
        extract.non_string = self.non_string.or(file.non_string()).unwrap_or_default();
        extract.clean_text = self.clean_text || file.clean_text();
        extract.pattern = self
            .pattern
            .clone()
            .or_else(|| file.pattern().map(str::to_string));

        let config = RunConfig {
            input_path,
            output_path: self
                .output
                .clone()
                .or_else(|| file.output_path().map(str::to_string)),
            output_format: self.format.or(file.format()).unwrap_or_default(),
            include_counts: self.counts || file.counts(),
            extract,
        };

        config.validate()?;
        Ok(config)
    }
}
