use crate::domain::model::{NonStringPolicy, OutputFormat};
use crate::utils::error::{LayerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔內容，所有欄位皆可省略，命令列參數優先
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerFileConfig {
    pub input: Option<InputConfig>,
    pub extract: Option<ExtractConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub property: Option<String>,
    pub non_string: Option<NonStringPolicy>,
    pub clean_text: Option<bool>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<OutputFormat>,
    pub counts: Option<bool>,
}

impl LayerFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| LayerError::FileReadError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LayerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        if let Some(property) = self.property() {
            validation::validate_property_path("extract.property", property)?;
        }

        if let Some(pattern) = self.pattern() {
            validation::validate_pattern("extract.pattern", pattern)?;
        }

        Ok(())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.as_ref()?.path.as_deref()
    }

    pub fn property(&self) -> Option<&str> {
        self.extract.as_ref()?.property.as_deref()
    }

    pub fn non_string(&self) -> Option<NonStringPolicy> {
        self.extract.as_ref()?.non_string
    }

    pub fn clean_text(&self) -> bool {
        self.extract
            .as_ref()
            .and_then(|e| e.clean_text)
            .unwrap_or(false)
    }

    pub fn pattern(&self) -> Option<&str> {
        self.extract.as_ref()?.pattern.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref()?.path.as_deref()
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output.as_ref()?.format
    }

    pub fn counts(&self) -> bool {
        self.output.as_ref().and_then(|o| o.counts).unwrap_or(false)
    }
}

impl Validate for LayerFileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
