use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayerError {
    #[error("Failed to read {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid layer pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Feature #{feature_index} has a non-string layer value ({found})")]
    InvalidLayerType { feature_index: usize, found: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Parse,
    Validation,
    Output,
}

impl LayerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LayerError::FileReadError { .. } | LayerError::IoError(_) => ErrorCategory::Io,
            LayerError::ParseError(_) => ErrorCategory::Parse,
            LayerError::InvalidLayerType { .. } => ErrorCategory::Validation,
            LayerError::FileWriteError { .. } | LayerError::CsvError(_) => ErrorCategory::Output,
            LayerError::PatternError(_)
            | LayerError::InvalidConfigValueError { .. }
            | LayerError::MissingConfigError { .. }
            | LayerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 依錯誤類別決定 CLI 的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Io => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Validation => 4,
            ErrorCategory::Output => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LayerError::FileReadError { path, .. } => {
                format!("Cannot read file '{}'", path)
            }
            LayerError::FileWriteError { path, .. } => {
                format!("Cannot write output to '{}'", path)
            }
            LayerError::ParseError(e) => match e.classify() {
                serde_json::error::Category::Data => format!(
                    "Input is valid JSON but not a feature collection (line {}, column {})",
                    e.line(),
                    e.column()
                ),
                _ => format!(
                    "Input is not valid JSON (line {}, column {})",
                    e.line(),
                    e.column()
                ),
            },
            LayerError::InvalidLayerType {
                feature_index,
                found,
            } => format!(
                "Feature #{} has a layer of type {} instead of a string",
                feature_index, found
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command-line options and the config file",
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Parse => "Make sure the file is a complete GeoJSON FeatureCollection",
            ErrorCategory::Validation => {
                "Use --non-string coerce or --non-string skip to accept non-string layers"
            }
            ErrorCategory::Output => "Check that the output location is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, LayerError>;
