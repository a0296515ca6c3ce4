use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const DEFAULT_LAYER_PROPERTY: &str = "layer";

/// GeoJSON FeatureCollection，只保留抽取 layer 需要的欄位
///
/// Only a JSON object deserializes into a collection; arrays are rejected
/// rather than read as positional fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct FeatureCollection {
    pub features: Option<Vec<Feature>>,
}

impl TryFrom<Map<String, Value>> for FeatureCollection {
    type Error = serde_json::Error;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let features = match object.remove("features") {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(Self { features })
    }
}

impl FeatureCollection {
    /// 缺少 `features` 或為 null 時視為空陣列
    pub fn features(&self) -> &[Feature] {
        self.features.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Feature {
    pub properties: Option<Value>,
}

impl TryFrom<Map<String, Value>> for Feature {
    type Error = serde_json::Error;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let properties = object.remove("properties").filter(|v| !v.is_null());
        Ok(Self { properties })
    }
}

impl Feature {
    /// Walks `path` through nested objects under `properties`.
    ///
    /// Returns `None` when properties are missing, any link is absent or not
    /// an object, or the final value is `null`.
    pub fn property(&self, path: &[String]) -> Option<&Value> {
        let mut current = self.properties.as_ref()?;
        for key in path {
            current = current.as_object()?.get(key)?;
        }
        (!current.is_null()).then_some(current)
    }
}

/// How to treat a layer value that is present but not a JSON string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum NonStringPolicy {
    #[default]
    Reject,
    Coerce,
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub property_path: Vec<String>,
    pub non_string: NonStringPolicy,
    pub clean_text: bool,
    pub pattern: Option<String>,
}

impl ExtractOptions {
    pub fn with_property(mut self, dotted: &str) -> Self {
        self.property_path = dotted.split('.').map(str::to_string).collect();
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            property_path: vec![DEFAULT_LAYER_PROPERTY.to_string()],
            non_string: NonStringPolicy::default(),
            clean_text: false,
            pattern: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    /// layer 名稱 → 出現次數，BTreeMap 保證依碼位排序
    pub layers: BTreeMap<String, usize>,
    pub features_scanned: usize,
    pub features_without_layer: usize,
    pub features_filtered: usize,
}

impl LayerSummary {
    pub fn names(&self) -> Vec<String> {
        self.layers.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
