use crate::core::clean::clean_text;
use crate::domain::model::{
    ExtractOptions, Feature, FeatureCollection, LayerSummary, NonStringPolicy,
};
use crate::utils::error::{LayerError, Result};
use regex::Regex;
use serde_json::Value;
use std::path::Path;

/// 列出檔案內所有不重複的 layer 名稱，依碼位遞增排序。
///
/// Features without `properties`, without a `layer` key, or with a `null`
/// layer are skipped. A missing `features` array yields an empty list.
pub fn list_layers<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    LayerExtractor::new(ExtractOptions::default())?.extract_from_path(path)
}

/// Parses raw document bytes into a [`FeatureCollection`].
pub fn parse_collection(bytes: &[u8]) -> Result<FeatureCollection> {
    let collection = serde_json::from_slice(bytes)?;
    Ok(collection)
}

#[derive(Debug, Clone)]
pub struct LayerExtractor {
    options: ExtractOptions,
    pattern: Option<Regex>,
}

impl LayerExtractor {
    pub fn new(options: ExtractOptions) -> Result<Self> {
        let pattern = options.pattern.as_deref().map(Regex::new).transpose()?;
        Ok(Self { options, pattern })
    }

    pub fn extract_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LayerError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let collection = parse_collection(&bytes)?;
        Ok(self.summarize(&collection)?.names())
    }

    pub fn extract_from_str(&self, content: &str) -> Result<Vec<String>> {
        let collection = parse_collection(content.as_bytes())?;
        Ok(self.summarize(&collection)?.names())
    }

    /// Scans every feature once and tallies the layer names it carries.
    pub fn summarize(&self, collection: &FeatureCollection) -> Result<LayerSummary> {
        let mut summary = LayerSummary::default();

        for (index, feature) in collection.features().iter().enumerate() {
            summary.features_scanned += 1;

            let Some(name) = self.layer_name(index, feature)? else {
                summary.features_without_layer += 1;
                continue;
            };

            if let Some(pattern) = &self.pattern {
                if !pattern.is_match(&name) {
                    summary.features_filtered += 1;
                    continue;
                }
            }

            *summary.layers.entry(name).or_insert(0) += 1;
        }

        tracing::debug!(
            "Scanned {} features: {} distinct layers, {} without layer, {} filtered out",
            summary.features_scanned,
            summary.len(),
            summary.features_without_layer,
            summary.features_filtered
        );

        Ok(summary)
    }

    fn layer_name(&self, index: usize, feature: &Feature) -> Result<Option<String>> {
        let Some(value) = feature.property(&self.options.property_path) else {
            return Ok(None);
        };

        let raw = match value {
            Value::String(s) => s.clone(),
            other => match self.options.non_string {
                NonStringPolicy::Reject => {
                    return Err(LayerError::InvalidLayerType {
                        feature_index: index,
                        found: json_type_name(other).to_string(),
                    });
                }
                NonStringPolicy::Skip => {
                    tracing::debug!(
                        "Skipping feature #{} with {} layer value",
                        index,
                        json_type_name(other)
                    );
                    return Ok(None);
                }
                // 數字、布林值以及巢狀結構都轉成精簡的 JSON 文字
                NonStringPolicy::Coerce => other.to_string(),
            },
        };

        if !self.options.clean_text {
            return Ok(Some(raw));
        }

        let cleaned = clean_text(&raw);
        Ok((!cleaned.is_empty()).then_some(cleaned))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(options: ExtractOptions) -> LayerExtractor {
        LayerExtractor::new(options).unwrap()
    }

    #[test]
    fn test_duplicates_and_missing_properties() {
        let doc = r#"{"features":[
            {"properties":{"layer":"roads"}},
            {"properties":{"layer":"water"}},
            {"properties":{"layer":"roads"}},
            {"properties":{}}
        ]}"#;

        let layers = extractor(ExtractOptions::default()).extract_from_str(doc).unwrap();
        assert_eq!(layers, vec!["roads", "water"]);
    }

    #[test]
    fn test_empty_and_missing_features() {
        let e = extractor(ExtractOptions::default());
        assert!(e.extract_from_str(r#"{"features":[]}"#).unwrap().is_empty());
        assert!(e.extract_from_str("{}").unwrap().is_empty());
    }

    #[test]
    fn test_sorted_by_code_point() {
        let doc = r#"{"features":[
            {"properties":{"layer":"water"}},
            {"properties":{"layer":"Roads"}},
            {"properties":{"layer":"道路"}},
            {"properties":{"layer":"buildings"}},
            {"properties":{"layer":"Água"}}
        ]}"#;

        let layers = extractor(ExtractOptions::default()).extract_from_str(doc).unwrap();
        assert_eq!(layers, vec!["Roads", "buildings", "water", "Água", "道路"]);
    }

    #[test]
    fn test_null_layer_and_null_properties_skipped() {
        let doc = r#"{"features":[
            {"type":"Feature","properties":null},
            {"type":"Feature","properties":{"layer":null}},
            {"type":"Feature"},
            {"type":"Feature","properties":{"layer":"parks"}}
        ]}"#;

        let summary = extractor(ExtractOptions::default())
            .summarize(&parse_collection(doc.as_bytes()).unwrap())
            .unwrap();

        assert_eq!(summary.names(), vec!["parks"]);
        assert_eq!(summary.features_scanned, 4);
        assert_eq!(summary.features_without_layer, 3);
    }

    #[test]
    fn test_non_string_layer_rejected_by_default() {
        let doc = r#"{"features":[
            {"properties":{"layer":"roads"}},
            {"properties":{"layer":7}}
        ]}"#;

        let err = extractor(ExtractOptions::default()).extract_from_str(doc).unwrap_err();
        match err {
            LayerError::InvalidLayerType {
                feature_index,
                found,
            } => {
                assert_eq!(feature_index, 1);
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_string_layer_coerced() {
        let doc = r#"{"features":[
            {"properties":{"layer":7}},
            {"properties":{"layer":true}},
            {"properties":{"layer":{"name":"x"}}},
            {"properties":{"layer":"7"}}
        ]}"#;
        let options = ExtractOptions {
            non_string: NonStringPolicy::Coerce,
            ..ExtractOptions::default()
        };

        let layers = extractor(options).extract_from_str(doc).unwrap();
        assert_eq!(layers, vec!["7", "true", r#"{"name":"x"}"#]);
    }

    #[test]
    fn test_non_string_layer_skipped() {
        let doc = r#"{"features":[
            {"properties":{"layer":[1,2]}},
            {"properties":{"layer":"roads"}}
        ]}"#;
        let options = ExtractOptions {
            non_string: NonStringPolicy::Skip,
            ..ExtractOptions::default()
        };

        let layers = extractor(options).extract_from_str(doc).unwrap();
        assert_eq!(layers, vec!["roads"]);
    }

    #[test]
    fn test_clean_text_merges_variants() {
        let doc = r#"{"features":[
            {"properties":{"layer":"\u200eRoads "}},
            {"properties":{"layer":"<b>Roads</b>"}},
            {"properties":{"layer":"<br>"}}
        ]}"#;
        let options = ExtractOptions {
            clean_text: true,
            ..ExtractOptions::default()
        };

        let summary = extractor(options)
            .summarize(&parse_collection(doc.as_bytes()).unwrap())
            .unwrap();
        assert_eq!(summary.names(), vec!["Roads"]);
        assert_eq!(summary.layers["Roads"], 2);
        assert_eq!(summary.features_without_layer, 1);
    }

    #[test]
    fn test_pattern_filters_names() {
        let doc = r#"{"features":[
            {"properties":{"layer":"road-primary"}},
            {"properties":{"layer":"road-secondary"}},
            {"properties":{"layer":"water"}}
        ]}"#;
        let options = ExtractOptions {
            pattern: Some("^road".to_string()),
            ..ExtractOptions::default()
        };

        let summary = extractor(options)
            .summarize(&parse_collection(doc.as_bytes()).unwrap())
            .unwrap();
        assert_eq!(summary.names(), vec!["road-primary", "road-secondary"]);
        assert_eq!(summary.features_filtered, 1);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let options = ExtractOptions {
            pattern: Some("(".to_string()),
            ..ExtractOptions::default()
        };
        assert!(matches!(
            LayerExtractor::new(options),
            Err(LayerError::PatternError(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let e = extractor(ExtractOptions::default());
        let err = e
            .extract_from_str(r#"{"features":[{"properties":{"layer":"roads"}"#)
            .unwrap_err();
        assert!(matches!(err, LayerError::ParseError(_)));
    }

    #[test]
    fn test_non_object_documents_are_parse_errors() {
        let e = extractor(ExtractOptions::default());
        let docs = [
            "[]",
            r#"[[{"properties":{"layer":"roads"}}]]"#,
            r#"{"features":[[]]}"#,
            r#"{"features":[[{"layer":"water"}]]}"#,
            r#"{"features":["x"]}"#,
        ];

        for doc in docs {
            let err = e.extract_from_str(doc).unwrap_err();
            assert!(
                matches!(err, LayerError::ParseError(_)),
                "{doc} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_features_not_an_array_is_parse_error() {
        let e = extractor(ExtractOptions::default());
        let err = e.extract_from_str(r#"{"features":"roads"}"#).unwrap_err();
        assert!(matches!(err, LayerError::ParseError(_)));
    }
}
