use crate::domain::model::{LayerSummary, OutputFormat};
use crate::utils::error::{LayerError, Result};

/// Renders the summary in `format`. With `counts`, each name carries the
/// number of features tagged with it.
pub fn render(summary: &LayerSummary, format: OutputFormat, counts: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary, counts)),
        OutputFormat::Json => render_json(summary, counts),
        OutputFormat::Csv => render_csv(summary, counts),
    }
}

fn render_text(summary: &LayerSummary, counts: bool) -> String {
    let mut output = String::new();
    for (name, count) in &summary.layers {
        if counts {
            output.push_str(&format!("{}\t{}\n", name, count));
        } else {
            output.push_str(name);
            output.push('\n');
        }
    }
    output
}

fn render_json(summary: &LayerSummary, counts: bool) -> Result<String> {
    let mut output = if counts {
        serde_json::to_string_pretty(&summary.layers)?
    } else {
        serde_json::to_string_pretty(&summary.names())?
    };
    output.push('\n');
    Ok(output)
}

fn render_csv(summary: &LayerSummary, counts: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if counts {
        writer.write_record(["layer", "count"])?;
        for (name, count) in &summary.layers {
            let count = count.to_string();
            writer.write_record([name.as_str(), count.as_str()])?;
        }
    } else {
        writer.write_record(["layer"])?;
        for name in summary.layers.keys() {
            writer.write_record([name.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LayerError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> LayerSummary {
        let mut summary = LayerSummary::default();
        summary.layers.insert("roads".to_string(), 2);
        summary.layers.insert("water, lakes".to_string(), 1);
        summary.features_scanned = 3;
        summary
    }

    #[test]
    fn test_text_one_name_per_line() {
        let output = render(&summary(), OutputFormat::Text, false).unwrap();
        assert_eq!(output, "roads\nwater, lakes\n");

        let output = render(&summary(), OutputFormat::Text, true).unwrap();
        assert_eq!(output, "roads\t2\nwater, lakes\t1\n");
    }

    #[test]
    fn test_text_empty_summary_prints_nothing() {
        let output = render(&LayerSummary::default(), OutputFormat::Text, false).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_json_output() {
        let output = render(&summary(), OutputFormat::Json, false).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec!["roads", "water, lakes"]);

        let output = render(&summary(), OutputFormat::Json, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, serde_json::json!({"roads": 2, "water, lakes": 1}));
    }

    #[test]
    fn test_csv_output_quotes_fields() {
        let output = render(&summary(), OutputFormat::Csv, false).unwrap();
        assert_eq!(output, "layer\nroads\n\"water, lakes\"\n");

        let output = render(&summary(), OutputFormat::Csv, true).unwrap();
        assert_eq!(output, "layer,count\nroads,2\n\"water, lakes\",1\n");
    }
}
