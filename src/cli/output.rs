//! Rendering of CLI results as text tables, JSON or YAML

use serde::Serialize;

use crate::space::{Configuration, DesignSpace, TransformedBatch};

use super::args::OutputFormat;

/// Bounds and classification flags of one parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsRow {
    pub name: String,
    pub kind: String,
    pub opt_lb: f64,
    pub opt_ub: f64,
    pub numeric: bool,
    pub discrete: bool,
    pub discrete_after_transform: bool,
}

/// Optimization-space batch with its column names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub numeric_names: Vec<String>,
    pub enum_names: Vec<String>,
    pub numeric: Vec<Vec<f64>>,
    pub enumerated: Vec<Vec<i64>>,
}

impl BatchReport {
    pub fn new(space: &DesignSpace, batch: &TransformedBatch) -> Self {
        Self {
            numeric_names: space.numeric_names().into_iter().map(String::from).collect(),
            enum_names: space.enum_names().into_iter().map(String::from).collect(),
            numeric: batch.numeric.rows().into_iter().map(|r| r.to_vec()).collect(),
            enumerated: batch.enumerated.rows().into_iter().map(|r| r.to_vec()).collect(),
        }
    }
}

pub fn bounds_rows(space: &DesignSpace) -> Vec<BoundsRow> {
    space
        .iter()
        .map(|p| BoundsRow {
            name: p.name().to_string(),
            kind: p.kind().to_string(),
            opt_lb: p.opt_lb(),
            opt_ub: p.opt_ub(),
            numeric: p.is_numeric(),
            discrete: p.is_discrete(),
            discrete_after_transform: p.is_discrete_after_transform(),
        })
        .collect()
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| format!("YAML serialization error: {e}"))
        }
        OutputFormat::Text => Err("text output is rendered as a table".to_string()),
    }
}

/// Render rows as a left-aligned table with a header
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers)];
    out.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    out.extend(rows.iter().map(|r| line(r)));
    out.join("\n")
}

pub fn format_configurations(
    space: &DesignSpace,
    configs: &[Configuration],
    format: OutputFormat,
) -> Result<String, String> {
    if format != OutputFormat::Text {
        return serialize(configs, format);
    }
    let names = space.names();
    let headers: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let rows: Vec<Vec<String>> = configs
        .iter()
        .map(|c| {
            names
                .iter()
                .map(|n| c.get(*n).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(render_table(&headers, &rows))
}

pub fn format_bounds(space: &DesignSpace, format: OutputFormat) -> Result<String, String> {
    let rows = bounds_rows(space);
    if format != OutputFormat::Text {
        return serialize(&rows, format);
    }
    let headers: Vec<String> =
        ["name", "kind", "opt_lb", "opt_ub", "numeric", "discrete", "discrete_after_transform"]
            .iter()
            .map(|h| h.to_string())
            .collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.kind.clone(),
                r.opt_lb.to_string(),
                r.opt_ub.to_string(),
                r.numeric.to_string(),
                r.discrete.to_string(),
                r.discrete_after_transform.to_string(),
            ]
        })
        .collect();
    Ok(render_table(&headers, &cells))
}

pub fn format_batch(
    space: &DesignSpace,
    batch: &TransformedBatch,
    format: OutputFormat,
) -> Result<String, String> {
    let report = BatchReport::new(space, batch);
    if format != OutputFormat::Text {
        return serialize(&report, format);
    }
    let headers: Vec<String> =
        report.numeric_names.iter().chain(&report.enum_names).cloned().collect();
    let rows: Vec<Vec<String>> = (0..batch.len())
        .map(|i| batch.row(i).iter().map(|x| format!("{x:.6}")).collect())
        .collect();
    Ok(render_table(&headers, &rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::ParameterValue;

    fn space() -> DesignSpace {
        DesignSpace::from_yaml_str(
            "- {name: batch_size, type: int_exponent, lb: 32, ub: 1024, base: 2}\n\
             - {name: activation, type: cat, categories: [relu, gelu]}",
        )
        .unwrap()
    }

    fn config(batch_size: i64, activation: &str) -> Configuration {
        let mut c = Configuration::new();
        c.insert("batch_size".into(), ParameterValue::Int(batch_size));
        c.insert("activation".into(), ParameterValue::from(activation));
        c
    }

    #[test]
    fn test_render_table_alignment() {
        let headers = vec!["a".to_string(), "long_header".to_string()];
        let rows = vec![vec!["value".to_string(), "x".to_string()]];
        let table = render_table(&headers, &rows);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "a      long_header");
        assert_eq!(lines[1], "-----  -----------");
        assert_eq!(lines[2], "value  x");
    }

    #[test]
    fn test_format_configurations_text() {
        let out =
            format_configurations(&space(), &[config(64, "gelu")], OutputFormat::Text).unwrap();
        assert!(out.starts_with("batch_size  activation"));
        assert!(out.ends_with("64          gelu"));
    }

    #[test]
    fn test_format_configurations_json() {
        let out =
            format_configurations(&space(), &[config(64, "gelu")], OutputFormat::Json).unwrap();
        let parsed: Vec<Configuration> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![config(64, "gelu")]);
    }

    #[test]
    fn test_format_bounds() {
        let out = format_bounds(&space(), OutputFormat::Text).unwrap();
        assert!(out.contains("int_exponent"));
        assert!(out.contains("cat"));

        let rows = bounds_rows(&space());
        assert_eq!(rows[0].opt_lb, 5.0);
        assert_eq!(rows[0].opt_ub, 10.0);
        assert!(rows[0].discrete_after_transform);
        assert!(!rows[1].numeric);

        let yaml = format_bounds(&space(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("kind: int_exponent"));
    }

    #[test]
    fn test_format_batch() {
        let space = space();
        let batch = space.transform(&[config(64, "gelu"), config(1024, "relu")]).unwrap();
        let report = BatchReport::new(&space, &batch);
        assert_eq!(report.numeric_names, ["batch_size"]);
        assert_eq!(report.enumerated, vec![vec![1i64], vec![0]]);

        let text = format_batch(&space, &batch, OutputFormat::Text).unwrap();
        assert!(text.contains("6.000000"));
        assert!(text.contains("10.000000"));
    }
}
