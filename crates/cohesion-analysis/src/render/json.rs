//! Serializable report shapes for `--format json`.

use serde::Serialize;

use crate::ast::NodeKind;
use crate::engine::{significant, ClassReport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonCell {
    pub a: String,
    pub b: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSignificantPair {
    pub given: String,
    pub also: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonReport {
    pub qualified_name: String,
    pub kind: NodeKind,
    pub line: u32,
    pub methods: usize,
    pub fields: usize,
    pub cells: Vec<JsonCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant: Option<Vec<JsonSignificantPair>>,
}

/// Flatten a class report. `significance` is `(min_count, threshold)`; when
/// present the filtered pairs are attached.
pub fn report_to_json(report: &ClassReport, significance: Option<(u32, f64)>) -> JsonReport {
    let cells = report
        .matrix
        .iter()
        .map(|(a, b, count)| JsonCell {
            a: a.to_string(),
            b: b.to_string(),
            count,
        })
        .collect();

    let significant = significance.map(|(min_count, threshold)| {
        significant(&report.matrix, min_count, threshold)
            .into_iter()
            .map(|((given, also), probability)| JsonSignificantPair {
                given,
                also,
                probability,
            })
            .collect()
    });

    JsonReport {
        qualified_name: report.qualified_name.clone(),
        kind: report.kind,
        line: report.line,
        methods: report.method_count,
        fields: report.field_count,
        cells,
        significant,
    }
}
