//! Turn class reports into stdout text.

use cohesion_analysis::engine::{significant, ClassReport};
use cohesion_analysis::render::{render_table, report_to_json, JsonReport, TableStyle};
use cohesion_core::config::{CohesionConfig, OutputFormat};

/// Everything printed for one run. `with_significance` adds the filtered
/// pairs after each table (or to each JSON report).
pub fn render(
    reports: &[ClassReport],
    config: &CohesionConfig,
    with_significance: bool,
) -> Result<String, serde_json::Error> {
    let min_count = config.significance.effective_min_count();
    let threshold = config.significance.effective_threshold();

    match config.output.effective_format() {
        OutputFormat::Table => {
            let style = TableStyle {
                color: config.output.effective_color(),
            };
            let mut out = String::new();
            for report in reports {
                out.push_str(&report.qualified_name);
                out.push('\n');
                out.push_str(&render_table(&report.matrix, style));
                if with_significance {
                    out.push_str(&render_significance(report, min_count, threshold));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let significance = with_significance.then_some((min_count, threshold));
            let docs: Vec<JsonReport> = reports
                .iter()
                .map(|r| report_to_json(r, significance))
                .collect();
            let mut out = serde_json::to_string_pretty(&docs)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_significance(report: &ClassReport, min_count: u32, threshold: f64) -> String {
    let pairs = significant(&report.matrix, min_count, threshold);
    let mut out = format!("significant (min_count={min_count}, threshold={threshold}):\n");
    for ((given, also), p) in &pairs {
        out.push_str(&format!("  {given} -> {also}: {p:.2}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohesion_analysis::ast::{AstTree, NodeKind};
    use cohesion_analysis::engine::analyze_tree;
    use std::path::Path;

    fn pair_reports() -> Vec<ClassReport> {
        let mut tree = AstTree::new("pair.cpp");
        let root = tree.root();
        let class = tree.add_child(root, NodeKind::StructDecl, "Pair", 1);
        tree.add_child(class, NodeKind::Field, "a", 2);
        tree.add_child(class, NodeKind::Field, "b", 3);
        let m1 = tree.add_child(class, NodeKind::Method, "m1", 4);
        tree.add_child(m1, NodeKind::MemberRefExpr, "a", 4);
        tree.add_child(m1, NodeKind::MemberRefExpr, "b", 4);
        let m2 = tree.add_child(class, NodeKind::Method, "m2", 5);
        tree.add_child(m2, NodeKind::MemberRefExpr, "a", 5);
        analyze_tree(&tree, Path::new("pair.cpp"))
    }

    #[test]
    fn default_output_is_name_then_table() {
        let out = render(&pair_reports(), &CohesionConfig::default(), false).unwrap();
        assert_eq!(out, "Pair\n    a   b\na 2/2 1/2\nb 1/1 1/1\n");
    }

    #[test]
    fn significance_follows_the_table() {
        let out = render(&pair_reports(), &CohesionConfig::default(), true).unwrap();
        assert!(out.starts_with("Pair\n    a   b\n"));
        assert!(out.contains("significant (min_count=2, threshold=0.5):\n  a -> a: 1.00\n"));
        assert!(!out.contains("a -> b"));
        assert!(!out.contains("b -> "));
    }

    #[test]
    fn json_output_lists_every_class() {
        let config = CohesionConfig::from_toml("[output]\nformat = \"json\"\n").unwrap();
        let out = render(&pair_reports(), &config, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["qualified_name"], "Pair");
        assert_eq!(reports[0]["kind"], "struct_decl");
        assert!(reports[0].get("significant").is_none());
    }

    #[test]
    fn no_classes_no_output() {
        assert_eq!(render(&[], &CohesionConfig::default(), true).unwrap(), "");
    }
}
