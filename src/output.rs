//! CLI output formatting for import runs.
//!
//! Display is information-centric: each admitted item is shown as its
//! positional index plus the source → admitted name mapping, with warnings
//! as indented context lines directly under the item they belong to. The
//! summary line carries the counts an operator scans for.
//!
//! ```text
//! 001 a.jpg → LOP25-0008.jpeg
//! 002 b.jpeg → LOP25-0009.jpeg
//!     Warning: could not create preview for b.jpeg: failed to decode ...
//! Imported 2 images after serial 0007 (1 warning)
//! Index: gallery/index.toml (9 entries, 2 added)
//! ```
//!
//! `format_report` is pure (returns the lines) so tests can assert on
//! output without capturing stdout; `print_report` is the I/O wrapper.

use crate::pipeline::ImportReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Indentation for context lines under an item.
const INDENT: &str = "    ";

/// Render a run report as display lines.
pub fn format_report(report: &ImportReport, index_path: Option<&Path>) -> Vec<String> {
    let mut lines = Vec::new();

    if report.items.is_empty() {
        lines.push("No images to import".to_string());
        return lines;
    }

    for (pos, item) in report.items.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(pos + 1),
            item.source_name,
            item.admitted_name
        ));
        let warnings = [item.stamp_warning.as_deref(), item.preview_warning.as_deref()];
        for warning in warnings.into_iter().flatten() {
            lines.push(format!("{INDENT}Warning: {warning}"));
        }
    }

    let warnings = report.warning_count();
    let mut summary = format!(
        "Imported {} images after serial {:04}",
        report.admitted_count(),
        report.base_serial
    );
    if warnings > 0 {
        let plural = if warnings == 1 { "" } else { "s" };
        summary.push_str(&format!(" ({warnings} warning{plural})"));
    }
    lines.push(summary);

    if let Some(merge) = &report.index {
        let location = index_path
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        lines.push(format!(
            "Index: {location} ({} entries, {} added)",
            merge.entries_total, merge.appended
        ));
        if let Some(warning) = &merge.load_warning {
            lines.push(format!("{INDENT}Warning: {warning}"));
        }
    }
    if let Some(warning) = &report.index_warning {
        lines.push(format!("Warning: {warning}"));
    }

    lines
}

/// Print a run report to stdout.
pub fn print_report(report: &ImportReport, index_path: Option<&Path>) {
    for line in format_report(report, index_path) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MergeReport;
    use crate::pipeline::ItemOutcome;

    fn clean_item(pos: u32) -> ItemOutcome {
        ItemOutcome {
            source_name: format!("img{pos}.jpg"),
            admitted_name: format!("LOP25-{pos:04}.jpeg"),
            serial: pos,
            stamp_warning: None,
            preview_warning: None,
        }
    }

    #[test]
    fn empty_run_reports_nothing_to_import() {
        let report = ImportReport {
            base_serial: 3,
            items: vec![],
            index: None,
            index_warning: None,
        };
        assert_eq!(format_report(&report, None), vec!["No images to import"]);
    }

    #[test]
    fn items_render_with_positional_index_and_mapping() {
        let report = ImportReport {
            base_serial: 0,
            items: vec![clean_item(1), clean_item(2)],
            index: None,
            index_warning: None,
        };
        let lines = format_report(&report, None);
        assert_eq!(lines[0], "001 img1.jpg → LOP25-0001.jpeg");
        assert_eq!(lines[1], "002 img2.jpg → LOP25-0002.jpeg");
        assert_eq!(lines[2], "Imported 2 images after serial 0000");
    }

    #[test]
    fn warnings_render_indented_under_their_item() {
        let mut item = clean_item(1);
        item.preview_warning = Some("could not create preview for img1.jpg: boom".to_string());
        let report = ImportReport {
            base_serial: 0,
            items: vec![item],
            index: None,
            index_warning: None,
        };
        let lines = format_report(&report, None);
        assert_eq!(
            lines[1],
            "    Warning: could not create preview for img1.jpg: boom"
        );
        assert!(lines[2].ends_with("(1 warning)"));
    }

    #[test]
    fn index_line_shows_totals() {
        let report = ImportReport {
            base_serial: 7,
            items: vec![clean_item(8)],
            index: Some(MergeReport {
                entries_total: 9,
                appended: 1,
                load_warning: None,
            }),
            index_warning: None,
        };
        let lines = format_report(&report, Some(Path::new("gallery/index.toml")));
        assert_eq!(
            lines.last().unwrap(),
            "Index: gallery/index.toml (9 entries, 1 added)"
        );
    }

    #[test]
    fn index_failure_renders_as_run_level_warning() {
        let report = ImportReport {
            base_serial: 0,
            items: vec![clean_item(1)],
            index: None,
            index_warning: Some("could not update index x.toml: oops".to_string()),
        };
        let lines = format_report(&report, Some(Path::new("x.toml")));
        assert_eq!(
            lines.last().unwrap(),
            "Warning: could not update index x.toml: oops"
        );
    }
}
