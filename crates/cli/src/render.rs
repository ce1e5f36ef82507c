//! Presentation of checked touches: ordering, the text table and the JSON
//! report.

use serde::Serialize;
use touchcheck_core::{ErrorReport, MethodCatalogue, Touch, TouchRecord};

/// A rejected record as shown to the user, located by line.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RejectedLine {
    pub line: usize,
    #[serde(flatten)]
    pub record: TouchRecord,
    pub error: ErrorReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckReport<'a> {
    pub touches: &'a [Touch],
    pub rejected: &'a [RejectedLine],
}

/// Shortest first; among equal lengths the most runs first, then by
/// call-string.
pub(crate) fn sort_touches(touches: &mut [Touch]) {
    touches.sort_by(|a, b| {
        a.length
            .cmp(&b.length)
            .then_with(|| b.runs.cmp(&a.runs))
            .then_with(|| a.call_string.cmp(&b.call_string))
    });
}

pub(crate) fn render_json(report: &CheckReport<'_>) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e))
}

/// Render the touches as a table with one count column per method used,
/// in catalogue order.
pub(crate) fn render_table(catalogue: &MethodCatalogue, report: &CheckReport<'_>) -> String {
    let used: Vec<char> = catalogue
        .methods()
        .iter()
        .map(|m| m.shorthand())
        .filter(|c| report.touches.iter().any(|t| t.method_counts.contains_key(c)))
        .collect();

    let mut header: Vec<String> = vec![
        "Length".into(),
        "Calling".into(),
        "Positions".into(),
        "Runs".into(),
    ];
    header.extend(used.iter().map(char::to_string));
    header.push("Notes".into());

    let rows: Vec<Vec<String>> = report
        .touches
        .iter()
        .map(|t| {
            let mut row = vec![
                t.length.to_string(),
                t.call_string.clone(),
                t.calling_positions.clone(),
                t.runs.to_string(),
            ];
            row.extend(used.iter().map(|c| {
                t.method_counts
                    .get(c)
                    .map(usize::to_string)
                    .unwrap_or_default()
            }));
            row.push(t.notes.clone().unwrap_or_default());
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&format!("{} touch(es) valid", report.touches.len()));
    if !report.rejected.is_empty() {
        out.push_str(&format!(", {} rejected", report.rejected.len()));
    }
    out.push('\n');

    for rejected in report.rejected {
        out.push_str(&format!(
            "  line {}: {}\n",
            rejected.line, rejected.error.message
        ));
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        if i == last {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}", cell, width = *width));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_catalogue;
    use touchcheck_core::RingingError;

    fn touch(length: usize, call_string: &str, notes: Option<&str>) -> Touch {
        let cat = load_catalogue(None).unwrap();
        Touch::new(&TouchRecord::new(length, call_string, notes), &cat).unwrap()
    }

    #[test]
    fn sorts_by_length_then_runs_then_calling() {
        let mut touches = vec![
            touch(224, "CCCCCCC", None),
            touch(64, "SW", None),
            touch(64, "B*B*", None),
            touch(64, "WS", None),
            touch(224, "YYYYYYY", None),
        ];
        sort_touches(&mut touches);
        let order: Vec<&str> = touches.iter().map(|t| t.call_string.as_str()).collect();
        assert_eq!(order, vec!["B*B*", "WS", "SW", "YYYYYYY", "CCCCCCC"]);
    }

    #[test]
    fn table_has_a_column_per_used_method() {
        let cat = load_catalogue(None).unwrap();
        let touches = vec![
            touch(66, "E*B.L", Some("snap")),
            touch(224, "CCCCCCC", None),
        ];
        let rejected = vec![RejectedLine {
            line: 7,
            record: TouchRecord::new(0, "CCCCCC", None),
            error: RingingError::DoesNotComeRound {
                call_string: "CCCCCC".into(),
                lead_head: "16482735".into(),
            }
            .to_report(),
        }];
        let table = render_table(
            &cat,
            &CheckReport {
                touches: &touches,
                rejected: &rejected,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["Length", "Calling", "Positions", "Runs", "C", "B", "E", "L", "Notes"]
        );
        assert!(lines[2].starts_with("66 "));
        assert!(lines[2].ends_with("snap"));
        assert_eq!(
            lines[3].split_whitespace().collect::<Vec<_>>(),
            vec!["224", "CCCCCCC", "15", "7"]
        );
        assert!(table.contains("2 touch(es) valid, 1 rejected"));
        assert!(table.contains("line 7: CCCCCC doesn't come round (finishes at 16482735)"));
    }

    #[test]
    fn json_report_lists_touches_and_rejections() {
        let touches = vec![touch(48, "N.N.N.", None)];
        let rejected = vec![RejectedLine {
            line: 2,
            record: TouchRecord::new(100, "CCCCCCC", Some("wrong")),
            error: RingingError::LengthMismatch {
                call_string: "CCCCCCC".into(),
                declared: 100,
                actual: 224,
            }
            .to_report(),
        }];
        let json = render_json(&CheckReport {
            touches: &touches,
            rejected: &rejected,
        });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["touches"][0]["calling_positions"], "IVH");
        assert_eq!(value["touches"][0]["method_counts"]["N"], 3);
        assert_eq!(value["rejected"][0]["line"], 2);
        assert_eq!(value["rejected"][0]["notes"], "wrong");
        assert_eq!(value["rejected"][0]["error"]["kind"], "length_mismatch");
    }
}
