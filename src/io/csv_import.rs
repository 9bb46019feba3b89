use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::Milestone;

/// Interpret a status cell as a completion flag.
fn status_to_completed(status: &str) -> bool {
    matches!(
        status.trim().to_lowercase().as_str(),
        "done" | "finished" | "complete" | "completed" | "closed" | "yes" | "true" | "1" | "x"
    )
}

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Title,
    Due,
    Status,
}

/// Map a header cell to a known column, ignoring case, spaces, dashes and underscores.
fn header_to_column(header: &str) -> Option<Column> {
    let normalized = header.trim().to_lowercase().replace([' ', '-', '_'], "");
    match normalized.as_str() {
        "title" | "name" | "milestone" | "milestonename" | "task" | "label" => Some(Column::Title),
        "due" | "duedate" | "date" | "deadline" | "target" | "targetdate" => Some(Column::Due),
        "status" | "state" | "done" | "completed" | "complete" => Some(Column::Status),
        _ => None,
    }
}

/// Import milestones from a CSV file.
///
/// Returns `(milestones, skipped_count)` on success.
pub fn import_csv(path: &Path) -> Result<(Vec<Milestone>, usize)> {
    let content = std::fs::read_to_string(path)?;
    let (milestones, skipped) = parse_csv(&content)?;
    tracing::info!(path = %path.display(), count = milestones.len(), skipped, "milestones imported");
    Ok((milestones, skipped))
}

/// Parse CSV text into milestones.
///
/// Auto-detects the delimiter (comma, semicolon, tab) and matches headers
/// flexibly ("Milestone", "Due Date", "Status", ...). Rows without a title
/// or a readable due date are skipped and counted.
pub fn parse_csv(content: &str) -> Result<(Vec<Milestone>, usize)> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns: Vec<Option<Column>> = headers.iter().map(header_to_column).collect();

    if !columns.contains(&Some(Column::Title)) || !columns.contains(&Some(Column::Due)) {
        return Err(Error::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut milestones = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(row, error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let mut title = None;
        let mut due = None;
        let mut status = None;
        for (field, column) in record.iter().zip(&columns) {
            match column {
                Some(Column::Title) => title = Some(field),
                Some(Column::Due) => due = Some(field),
                Some(Column::Status) => status = Some(field),
                None => {}
            }
        }

        let title = match title {
            Some(t) if !t.is_empty() => t,
            _ => {
                tracing::warn!(row, "skipping CSV row without a title");
                skipped += 1;
                continue;
            }
        };

        let Some(due_date) = due.and_then(parse_date) else {
            tracing::warn!(row, due = due.unwrap_or(""), "skipping CSV row with invalid due date");
            skipped += 1;
            continue;
        };

        let mut milestone = Milestone::new(title, due_date);
        milestone.completed = status.is_some_and(status_to_completed);
        milestones.push(milestone);
    }

    if milestones.is_empty() {
        return Err(Error::NoRows { skipped });
    }

    Ok((milestones, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exported_format() {
        let text = "Title;Due Date;Status\nScaffold up;03/04/2026;Done\nRoof on;20/05/2026;Open\n";
        let (milestones, skipped) = parse_csv(text).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0].title, "Scaffold up");
        assert_eq!(milestones[0].due_date, NaiveDate::from_ymd_opt(2026, 4, 3).unwrap());
        assert!(milestones[0].completed);
        assert!(!milestones[1].completed);
    }

    #[test]
    fn header_aliases_and_comma_delimiter() {
        let text = "Milestone,Deadline,Notes\nPermits issued,2026-02-01,council\n";
        let (milestones, _) = parse_csv(text).unwrap();
        assert_eq!(milestones[0].title, "Permits issued");
        assert!(!milestones[0].completed);
    }

    #[test]
    fn bad_rows_are_skipped_and_counted() {
        let text = "title\tdue\n\t2026-01-01\nFoundations\tsoon\nSlab\t2026-03-01\n";
        let (milestones, skipped) = parse_csv(text).unwrap();
        assert_eq!(skipped, 2);
        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].title, "Slab");
    }

    #[test]
    fn missing_due_column_is_rejected() {
        let err = parse_csv("Title;Owner\nSlab;Kim\n").unwrap_err();
        match err {
            Error::MissingColumns { found } => assert_eq!(found, vec!["Title", "Owner"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_valid_rows_is_rejected() {
        let err = parse_csv("Title;Due\nSlab;someday\n").unwrap_err();
        assert!(matches!(err, Error::NoRows { skipped: 1 }));
    }
}
