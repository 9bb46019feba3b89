use crate::error::Result;
use crate::model::Milestone;
use std::io::Write;
use std::path::Path;

fn status_label(milestone: &Milestone) -> &'static str {
    if milestone.completed {
        "Done"
    } else {
        "Open"
    }
}

/// Export milestones to a semicolon-delimited CSV file matching the import format.
///
/// Columns: Title ; Due Date ; Status
/// Dates are formatted as DD/MM/YYYY.
/// Returns the number of milestones written.
pub fn export_csv(milestones: &[Milestone], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    let count = write_csv(milestones, file)?;
    tracing::info!(path = %path.display(), count, "milestones exported");
    Ok(count)
}

pub fn write_csv<W: Write>(milestones: &[Milestone], writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    wtr.write_record(["Title", "Due Date", "Status"])?;
    for milestone in milestones {
        let due = milestone.due_date.format("%d/%m/%Y").to_string();
        wtr.write_record([milestone.title.as_str(), due.as_str(), status_label(milestone)])?;
    }

    wtr.flush()?;
    Ok(milestones.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn writes_header_and_rows() {
        let mut milestones = vec![
            Milestone::new("Scaffold up", NaiveDate::from_ymd_opt(2026, 4, 3).unwrap()),
            Milestone::new("Glazing; phase 2", NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()),
        ];
        milestones[0].completed = true;

        let mut out = Vec::new();
        assert_eq!(write_csv(&milestones, &mut out).unwrap(), 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Title;Due Date;Status");
        assert_eq!(lines[1], "Scaffold up;03/04/2026;Done");
        assert_eq!(lines[2], "\"Glazing; phase 2\";20/05/2026;Open");
    }
}
