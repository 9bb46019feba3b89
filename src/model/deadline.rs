use chrono::NaiveDate;

use super::milestone::Milestone;

/// Where a milestone stands relative to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Done,
    Overdue { days: i64 },
    DueSoon { days: i64 },
    Upcoming { days: i64 },
}

impl DeadlineStatus {
    /// Classify `milestone` as seen on `today`. Anything due within
    /// `due_soon_days` (inclusive, today counts) is `DueSoon`.
    pub fn classify(milestone: &Milestone, today: NaiveDate, due_soon_days: i64) -> Self {
        if milestone.completed {
            return Self::Done;
        }
        let days = (milestone.due_date - today).num_days();
        if days < 0 {
            Self::Overdue { days: -days }
        } else if days <= due_soon_days {
            Self::DueSoon { days }
        } else {
            Self::Upcoming { days }
        }
    }

    /// Short badge text for tables and panels.
    pub fn label(&self) -> String {
        match *self {
            Self::Done => "Done".to_string(),
            Self::Overdue { days: 1 } => "1 day overdue".to_string(),
            Self::Overdue { days } => format!("{} days overdue", days),
            Self::DueSoon { days: 0 } => "Due today".to_string(),
            Self::DueSoon { days: 1 } => "Due tomorrow".to_string(),
            Self::DueSoon { days } | Self::Upcoming { days } => format!("Due in {} days", days),
        }
    }
}
