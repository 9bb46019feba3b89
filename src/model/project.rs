use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::milestone::Milestone;

/// A construction project: its milestones in display order plus metadata.
///
/// Completion is never stored. [`Project::progress`] derives it from the
/// milestone list on every read so the two cannot disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub milestones: Vec<Milestone>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            milestones: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    pub fn completed_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    /// Percentage of completed milestones, 0 for an empty project.
    pub fn progress(&self) -> u8 {
        completion_percent(self.completed_count(), self.milestones.len())
    }

    pub fn find(&self, id: Uuid) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Earliest open milestone due on or after `today`.
    pub fn next_deadline(&self, today: NaiveDate) -> Option<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| !m.completed && m.due_date >= today)
            .min_by_key(|m| m.due_date)
    }

    /// Open milestones already past due, in display order.
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| !m.completed && m.due_date < today)
            .collect()
    }
}

/// `round(100 * completed / total)` with halves rounded away from zero.
///
/// Integer arithmetic keeps the boundary cases exact: 1/3 is 33, 2/3 is 67
/// and 1/8 is 13.
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((200 * completed + total) / (2 * total)) as u8
}
