use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled, dated checkpoint on the construction schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: Uuid,
    pub title: String,
    /// Advisory only; nothing is scheduled off this date.
    pub due_date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Milestone {
    /// Create an open milestone with a fresh id.
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), title, due_date)
    }

    /// Create an open milestone with a caller-supplied id.
    pub fn with_id(id: Uuid, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_milestone_starts_open() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let m = Milestone::new("Foundation poured", date);
        assert!(!m.completed);
        assert_eq!(m.title, "Foundation poured");
        assert_ne!(m.id, Milestone::new("Foundation poured", date).id);
    }

    #[test]
    fn serializes_with_camel_case_due_date() {
        let id = Uuid::nil();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let json = serde_json::to_value(Milestone::with_id(id, "Roof", date)).unwrap();
        assert_eq!(json["dueDate"], "2026-03-01");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn missing_completed_flag_defaults_to_open() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000000","title":"Roof","dueDate":"2026-03-01"}"#;
        let m: Milestone = serde_json::from_str(json).unwrap();
        assert!(!m.completed);
    }
}
