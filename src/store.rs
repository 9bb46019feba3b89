//! Milestone/progress store.
//!
//! Owns one project's milestone list and hands out the derived completion
//! percentage. Every mutation runs to completion, then notifies listeners
//! with the post-change state, so no reader ever sees a milestone list and a
//! percentage that disagree.

use uuid::Uuid;

use crate::model::{Milestone, Project};

/// What changed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    MilestoneAdded(Uuid),
    MilestoneToggled { id: Uuid, completed: bool },
    Renamed,
    Replaced,
}

type Listener = Box<dyn FnMut(&StoreEvent, &Project)>;

/// Single source of truth for a project's milestones and progress.
pub struct ProgressStore {
    project: Project,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new(Project::default())
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("project", &self.project)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProgressStore {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    // ── Reads ───────────────────────────────────────────────────

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Milestones in insertion order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.project.milestones
    }

    /// Completion percentage in `0..=100`.
    pub fn progress(&self) -> u8 {
        self.project.progress()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.project.milestones.iter().any(|m| m.id == id)
    }

    /// Bumped once per observable change; lets widgets cheaply detect staleness.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Append a milestone. Ids are expected to be unique; a duplicate is
    /// still appended, and later toggles by that id hit the first match.
    pub fn add_milestone(&mut self, milestone: Milestone) {
        if self.contains(milestone.id) {
            tracing::warn!(id = %milestone.id, title = %milestone.title, "duplicate milestone id");
        }
        let id = milestone.id;
        self.project.milestones.push(milestone);
        self.commit(StoreEvent::MilestoneAdded(id));
    }

    /// Flip the completion flag of the milestone with `id`. Unknown ids are
    /// ignored without notifying anyone.
    pub fn toggle_milestone(&mut self, id: Uuid) {
        let Some(milestone) = self.project.milestones.iter_mut().find(|m| m.id == id) else {
            tracing::debug!(%id, "toggle ignored, no such milestone");
            return;
        };
        milestone.toggle();
        let completed = milestone.completed;
        self.commit(StoreEvent::MilestoneToggled { id, completed });
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.project.name = name.into();
        self.commit(StoreEvent::Renamed);
    }

    /// Swap in a whole project, e.g. one loaded from disk.
    pub fn replace_project(&mut self, project: Project) {
        self.project = project;
        self.revision += 1;
        self.notify(&StoreEvent::Replaced);
    }

    /// Register a listener called synchronously after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent, &Project) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self, event: StoreEvent) {
        self.project.touch();
        self.revision += 1;
        tracing::trace!(?event, progress = self.progress(), "store updated");
        self.notify(&event);
    }

    fn notify(&mut self, event: &StoreEvent) {
        for listener in &mut self.listeners {
            listener(event, &self.project);
        }
    }
}
