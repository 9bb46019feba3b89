pub mod deadline;
pub mod milestone;
pub mod project;

pub use deadline::DeadlineStatus;
pub use milestone::Milestone;
pub use project::Project;
