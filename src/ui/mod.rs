pub mod deadline_panel;
pub mod dialogs;
pub mod milestone_table;
pub mod progress_ring;
pub mod theme;
pub mod toasts;
pub mod toolbar;
