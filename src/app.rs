use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::{Settings, SettingsStore};
use crate::model::{Milestone, Project};
use crate::store::{ProgressStore, StoreEvent};
use crate::ui;
use crate::ui::toasts::Toasts;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Main application state.
pub struct SiteProgressApp {
    pub store: ProgressStore,
    pub file_path: Option<PathBuf>,
    /// Store revision at the last load or save.
    saved_revision: u64,

    pub settings: Settings,
    pub settings_store: SettingsStore,

    // Dialog state
    pub show_add_milestone: bool,
    pub show_about: bool,
    pub new_milestone_title: String,
    pub new_milestone_due: NaiveDate,
    pub project_name_draft: String,

    // Status message
    pub status_message: String,
    pub toasts: Toasts,
}

impl SiteProgressApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_store: SettingsStore,
        settings: Settings,
    ) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut app = Self::with_settings(settings_store, settings);
        if let Some(path) = app.settings.recent_project.clone() {
            app.load_from(&path);
        }
        app
    }

    /// Build the app around an empty project without touching the UI context.
    pub fn with_settings(settings_store: SettingsStore, settings: Settings) -> Self {
        let toasts = Toasts::default();
        let mut store = ProgressStore::default();

        let notify = toasts.clone();
        store.subscribe(move |event, project| match event {
            StoreEvent::MilestoneAdded(id) => {
                if let Some(m) = project.find(*id) {
                    notify.info(format!("Added '{}'", m.title));
                }
            }
            StoreEvent::MilestoneToggled { id, completed } => {
                if let Some(m) = project.find(*id) {
                    let verb = if *completed { "completed" } else { "reopened" };
                    notify.info(format!("'{}' {} · {}%", m.title, verb, project.progress()));
                }
            }
            StoreEvent::Renamed | StoreEvent::Replaced => {}
        });

        let project_name_draft = store.project().name.clone();
        Self {
            saved_revision: store.revision(),
            store,
            file_path: None,
            settings,
            settings_store,
            show_add_milestone: false,
            show_about: false,
            new_milestone_title: String::new(),
            new_milestone_due: today() + chrono::Duration::days(7),
            project_name_draft,
            status_message: "Ready".to_string(),
            toasts,
        }
    }

    // --- File operations ---

    pub fn new_project(&mut self) {
        if !self.may_discard(|| confirm_discard("New Project")) {
            return;
        }
        self.replace_project(Project::default(), None);
        self.status_message = "New project created".to_string();
    }

    pub fn open_project(&mut self) {
        if !self.may_discard(|| confirm_discard("Open Project")) {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Site Progress Project", &["progress.json", "json"])
            .pick_file()
        {
            self.load_from(&path);
        }
    }

    fn load_from(&mut self, path: &Path) {
        match crate::io::load_project(path) {
            Ok(project) => {
                self.replace_project(project, Some(path.to_path_buf()));
                self.remember_recent(path);
                self.status_message = "Project loaded".to_string();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load project");
                self.forget_recent(path);
                self.report_error(format!("Error loading: {}", e));
            }
        }
    }

    pub fn save_project(&mut self) {
        match self.file_path.clone() {
            Some(path) => self.save_to(&path),
            None => self.save_project_as(),
        }
    }

    /// Ctrl+S: the name field may still hold focus, so fold its edit in first.
    pub fn save_from_shortcut(&mut self) {
        self.commit_project_name();
        self.save_project();
    }

    pub fn save_project_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Site Progress Project", &["progress.json", "json"])
            .set_file_name(format!("{}.progress.json", self.store.project().name))
            .save_file()
        {
            self.save_to(&path);
        }
    }

    fn save_to(&mut self, path: &Path) {
        match crate::io::save_project(self.store.project(), path) {
            Ok(()) => {
                self.file_path = Some(path.to_path_buf());
                self.saved_revision = self.store.revision();
                self.remember_recent(path);
                self.status_message = "Project saved".to_string();
                self.toasts.info("Project saved");
            }
            Err(e) => self.report_error(format!("Error saving: {}", e)),
        }
    }

    pub fn import_csv(&mut self) {
        if !self.may_discard(|| confirm_discard("Import CSV")) {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            match crate::io::csv_import::import_csv(&path) {
                Ok((milestones, skipped)) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("Imported Project");
                    self.apply_import(name, milestones, skipped);
                }
                Err(e) => self.report_error(format!("CSV import failed: {}", e)),
            }
        }
    }

    /// Replace the project with imported milestones, keeping their order.
    pub fn apply_import(&mut self, name: &str, milestones: Vec<Milestone>, skipped: usize) {
        let count = milestones.len();
        let mut project = Project::new(name);
        project.milestones = milestones;
        self.replace_project(project, None);

        self.status_message = if skipped > 0 {
            format!("Imported {} milestones ({} rows skipped)", count, skipped)
        } else {
            format!("Imported {} milestones", count)
        };
    }

    pub fn export_csv(&mut self) {
        if self.store.milestones().is_empty() {
            self.status_message = "Nothing to export, project has no milestones".to_string();
            return;
        }

        let default_name = format!("{}.csv", self.store.project().name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            match crate::io::csv_export::export_csv(self.store.milestones(), &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} milestones to CSV", count);
                }
                Err(e) => self.report_error(format!("CSV export failed: {}", e)),
            }
        }
    }

    // --- Milestone operations ---

    pub fn create_milestone_from_dialog(&mut self) {
        let title = self.new_milestone_title.trim();
        let title = if title.is_empty() { "New Milestone" } else { title };
        let milestone = Milestone::new(title, self.new_milestone_due);

        self.store.add_milestone(milestone);
        self.reset_dialog_fields();
        self.status_message = "Milestone added".to_string();
    }

    pub fn toggle_milestone(&mut self, id: uuid::Uuid) {
        self.store.toggle_milestone(id);
        self.status_message = format!("Progress {}%", self.store.progress());
    }

    pub fn commit_project_name(&mut self) {
        let draft = self.project_name_draft.trim();
        if draft.is_empty() {
            self.project_name_draft = self.store.project().name.clone();
        } else if draft != self.store.project().name {
            let name = draft.to_string();
            self.store.rename(name.clone());
            self.project_name_draft = name;
        }
    }

    fn replace_project(&mut self, project: Project, path: Option<PathBuf>) {
        self.project_name_draft = project.name.clone();
        self.store.replace_project(project);
        self.saved_revision = self.store.revision();
        self.file_path = path;
    }

    /// True when the store changed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.store.revision() != self.saved_revision
    }

    /// Whether the current project may be replaced. Unsaved changes need
    /// `confirm` to agree first.
    pub fn may_discard(&self, confirm: impl FnOnce() -> bool) -> bool {
        !self.is_dirty() || confirm()
    }

    /// Drop `path` from settings once it no longer loads.
    fn forget_recent(&mut self, path: &Path) {
        if self.settings.recent_project.as_deref() != Some(path) {
            return;
        }
        self.settings.recent_project = None;
        if let Err(e) = self.settings_store.save(&self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }

    fn remember_recent(&mut self, path: &Path) {
        if self.settings.recent_project.as_deref() == Some(path) {
            return;
        }
        self.settings.recent_project = Some(path.to_path_buf());
        if let Err(e) = self.settings_store.save(&self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }

    fn report_error(&mut self, message: String) {
        self.toasts.error(message.clone());
        self.status_message = message;
    }

    fn reset_dialog_fields(&mut self) {
        self.new_milestone_title = String::new();
        self.new_milestone_due = today() + chrono::Duration::days(7);
    }
}

/// Ask before throwing away unsaved changes.
fn confirm_discard(title: &str) -> bool {
    rfd::MessageDialog::new()
        .set_title(title)
        .set_description("The current project has unsaved changes that will be lost. Continue?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        == rfd::MessageDialogResult::Yes
}

impl eframe::App for SiteProgressApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save {
            self.save_from_shortcut();
        }

        let today = today();
        let due_soon_days = self.settings.due_soon_days;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS_BAR)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Milestones: {}",
                                self.store.milestones().len()
                            ))
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: project name, progress ring, deadlines
        let mut name_committed = false;
        egui::SidePanel::left("progress_panel")
            .exact_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(12.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                let name = ui.add(
                    egui::TextEdit::singleline(&mut self.project_name_draft)
                        .font(egui::TextStyle::Heading)
                        .frame(false),
                );
                name_committed = name.lost_focus();
                ui.add_space(12.0);

                let project = self.store.project();
                ui::progress_ring::show_progress_ring(
                    project.progress(),
                    project.completed_count(),
                    project.milestones.len(),
                    ui,
                );

                ui.add_space(16.0);
                ui.separator();
                ui.add_space(8.0);
                ui::deadline_panel::show_deadline_panel(project, today, due_soon_days, ui);
            });
        if name_committed {
            self.commit_project_name();
        }

        let mut table_action = ui::milestone_table::MilestoneTableAction::None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_DARK)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                table_action = ui::milestone_table::show_milestone_table(
                    self.store.milestones(),
                    today,
                    due_soon_days,
                    ui,
                );
            });

        match table_action {
            ui::milestone_table::MilestoneTableAction::Toggle(id) => self.toggle_milestone(id),
            ui::milestone_table::MilestoneTableAction::Add => self.show_add_milestone = true,
            ui::milestone_table::MilestoneTableAction::None => {}
        }

        if self.show_add_milestone {
            ui::dialogs::show_add_milestone_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }

        self.toasts.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> (tempfile::TempDir, SiteProgressApp) {
        let dir = tempfile::tempdir().unwrap();
        let app = SiteProgressApp::with_settings(
            SettingsStore::at(dir.path().join("settings.json")),
            Settings::default(),
        );
        (dir, app)
    }

    #[test]
    fn starts_with_an_empty_project() {
        let (_dir, app) = app();
        assert!(app.store.milestones().is_empty());
        assert_eq!(app.store.progress(), 0);
        assert_eq!(app.project_name_draft, "Untitled Project");
    }

    #[test]
    fn dialog_creates_milestone_and_resets() {
        let (_dir, mut app) = app();
        app.new_milestone_title = "  Topping out ".into();
        app.create_milestone_from_dialog();

        assert_eq!(app.store.milestones()[0].title, "Topping out");
        assert!(app.new_milestone_title.is_empty());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn blank_title_gets_a_placeholder() {
        let (_dir, mut app) = app();
        app.create_milestone_from_dialog();
        assert_eq!(app.store.milestones()[0].title, "New Milestone");
    }

    #[test]
    fn toggling_updates_status_and_progress() {
        let (_dir, mut app) = app();
        app.create_milestone_from_dialog();
        app.create_milestone_from_dialog();
        let id = app.store.milestones()[1].id;

        app.toggle_milestone(id);
        assert_eq!(app.store.progress(), 50);
        assert_eq!(app.status_message, "Progress 50%");
    }

    #[test]
    fn import_replaces_project() {
        let (_dir, mut app) = app();
        app.create_milestone_from_dialog();

        let due = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let mut imported = vec![Milestone::new("Survey", due), Milestone::new("Slab", due)];
        imported[0].completed = true;
        app.apply_import("Depot", imported, 3);

        assert_eq!(app.store.project().name, "Depot");
        assert_eq!(app.project_name_draft, "Depot");
        assert_eq!(app.store.progress(), 50);
        assert_eq!(app.status_message, "Imported 2 milestones (3 rows skipped)");
        assert!(app.file_path.is_none());
    }

    #[test]
    fn project_name_commit_renames_or_restores() {
        let (_dir, mut app) = app();
        app.project_name_draft = "  Riverside Clinic ".into();
        app.commit_project_name();
        assert_eq!(app.store.project().name, "Riverside Clinic");

        app.project_name_draft = "   ".into();
        app.commit_project_name();
        assert_eq!(app.project_name_draft, "Riverside Clinic");
        assert_eq!(app.store.project().name, "Riverside Clinic");
    }

    #[test]
    fn save_then_load_round_trip_through_the_app() {
        let dir = tempfile::tempdir().unwrap();
        let settings_store = SettingsStore::at(dir.path().join("settings.json"));
        let mut app = SiteProgressApp::with_settings(settings_store.clone(), Settings::default());
        app.create_milestone_from_dialog();
        let path = dir.path().join("job.progress.json");
        app.save_to(&path);

        assert_eq!(app.file_path.as_deref(), Some(path.as_path()));
        assert_eq!(settings_store.load().recent_project, Some(path.clone()));

        let mut other = SiteProgressApp::with_settings(settings_store, Settings::default());
        other.load_from(&path);
        assert_eq!(other.store.milestones(), app.store.milestones());
    }

    #[test]
    fn edits_mark_the_project_dirty_until_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = SiteProgressApp::with_settings(
            SettingsStore::at(dir.path().join("settings.json")),
            Settings::default(),
        );
        assert!(!app.is_dirty());

        app.create_milestone_from_dialog();
        assert!(app.is_dirty());

        app.save_to(&dir.path().join("job.progress.json"));
        assert!(!app.is_dirty());

        let id = app.store.milestones()[0].id;
        app.toggle_milestone(uuid::Uuid::new_v4());
        assert!(!app.is_dirty());
        app.toggle_milestone(id);
        assert!(app.is_dirty());
    }

    #[test]
    fn missing_recent_project_is_forgotten() {
        let dir = tempfile::tempdir().unwrap();
        let settings_store = SettingsStore::at(dir.path().join("settings.json"));
        let gone = dir.path().join("gone.progress.json");
        let settings = Settings {
            recent_project: Some(gone.clone()),
            ..Settings::default()
        };
        settings_store.save(&settings).unwrap();

        let mut app = SiteProgressApp::with_settings(settings_store.clone(), settings);
        app.load_from(&gone);

        assert!(app.status_message.starts_with("Error loading"));
        assert_eq!(app.settings.recent_project, None);
        assert_eq!(settings_store.load().recent_project, None);
    }

    #[test]
    fn failed_load_of_other_file_keeps_recent_project() {
        let (dir, mut app) = app();
        let recent = dir.path().join("current.progress.json");
        app.settings.recent_project = Some(recent.clone());

        app.load_from(&dir.path().join("other.progress.json"));
        assert_eq!(app.settings.recent_project, Some(recent));
    }

    #[test]
    fn replacing_a_dirty_project_needs_confirmation() {
        let (_dir, mut app) = app();
        assert!(app.may_discard(|| panic!("clean project must not ask")));

        app.create_milestone_from_dialog();
        assert!(!app.may_discard(|| false));
        assert!(app.may_discard(|| true));
    }

    #[test]
    fn saved_project_can_be_replaced_without_asking() {
        let (dir, mut app) = app();
        app.create_milestone_from_dialog();
        app.save_to(&dir.path().join("job.progress.json"));
        assert!(app.may_discard(|| panic!("saved project must not ask")));
    }

    #[test]
    fn shortcut_save_includes_name_still_being_edited() {
        let (dir, mut app) = app();
        let path = dir.path().join("job.progress.json");
        app.file_path = Some(path.clone());
        app.project_name_draft = "Harbour Bridge Repairs".into();

        app.save_from_shortcut();

        assert_eq!(app.store.project().name, "Harbour Bridge Repairs");
        assert_eq!(crate::io::load_project(&path).unwrap().name, "Harbour Bridge Repairs");
    }

    #[test]
    fn failed_load_reports_error() {
        let (_dir, mut app) = app();
        app.load_from(Path::new("/definitely/not/here.progress.json"));
        assert!(app.status_message.starts_with("Error loading"));
        assert_eq!(app.toasts.len(), 1);
    }
}
