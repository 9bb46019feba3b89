use crate::app::SiteProgressApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut SiteProgressApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  New Project").clicked() {
                app.new_project();
                ui.close_menu();
            }
            if ui.button("  Open...").clicked() {
                app.open_project();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_project();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_project_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import CSV...").clicked() {
                app.import_csv();
                ui.close_menu();
            }
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("  Open Settings Folder").clicked() {
                let dir = app.settings_store.dir().to_path_buf();
                if let Err(e) = std::fs::create_dir_all(&dir).and_then(|()| open::that(&dir)) {
                    tracing::warn!(dir = %dir.display(), error = %e, "could not open settings folder");
                }
                ui.close_menu();
            }
            if ui.button("  About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let unsaved = if app.file_path.is_none() {
                " (unsaved)"
            } else if app.is_dirty() {
                " •"
            } else {
                ""
            };
            ui.label(
                RichText::new(format!("{}{}", app.store.project().name, unsaved))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
