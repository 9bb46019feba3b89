use crate::app::SiteProgressApp;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};

/// Render the "Add Milestone" dialog.
pub fn show_add_milestone_dialog(app: &mut SiteProgressApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Add Milestone").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.add_space(4.0);

            egui::Grid::new("add_milestone_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    let title = ui.add_sized(
                        [220.0, 24.0],
                        egui::TextEdit::singleline(&mut app.new_milestone_title)
                            .hint_text("e.g. Foundation poured"),
                    );
                    if title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        app.create_milestone_from_dialog();
                        should_close = true;
                    }
                    ui.end_row();

                    ui.label(RichText::new("Due").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_milestone_due)
                            .id_salt("dlg_dp_due"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let create_btn = egui::Button::new(RichText::new("Create").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], create_btn).clicked() {
                    app.create_milestone_from_dialog();
                    should_close = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_milestone = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut SiteProgressApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 170.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Site Progress").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Milestone and progress tracking");
                ui.label("for construction projects.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
