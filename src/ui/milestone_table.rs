use crate::model::{DeadlineStatus, Milestone};
use crate::ui::theme;
use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use uuid::Uuid;

/// Actions that the milestone table can request.
pub enum MilestoneTableAction {
    None,
    Toggle(Uuid),
    Add,
}

/// Render the milestone list in display order.
pub fn show_milestone_table(
    milestones: &[Milestone],
    today: NaiveDate,
    due_soon_days: i64,
    ui: &mut Ui,
) -> MilestoneTableAction {
    let mut action = MilestoneTableAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Milestones")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.label(
            RichText::new(format!("({})", milestones.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let btn = egui::Button::new(
                RichText::new(format!("{}  Add Milestone", icons::PLUS))
                    .color(Color32::WHITE)
                    .size(12.0),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(5.0));
            if ui.add_sized([140.0, 28.0], btn).clicked() {
                action = MilestoneTableAction::Add;
            }
        });
    });

    ui.add_space(6.0);
    ui.separator();

    if milestones.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No milestones yet").color(theme::TEXT_DIM));
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("milestone_grid")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for header in ["", "MILESTONE", "DUE", "STATUS"] {
                        ui.label(RichText::new(header).size(9.5).strong().color(theme::TEXT_DIM));
                    }
                    ui.end_row();

                    for milestone in milestones {
                        let mut done = milestone.completed;
                        if ui.checkbox(&mut done, "").on_hover_text("Mark complete").changed() {
                            action = MilestoneTableAction::Toggle(milestone.id);
                        }

                        let mut title = RichText::new(&milestone.title).size(12.5);
                        title = if milestone.completed {
                            title.strikethrough().color(theme::TEXT_DIM)
                        } else {
                            title.color(theme::TEXT_PRIMARY)
                        };
                        ui.add(egui::Label::new(title).truncate());

                        ui.label(
                            RichText::new(milestone.due_date.format("%d %b %Y").to_string())
                                .size(11.0)
                                .color(theme::TEXT_SECONDARY),
                        );

                        let status = DeadlineStatus::classify(milestone, today, due_soon_days);
                        ui.label(
                            RichText::new(status.label())
                                .size(11.0)
                                .color(theme::deadline_color(status)),
                        );
                        ui.end_row();
                    }
                });
        });

    action
}
