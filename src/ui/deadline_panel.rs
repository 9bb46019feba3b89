use crate::model::{DeadlineStatus, Project};
use crate::ui::theme;
use chrono::NaiveDate;
use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

/// Next upcoming deadline plus everything already overdue.
pub fn show_deadline_panel(project: &Project, today: NaiveDate, due_soon_days: i64, ui: &mut Ui) {
    ui.label(RichText::new("Deadlines").strong().size(14.0));
    ui.add_space(4.0);

    match project.next_deadline(today) {
        Some(next) => {
            let status = DeadlineStatus::classify(next, today, due_soon_days);
            ui.horizontal(|ui| {
                ui.label(RichText::new(icons::FLAG).color(theme::deadline_color(status)));
                ui.label(RichText::new(&next.title).color(theme::TEXT_PRIMARY));
            });
            ui.label(
                RichText::new(format!("{} · {}", next.due_date.format("%d %b %Y"), status.label()))
                    .font(theme::font_small())
                    .color(theme::deadline_color(status)),
            );
        }
        None => {
            ui.label(RichText::new("Nothing upcoming").color(theme::TEXT_DIM));
        }
    }

    let overdue = project.overdue(today);
    if overdue.is_empty() {
        return;
    }

    ui.add_space(10.0);
    ui.label(
        RichText::new(format!("{} Overdue ({})", icons::WARNING, overdue.len()))
            .strong()
            .color(theme::STATUS_OVERDUE),
    );
    for milestone in overdue {
        let status = DeadlineStatus::classify(milestone, today, due_soon_days);
        ui.horizontal(|ui| {
            ui.add(egui::Label::new(RichText::new(&milestone.title).size(12.0)).truncate());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(status.label())
                        .font(theme::font_small())
                        .color(theme::STATUS_OVERDUE),
                );
            });
        });
    }
}
