use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::DeadlineStatus;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 26, 30);
pub const BG_PANEL: Color32 = Color32::from_rgb(31, 33, 38);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 21, 25);
pub const BG_STATUS_BAR: Color32 = Color32::from_rgb(36, 38, 44);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(52, 54, 60);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 232, 236);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 162, 172);
pub const TEXT_DIM: Color32 = Color32::from_rgb(105, 108, 118);

// Safety orange, the site accent.
pub const ACCENT: Color32 = Color32::from_rgb(242, 140, 40);

pub const RING_TRACK: Color32 = Color32::from_rgb(48, 50, 58);
pub const RING_FILL: Color32 = ACCENT;
pub const RING_COMPLETE: Color32 = Color32::from_rgb(76, 175, 80);

pub const STATUS_DONE: Color32 = Color32::from_rgb(76, 175, 80);
pub const STATUS_OVERDUE: Color32 = Color32::from_rgb(229, 72, 66);
pub const STATUS_DUE_SOON: Color32 = Color32::from_rgb(250, 190, 40);
pub const STATUS_UPCOMING: Color32 = TEXT_SECONDARY;

pub const TOAST_BG: Color32 = Color32::from_rgb(44, 46, 54);
pub const TOAST_ERROR: Color32 = STATUS_OVERDUE;

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const SIDE_PANEL_WIDTH: f32 = 280.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const RING_DIAMETER: f32 = 170.0;
pub const RING_THICKNESS: f32 = 14.0;
pub const DIALOG_WIDTH: f32 = 340.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_ring_value() -> FontId {
    FontId::proportional(34.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(10.5)
}

/// Badge color for a deadline state.
pub fn deadline_color(status: DeadlineStatus) -> Color32 {
    match status {
        DeadlineStatus::Done => STATUS_DONE,
        DeadlineStatus::Overdue { .. } => STATUS_OVERDUE,
        DeadlineStatus::DueSoon { .. } => STATUS_DUE_SOON,
        DeadlineStatus::Upcoming { .. } => STATUS_UPCOMING,
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD;

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 46, 54);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(54, 56, 66);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(62, 64, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = Color32::from_rgba_premultiplied(242, 140, 40, 60);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_and_done_are_distinct() {
        assert_ne!(
            deadline_color(DeadlineStatus::Overdue { days: 2 }),
            deadline_color(DeadlineStatus::Done)
        );
        assert_eq!(deadline_color(DeadlineStatus::DueSoon { days: 0 }), STATUS_DUE_SOON);
    }
}
