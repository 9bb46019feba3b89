use crate::ui::theme;
use egui::{Align2, Pos2, RichText, Sense, Shape, Stroke, Ui};
use std::f32::consts::TAU;

/// Points along a clockwise arc starting at 12 o'clock covering `fraction`
/// of the full circle.
fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    let segments = ((64.0 * fraction).ceil() as usize).max(1);
    (0..=segments)
        .map(|i| {
            let angle = -TAU / 4.0 + TAU * fraction * i as f32 / segments as f32;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}

/// Circular gauge with the percentage in the middle and a
/// "completed of total" caption below.
pub fn show_progress_ring(progress: u8, completed: usize, total: usize, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        let size = egui::vec2(theme::RING_DIAMETER, theme::RING_DIAMETER);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = (theme::RING_DIAMETER - theme::RING_THICKNESS) / 2.0;

        painter.circle_stroke(
            center,
            radius,
            Stroke::new(theme::RING_THICKNESS, theme::RING_TRACK),
        );

        if progress > 0 {
            let color = if progress >= 100 {
                theme::RING_COMPLETE
            } else {
                theme::RING_FILL
            };
            let points = arc_points(center, radius, f32::from(progress) / 100.0);
            painter.add(Shape::line(points, Stroke::new(theme::RING_THICKNESS, color)));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            format!("{}%", progress),
            theme::font_ring_value(),
            theme::TEXT_PRIMARY,
        );

        response.on_hover_text(format!("{} of {} milestones complete", completed, total));

        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("{} / {} milestones", completed, total))
                .color(theme::TEXT_SECONDARY),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn arc_starts_at_top() {
        let points = arc_points(Pos2::ZERO, 10.0, 0.5);
        assert!(close(points[0], Pos2::new(0.0, -10.0)));
    }

    #[test]
    fn half_arc_ends_at_bottom() {
        let points = arc_points(Pos2::ZERO, 10.0, 0.5);
        assert!(close(*points.last().unwrap(), Pos2::new(0.0, 10.0)));
    }

    #[test]
    fn quarter_arc_runs_clockwise() {
        // Screen y grows downwards, so clockwise from the top ends at the right.
        let points = arc_points(Pos2::ZERO, 10.0, 0.25);
        assert!(close(*points.last().unwrap(), Pos2::new(10.0, 0.0)));
    }

    #[test]
    fn fraction_is_clamped() {
        let full = arc_points(Pos2::ZERO, 10.0, 1.0);
        let over = arc_points(Pos2::ZERO, 10.0, 3.0);
        assert_eq!(full.len(), over.len());
    }
}
