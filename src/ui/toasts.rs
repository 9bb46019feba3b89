use crate::ui::theme;
use egui::{Align2, Color32, Context, RichText};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

const TOAST_SECONDS: f64 = 3.0;
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    kind: ToastKind,
    text: String,
    /// Set the first frame the toast is drawn.
    shown_at: Option<f64>,
}

/// Short-lived notifications in the bottom-right corner.
///
/// Cloning shares the queue, so a store listener can push while the app
/// renders.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    queue: Rc<RefCell<VecDeque<Toast>>>,
}

impl Toasts {
    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let mut queue = self.queue.borrow_mut();
        queue.push_back(Toast {
            kind,
            text,
            shown_at: None,
        });
        while queue.len() > MAX_TOASTS {
            queue.pop_front();
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Drop expired toasts and stamp new ones with `now`.
    fn expire(&self, now: f64) {
        let mut queue = self.queue.borrow_mut();
        for toast in queue.iter_mut() {
            toast.shown_at.get_or_insert(now);
        }
        queue.retain(|t| t.shown_at.is_some_and(|at| now - at < TOAST_SECONDS));
    }

    pub fn show(&self, ctx: &Context) {
        self.expire(ctx.input(|i| i.time));
        let queue = self.queue.borrow();
        if queue.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-12.0, -(theme::STATUS_BAR_HEIGHT + 12.0)])
            .show(ctx, |ui| {
                for toast in queue.iter() {
                    let accent = match toast.kind {
                        ToastKind::Info => theme::ACCENT,
                        ToastKind::Error => theme::TOAST_ERROR,
                    };
                    egui::Frame::default()
                        .fill(theme::TOAST_BG)
                        .rounding(egui::Rounding::same(6.0))
                        .stroke(egui::Stroke::new(1.0, accent))
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.text).color(Color32::WHITE));
                        });
                    ui.add_space(6.0);
                }
            });

        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_queue() {
        let toasts = Toasts::default();
        let handle = toasts.clone();
        handle.info("Milestone added");
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn keeps_only_the_newest() {
        let toasts = Toasts::default();
        for i in 0..10 {
            toasts.error(format!("failure {}", i));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.queue.borrow().back().unwrap().text, "failure 9");
    }

    #[test]
    fn toasts_expire_after_their_time() {
        let toasts = Toasts::default();
        toasts.info("saved");
        toasts.expire(10.0);
        assert_eq!(toasts.len(), 1);
        toasts.expire(10.0 + TOAST_SECONDS - 0.1);
        assert_eq!(toasts.len(), 1);
        toasts.expire(10.0 + TOAST_SECONDS);
        assert_eq!(toasts.len(), 0);
    }
}
