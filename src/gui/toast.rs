use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Transient error notice. One notice at a time: a new error replaces the
/// text and restarts the dismissal timer, so the last error wins.
pub struct ErrorToast {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl ErrorToast {
    pub fn new() -> Self {
        Self { message: None, shown_at: None }
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_error_at(message, Instant::now());
    }

    fn show_error_at(&mut self, message: impl Into<String>, at: Instant) {
        self.message = Some(message.into());
        self.shown_at = Some(at);
    }

    fn visible_at(&self, now: Instant) -> bool {
        self.shown_at.map_or(false, |at| now.saturating_duration_since(at) < DISMISS_AFTER)
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let now = Instant::now();
        if !self.visible_at(now) {
            self.message = None;
            self.shown_at = None;
            return;
        }

        let message = match &self.message {
            Some(message) => message.clone(),
            None => return,
        };

        egui::Area::new(egui::Id::new("error_toast"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, egui::Vec2::new(0.0, 16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.5, theme.red(ui.ctx())))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("⚠").size(16.0).color(theme.red(ui.ctx())),
                            );
                            ui.label(message);
                        });
                    });
            });

        if let Some(at) = self.shown_at {
            // Wake up in time to dismiss even with no further input
            let remaining = DISMISS_AFTER.saturating_sub(now.saturating_duration_since(at));
            ctx.request_repaint_after(remaining);
        }
    }
}

impl Default for ErrorToast {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_lasts_four_seconds() {
        let mut toast = ErrorToast::new();
        let t0 = Instant::now();
        toast.show_error_at("load failed", t0);

        assert!(toast.visible_at(t0));
        assert!(toast.visible_at(t0 + Duration::from_millis(3_999)));
        assert!(!toast.visible_at(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn second_error_restarts_the_timer() {
        let mut toast = ErrorToast::new();
        let t0 = Instant::now();
        toast.show_error_at("first", t0);
        toast.show_error_at("second", t0 + Duration::from_secs(3));

        // Past the first notice's window, inside the second's
        assert!(toast.visible_at(t0 + Duration::from_secs(5)));
        assert!(!toast.visible_at(t0 + Duration::from_secs(7)));
        assert_eq!(toast.message.as_deref(), Some("second"));
    }

    #[test]
    fn starts_hidden() {
        let toast = ErrorToast::new();
        assert!(!toast.visible_at(Instant::now()));
    }
}
