use eframe::egui;

use crate::{
    core::Card,
    gui::theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    Toggle,
    Next,
    Prev,
}

/// Persistent transport bar. The caller only draws it while a card is
/// current, so it never has to render an empty state.
pub fn now_playing_bar(
    ctx: &egui::Context,
    theme: &Theme,
    card: &Card,
    playing: bool,
) -> Option<TransportAction> {
    let mut action = None;

    egui::TopBottomPanel::bottom("now_playing").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(theme.heading(ui.ctx(), &format!("#{}", card.num)));
            ui.label(egui::RichText::new(&card.word).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left layout: first widget lands rightmost
                if ui.button("⏭").on_hover_text("Next").clicked() {
                    action = Some(TransportAction::Next);
                }
                let toggle_icon = if playing { "⏸" } else { "▶" };
                if ui.button(toggle_icon).clicked() {
                    action = Some(TransportAction::Toggle);
                }
                if ui.button("⏮").on_hover_text("Previous").clicked() {
                    action = Some(TransportAction::Prev);
                }
            });
        });
        ui.add_space(6.0);
    });

    action
}
