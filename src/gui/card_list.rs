use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::Card,
    gui::theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Play(usize),
    Pause,
}

/// Clicking the active row while it plays pauses it; any other click starts
/// (or switches to) that row's card.
fn row_action(is_active: bool, playing: bool, deck_index: usize) -> RowAction {
    if is_active && playing {
        RowAction::Pause
    } else {
        RowAction::Play(deck_index)
    }
}

/// Draws one row per card of the filtered view. Returns what the user asked
/// for, if anything. The whole view is redrawn every frame; decks are small
/// enough that this never shows up in profiles.
pub fn card_list(
    ui: &mut egui::Ui,
    theme: &Theme,
    cards: &[Card],
    view: &[usize],
    current: Option<usize>,
    playing: bool,
    scroll_to_current: bool,
) -> Option<RowAction> {
    if view.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("🔍 Nothing found").weak().size(16.0));
        });
        return None;
    }

    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y)
        + 8.0;

    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(52.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(36.0))
        .body(|body| {
            body.rows(row_height, view.len(), |mut row| {
                let deck_index = view[row.index()];
                let card = &cards[deck_index];
                let is_active = current == Some(deck_index);
                row.set_selected(is_active);

                row.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), &card.num.to_string()));
                });
                row.col(|ui| {
                    if is_active {
                        ui.label(theme.bold(ui.ctx(), &card.word));
                    } else {
                        ui.label(&card.word);
                    }
                });
                row.col(|ui| {
                    let icon = if is_active && playing { "⏸" } else { "▶" };
                    if ui.button(icon).on_hover_text("Listen").clicked() {
                        action = Some(row_action(is_active, playing, deck_index));
                    }
                });

                let response = row.response();
                if is_active && scroll_to_current {
                    response.scroll_to_me(Some(egui::Align::Center));
                }
                if response.clicked() {
                    action = Some(row_action(is_active, playing, deck_index));
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_playing_row_pauses() {
        assert_eq!(row_action(true, true, 7), RowAction::Pause);
    }

    #[test]
    fn clicking_the_paused_active_row_restarts_it() {
        assert_eq!(row_action(true, false, 7), RowAction::Play(7));
    }

    #[test]
    fn clicking_another_row_switches_tracks_even_mid_playback() {
        assert_eq!(row_action(false, true, 3), RowAction::Play(3));
        assert_eq!(row_action(false, false, 3), RowAction::Play(3));
    }
}
