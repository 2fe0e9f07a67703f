use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

pub const DEBOUNCE: Duration = Duration::from_millis(150);

/// Debounced search box. Keystrokes only mark the query dirty; the app applies
/// the filter once input has been quiet for the debounce window, so superseded
/// keystrokes never trigger a filter pass. Clearing applies immediately.
pub struct SearchBar {
    pub query: String,
    dirty_since: Option<Instant>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self { query: String::new(), dirty_since: None }
    }

    pub fn field_id(&self) -> egui::Id {
        egui::Id::new("search_input")
    }

    /// Draws the field and the clear button (only while a query is present).
    /// Returns true when the user cleared the query.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut cleared = false;

        ui.horizontal(|ui| {
            let clear_width = ui.spacing().interact_size.x;
            let field_id = self.field_id();
            let field = egui::TextEdit::singleline(&mut self.query)
                .id(field_id)
                .hint_text("Search by word or number…")
                .desired_width(ui.available_width() - clear_width);
            let response = ui.add(field);

            if response.changed() {
                self.mark_edited_at(Instant::now());
            }

            if !self.query.is_empty() && ui.button("✕").on_hover_text("Clear search").clicked() {
                self.query.clear();
                self.dirty_since = None;
                cleared = true;
                response.request_focus();
            }
        });

        cleared
    }

    /// Hands back the query once it has settled, at most once per edit burst.
    pub fn take_settled(&mut self) -> Option<String> {
        if self.settled_at(Instant::now()) {
            self.dirty_since = None;
            Some(self.query.clone())
        } else {
            None
        }
    }

    /// True while an edit is waiting out the debounce window.
    pub fn pending(&self) -> bool {
        self.dirty_since.is_some()
    }

    fn mark_edited_at(&mut self, at: Instant) {
        self.dirty_since = Some(at);
    }

    fn settled_at(&self, now: Instant) -> bool {
        self.dirty_since
            .map_or(false, |since| now.saturating_duration_since(since) >= DEBOUNCE)
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_settles_after_the_debounce_window() {
        let mut bar = SearchBar::new();
        let t0 = Instant::now();
        bar.mark_edited_at(t0);

        assert!(!bar.settled_at(t0 + Duration::from_millis(100)));
        assert!(bar.settled_at(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn superseding_edit_restarts_the_window() {
        let mut bar = SearchBar::new();
        let t0 = Instant::now();
        bar.mark_edited_at(t0);
        bar.mark_edited_at(t0 + Duration::from_millis(100));

        // 150 ms after the first keystroke, only 50 ms after the second
        assert!(!bar.settled_at(t0 + Duration::from_millis(150)));
        assert!(bar.settled_at(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn idle_bar_never_settles() {
        let bar = SearchBar::new();
        assert!(!bar.pending());
        assert!(!bar.settled_at(Instant::now() + Duration::from_secs(60)));
    }
}
