use std::{
    path::Path,
    time::Duration,
};

use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    audio::{
        step_in_view,
        Player,
        Step,
    },
    core::{
        search,
        Deck,
    },
    gui::{
        card_list::{
            card_list,
            RowAction,
        },
        now_playing::{
            now_playing_bar,
            TransportAction,
        },
        search_bar::{
            SearchBar,
            DEBOUNCE,
        },
        theme::{
            set_theme,
            Theme,
        },
        toast::ErrorToast,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const ASSETS_DIR: &str = "assets";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

pub struct KikitoriApp {
    // Deck (immutable after load; empty when the load failed)
    deck: Deck,

    // UI state
    search: SearchBar,
    applied_query: String,
    view: Vec<usize>,
    scroll_to_current: bool,
    theme: Theme,
    toast: ErrorToast,

    // Playback
    player: Player,

    // Configuration
    settings: SettingsData,
}

impl KikitoriApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: SettingsData = load_json_or_default(SETTINGS_FILE);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let mut toast = ErrorToast::new();
        let deck = match Deck::load(Path::new(ASSETS_DIR)) {
            Ok(deck) => {
                println!("[Deck] Loaded {} cards", deck.len());
                deck
            }
            Err(e) => {
                // Terminal for the session: no partial deck, inert UI until reload
                eprintln!("[Deck] Failed to load vocabulary data: {}", e);
                toast.show_error("Failed to load vocabulary data");
                Deck::default()
            }
        };

        let view = search::filter_deck(&deck.cards, "");

        Self {
            deck,
            search: SearchBar::new(),
            applied_query: String::new(),
            view,
            scroll_to_current: false,
            theme,
            toast,
            player: Player::new(),
            settings,
        }
    }

    fn apply_filter(&mut self, query: &str) {
        self.applied_query = query.trim().to_lowercase();
        self.view = search::filter_deck(&self.deck.cards, query);
    }

    fn play_card(&mut self, index: usize) {
        let Some(card) = self.deck.cards.get(index) else {
            return;
        };
        match self.player.play(index, card) {
            Ok(()) => {
                self.scroll_to_current = true;
            }
            Err(e) => {
                // Selection is kept so the user can retry or pick another card
                eprintln!("[Audio] Failed to start {}: {}", card.audio_path.display(), e);
                let word = card.word.clone();
                self.toast.show_error(format!("Could not play \u{201c}{}\u{201d}", word));
            }
        }
    }

    fn toggle_playback(&mut self) {
        let Some(index) = self.player.current() else {
            return;
        };
        if self.player.is_playing() {
            self.player.pause();
        } else if self.player.can_resume() {
            self.player.resume();
        } else {
            // Track drained; restart it from the top like the play button would
            self.play_card(index);
        }
    }

    fn play_neighbor(&mut self, step: Step) {
        let Some(current) = self.player.current() else {
            return;
        };
        if let Some(next) = step_in_view(&self.view, current, step) {
            self.play_card(next);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Every shortcut is suppressed while a query is being typed
        let search_focused = ctx.memory(|m| m.focused()) == Some(self.search.field_id());
        if search_focused {
            return;
        }

        let (space, next, prev) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });

        if space {
            self.toggle_playback();
        }
        if next {
            self.play_neighbor(Step::Forward);
        }
        if prev {
            self.play_neighbor(Step::Back);
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{} cards", self.deck.len()));
                });
            });

            ui.add_space(4.0);
            if self.search.show(ui) {
                self.apply_filter("");
            }

            let status = if self.applied_query.is_empty() {
                "Tip: search by word, or by card number prefix".to_string()
            } else {
                format!("Found: {}", self.view.len())
            };
            ui.label(egui::RichText::new(status).small().color(self.theme.comment(ctx)));
            ui.add_space(4.0);
        });
    }

    fn sync_settings(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                eprintln!("[Settings] Failed to save settings: {}", e);
            }
        }
    }
}

impl eframe::App for KikitoriApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(query) = self.search.take_settled() {
            self.apply_filter(&query);
        }
        if self.search.pending() {
            // Wake up to run the settle check even with no further input
            ctx.request_repaint_after(DEBOUNCE);
        }

        self.handle_keys(ctx);
        self.top_bar(ctx);

        if let Some(index) = self.player.current() {
            if let Some(card) = self.deck.cards.get(index).cloned() {
                let playing = self.player.is_playing();
                match now_playing_bar(ctx, &self.theme, &card, playing) {
                    Some(TransportAction::Toggle) => self.toggle_playback(),
                    Some(TransportAction::Next) => self.play_neighbor(Step::Forward),
                    Some(TransportAction::Prev) => self.play_neighbor(Step::Back),
                    None => {}
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let action = card_list(
                ui,
                &self.theme,
                &self.deck.cards,
                &self.view,
                self.player.current(),
                self.player.is_playing(),
                std::mem::take(&mut self.scroll_to_current),
            );
            match action {
                Some(RowAction::Play(index)) => self.play_card(index),
                Some(RowAction::Pause) => self.player.pause(),
                None => {}
            }
        });

        self.toast.show(ctx, &self.theme);
        self.sync_settings(ctx);

        if self.player.is_playing() {
            // Poll so a drained sink flips the icons without user input
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
