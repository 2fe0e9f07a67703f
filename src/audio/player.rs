use std::{
    fs::File,
    io::BufReader,
};

use rodio::{
    mixer::Mixer,
    Decoder,
    OutputStream,
    OutputStreamBuilder,
    Sink,
};

use crate::core::{
    Card,
    KikitoriError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

/// Deck index one step away from `current` inside the filtered view,
/// honoring the view's order. `None` at either boundary and when the current
/// card has been filtered out of the view. No wraparound.
pub fn step_in_view(view: &[usize], current: usize, step: Step) -> Option<usize> {
    let position = view.iter().position(|&index| index == current)?;
    let target = match step {
        Step::Forward => position.checked_add(1)?,
        Step::Back => position.checked_sub(1)?,
    };
    view.get(target).copied()
}

/// Owns the single audio output. At most one track is active: starting a new
/// card stops the previous sink before the fresh one is connected.
///
/// The sink, not this struct, is the source of truth for "playing": the flag
/// is derived on every query so a drained or externally paused sink is never
/// misreported.
pub struct Player {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    current: Option<usize>,
}

impl Player {
    pub fn new() -> Self {
        Self { stream: None, sink: None, current: None }
    }

    /// Deck index of the active card, kept across pause, track end, and
    /// failed playback starts.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().map_or(false, |sink| !sink.is_paused() && !sink.empty())
    }

    /// True while the started track can still be resumed in place. Once the
    /// sink has drained, playing again means restarting the card.
    pub fn can_resume(&self) -> bool {
        self.sink.as_ref().map_or(false, |sink| !sink.empty())
    }

    /// Starts the given deck entry, replacing whatever was playing. `current`
    /// moves to `index` even when startup fails, so the selection survives a
    /// missing or undecodable file and the user can retry or pick another
    /// card.
    pub fn play(&mut self, index: usize, card: &Card) -> Result<(), KikitoriError> {
        self.current = Some(index);

        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let file = File::open(&card.audio_path)?;
        let source = Decoder::new(BufReader::new(file))?;

        let mixer = self.ensure_stream()?;
        let sink = Sink::connect_new(mixer);
        sink.append(source);
        sink.play();
        self.sink = Some(sink);

        Ok(())
    }

    pub fn pause(&self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    /// `Sink::play` cannot fail, so unlike `play` there is no error path to
    /// surface here. A drained sink is left alone; the caller restarts the
    /// card via `play` instead.
    pub fn resume(&self) {
        if let Some(sink) = &self.sink {
            if !sink.empty() {
                sink.play();
            }
        }
    }

    fn ensure_stream(&mut self) -> Result<&Mixer, KikitoriError> {
        if self.stream.is_none() {
            let stream = OutputStreamBuilder::open_default_stream()?;
            println!("[Audio] Opened default output stream");
            self.stream = Some(stream);
        }

        match &self.stream {
            Some(stream) => Ok(stream.mixer()),
            None => Err(KikitoriError::Custom("audio output unavailable".to_string())),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn steps_follow_the_view_order() {
        // Filtered view over a larger deck: deck indices 0, 3, 9
        let view = [0, 3, 9];
        assert_eq!(step_in_view(&view, 0, Step::Forward), Some(3));
        assert_eq!(step_in_view(&view, 3, Step::Forward), Some(9));
        assert_eq!(step_in_view(&view, 9, Step::Back), Some(3));
    }

    #[test]
    fn boundaries_are_no_ops() {
        let view = [0, 3, 9];
        assert_eq!(step_in_view(&view, 9, Step::Forward), None);
        assert_eq!(step_in_view(&view, 0, Step::Back), None);
    }

    #[test]
    fn current_card_outside_the_view_is_a_no_op() {
        // The active card was narrowed out by a later search
        let view = [0, 3, 9];
        assert_eq!(step_in_view(&view, 5, Step::Forward), None);
        assert_eq!(step_in_view(&view, 5, Step::Back), None);
    }

    #[test]
    fn single_entry_view_has_no_neighbors() {
        assert_eq!(step_in_view(&[4], 4, Step::Forward), None);
        assert_eq!(step_in_view(&[4], 4, Step::Back), None);
    }

    #[test]
    fn empty_view_has_no_neighbors() {
        assert_eq!(step_in_view(&[], 0, Step::Forward), None);
    }

    #[test]
    fn failed_start_keeps_the_selection_without_marking_playback() {
        let card = Card {
            num: 3,
            word: "ねこ".to_string(),
            audio_path: PathBuf::from("assets/audio/no-such-recording.mp3"),
        };

        // The missing file fails the start before any output stream is
        // opened, so this runs without an audio device.
        let mut player = Player::new();
        assert!(player.play(3, &card).is_err());

        // Selection survives so the user can retry or pick another card,
        // and no row may read as playing
        assert_eq!(player.current(), Some(3));
        assert!(!player.is_playing());
        assert!(!player.can_resume());
    }

    #[test]
    fn idle_player_reports_nothing_playing() {
        let player = Player::new();
        assert_eq!(player.current(), None);
        assert!(!player.is_playing());
        assert!(!player.can_resume());
    }
}
