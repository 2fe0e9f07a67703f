use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde_json::Value;

use super::KikitoriError;

pub const DATA_FILE: &str = "data.json";
pub const AUDIO_DIR: &str = "audio";

/// One vocabulary entry. The audio path is synthesized at load time and the
/// file behind it is an external contract that is only checked on playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub num: u32,
    pub word: String,
    pub audio_path: PathBuf,
}

impl Card {
    fn from_row(row: &[Value], assets_dir: &Path) -> Result<Self, KikitoriError> {
        let num = row
            .first()
            .and_then(Value::as_u64)
            .and_then(|num| u32::try_from(num).ok())
            .ok_or_else(|| KikitoriError::MalformedCard(Value::Array(row.to_vec()).to_string()))?;
        let word = row
            .get(1)
            .and_then(Value::as_str)
            .ok_or_else(|| KikitoriError::MalformedCard(Value::Array(row.to_vec()).to_string()))?
            .to_string();

        let audio_path = assets_dir.join(AUDIO_DIR).join(format!("{}. {}.mp3", num, word));

        Ok(Card { num, word, audio_path })
    }
}

/// The full card set, sorted ascending by `num`. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Loads `<assets>/data.json` once per session. Any failure is terminal
    /// for the session; the caller reports it and leaves the deck empty.
    pub fn load(assets_dir: &Path) -> Result<Self, KikitoriError> {
        let json = fs::read_to_string(assets_dir.join(DATA_FILE))?;
        Self::from_json(&json, assets_dir)
    }

    /// Parses an array of `[num, word, ...]` rows. Elements past index 1 are
    /// carried by the data file for other tooling and ignored here.
    pub fn from_json(json: &str, assets_dir: &Path) -> Result<Self, KikitoriError> {
        let rows: Vec<Vec<Value>> = serde_json::from_str(json)?;

        let mut cards = rows
            .iter()
            .map(|row| Card::from_row(row, assets_dir))
            .collect::<Result<Vec<_>, _>>()?;

        cards.sort_by_key(|card| card.num);

        Ok(Deck { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn deck(json: &str) -> Result<Deck, KikitoriError> {
        Deck::from_json(json, Path::new("assets"))
    }

    #[test]
    fn loads_and_sorts_by_num() {
        let deck = deck(r#"[[3, "c"], [1, "a"], [2, "b"]]"#).unwrap();
        let nums: Vec<u32> = deck.cards.iter().map(|c| c.num).collect();
        let words: Vec<&str> = deck.cards.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(nums, vec![1, 2, 3]);
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn audio_path_matches_pronunciation_layout() {
        let deck = deck(r#"[[7, "ねこ", "cat"]]"#).unwrap();
        assert_eq!(
            deck.cards[0].audio_path,
            Path::new("assets").join("audio").join("7. ねこ.mp3")
        );
    }

    #[test]
    fn trailing_row_elements_are_ignored() {
        let deck = deck(r#"[[1, "apple", "fruit", 42, null]]"#).unwrap();
        assert_eq!(deck.cards[0].word, "apple");
    }

    #[test]
    fn empty_payload_is_an_empty_deck() {
        assert!(deck("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_rows_without_a_number() {
        assert!(matches!(
            deck(r#"[["one", "apple"]]"#),
            Err(KikitoriError::MalformedCard(_))
        ));
    }

    #[test]
    fn rejects_identifiers_that_overflow_u32() {
        assert!(matches!(
            deck(r#"[[4294967296, "too big"]]"#),
            Err(KikitoriError::MalformedCard(_))
        ));
    }

    #[test]
    fn rejects_rows_without_a_word() {
        assert!(matches!(deck(r#"[[1]]"#), Err(KikitoriError::MalformedCard(_))));
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(matches!(deck(r#"{"cards": []}"#), Err(KikitoriError::Json(_))));
    }
}
