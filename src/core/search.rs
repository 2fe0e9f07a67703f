use super::Card;

/// Derives the filtered view: indices into the sorted deck, in deck order.
///
/// An all-digit query matches cards whose number, rendered as decimal text,
/// starts with the query. Anything else is a case-insensitive substring match
/// on the word. An empty (or whitespace-only) query is a full reset.
pub fn filter_deck(cards: &[Card], raw_query: &str) -> Vec<usize> {
    let query = raw_query.trim().to_lowercase();

    if query.is_empty() {
        return (0..cards.len()).collect();
    }

    let numeric = query.chars().all(|c| c.is_ascii_digit());

    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| {
            if numeric {
                card.num.to_string().starts_with(&query)
            } else {
                card.word.to_lowercase().contains(&query)
            }
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn card(num: u32, word: &str) -> Card {
        Card { num, word: word.to_string(), audio_path: PathBuf::new() }
    }

    fn sample() -> Vec<Card> {
        vec![card(1, "apple"), card(12, "apricot"), card(21, "Banana")]
    }

    #[test]
    fn digit_query_is_a_decimal_prefix_match() {
        let cards = sample();
        assert_eq!(filter_deck(&cards, "1"), vec![0, 1]);
        // 12 contains "2" but does not start with it
        assert_eq!(filter_deck(&cards, "2"), vec![2]);
        assert_eq!(filter_deck(&cards, "12"), vec![1]);
        assert_eq!(filter_deck(&cards, "3"), Vec::<usize>::new());
    }

    #[test]
    fn text_query_is_a_case_insensitive_substring_match() {
        let cards = sample();
        assert_eq!(filter_deck(&cards, "NAN"), vec![2]);
        assert_eq!(filter_deck(&cards, "ap"), vec![0, 1]);
        assert_eq!(filter_deck(&cards, "zzz"), Vec::<usize>::new());
    }

    #[test]
    fn empty_query_restores_the_full_deck_order() {
        let cards = sample();
        assert_eq!(filter_deck(&cards, ""), vec![0, 1, 2]);
        assert_eq!(filter_deck(&cards, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let cards = sample();
        assert_eq!(filter_deck(&cards, "  12  "), vec![1]);
        assert_eq!(filter_deck(&cards, " banana "), vec![2]);
    }

    #[test]
    fn mixed_digit_and_text_query_searches_words() {
        // "1a" is not purely numeric, so it falls through to word matching
        let cards = vec![card(1, "1up"), card(2, "mushroom")];
        assert_eq!(filter_deck(&cards, "1u"), vec![0]);
    }

    #[test]
    fn empty_deck_yields_an_empty_view() {
        assert_eq!(filter_deck(&[], "anything"), Vec::<usize>::new());
        assert_eq!(filter_deck(&[], ""), Vec::<usize>::new());
    }
}
