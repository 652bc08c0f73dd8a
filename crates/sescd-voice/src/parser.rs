use sescd_core::Score;

/// Spoken forms of 0–3, scanned in this order.
///
/// Digits come first, followed by the Japanese readings. Substring matching
/// walks this table front to back, so the order decides which value wins
/// when a transcript contains more than one token.
pub const NUMBER_TOKENS: &[(&str, u8)] = &[
    ("0", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("ゼロ", 0),
    ("零", 0),
    ("れい", 0),
    ("いち", 1),
    ("一", 1),
    ("イチ", 1),
    ("に", 2),
    ("二", 2),
    ("ニ", 2),
    ("さん", 3),
    ("三", 3),
    ("サン", 3),
];

/// Interpret a final transcript as a score.
///
/// Tries, in order: an exact token match on the trimmed text, the first
/// table token contained in the text, and the first bare digit 0–3.
/// Returns `None` when nothing matches.
pub fn parse_score(transcript: &str) -> Option<Score> {
    let clean = transcript.trim();

    let value = exact_token(clean)
        .or_else(|| contained_token(clean))
        .or_else(|| first_digit(clean))?;

    Score::new(i64::from(value)).ok()
}

fn exact_token(text: &str) -> Option<u8> {
    NUMBER_TOKENS
        .iter()
        .find(|(token, _)| *token == text)
        .map(|&(_, value)| value)
}

fn contained_token(text: &str) -> Option<u8> {
    NUMBER_TOKENS
        .iter()
        .find(|(token, _)| text.contains(token))
        .map(|&(_, value)| value)
}

fn first_digit(text: &str) -> Option<u8> {
    text.chars()
        .find(|c| matches!(c, '0'..='3'))
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Option<u8> {
        parse_score(text).map(Score::value)
    }

    #[test]
    fn exact_tokens() {
        assert_eq!(parsed("さん"), Some(3));
        assert_eq!(parsed("ゼロ"), Some(0));
        assert_eq!(parsed("一"), Some(1));
        assert_eq!(parsed("ニ"), Some(2));
        assert_eq!(parsed("2"), Some(2));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parsed("  いち \n"), Some(1));
    }

    #[test]
    fn token_inside_sentence() {
        assert_eq!(parsed("スコアはサンです"), Some(3));
        assert_eq!(parsed("れいてん"), Some(0));
    }

    #[test]
    fn table_order_breaks_ties_not_transcript_position() {
        // さん appears first in the text, but に comes first in the table.
        assert_eq!(parsed("さんにん"), Some(2));
        // Digits are scanned before any reading.
        assert_eq!(parsed("さん 2"), Some(2));
    }

    #[test]
    fn no_match_is_unrecognized() {
        assert_eq!(parsed("わかりません"), None);
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("   "), None);
        assert_eq!(parsed("よん"), None);
    }

    #[test]
    fn digits_above_three_are_not_scores() {
        assert_eq!(parsed("4"), None);
        assert_eq!(parsed("9点"), None);
    }

    #[test]
    fn digit_inside_larger_number_still_matches() {
        assert_eq!(parsed("42"), Some(2));
    }

    // Known limitation: short readings match inside unrelated words. "にかい"
    // ("twice") is read as 2. Kept as-is for compatibility with existing
    // dictation behaviour.
    #[test]
    fn known_limitation_short_reading_matches_inside_words() {
        assert_eq!(parsed("にかい"), Some(2));
        assert_eq!(parsed("きにしない"), Some(2));
    }
}
