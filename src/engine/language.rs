//! Lightweight language detection: English, Hindi, or romanized "Hinglish".
//!
//! No external language-ID dependency — a Devanagari script check followed
//! by a fixed romanized-Hindi vocabulary lookup. The heuristic does not try
//! to be linguistically sound; it only has to be deterministic against the
//! vocabulary below.

use super::types::Language;

/// Common Hindi function words and chat shorthand written in Roman script.
/// Matched against whole tokens only, after stripping `?` `.` `,`.
///
/// Deliberately loose: "doctor" and "medicine" are included because in this
/// corpus they overwhelmingly occur in Hinglish phrasings ("doctor se kab
/// milna chahiye").
static HINGLISH_VOCABULARY: &[&str] = &[
    "hai", "kya", "ka", "ki", "ko", "mein", "bhi", "toh", "kar", "hoga",
    "sakta", "nahi", "pe", "mil", "de", "do", "aap", "hu", "tha", "rahe",
    "raha", "chahiye", "karna", "ke", "ne", "liye", "bataye", "batana",
    "ho", "rha", "rhi", "thi", "rhe", "karne", "wali", "wala",
    "sir", "madam", "doktor", "doctor", "medicine", "dawai", "dawae", "btaye",
];

/// Detect the language of a user query.
///
/// 1. Any Devanagari character → `Hi`, regardless of other content.
/// 2. Any token from [`HINGLISH_VOCABULARY`] → `Hinglish`.
/// 3. Otherwise `En` (including empty / whitespace-only input).
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(is_devanagari) {
        return Language::Hi;
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '?' | '.' | ','))
        .collect();
    if cleaned
        .split_whitespace()
        .any(|token| HINGLISH_VOCABULARY.contains(&token))
    {
        return Language::Hinglish;
    }

    Language::En
}

/// Devanagari Unicode block: U+0900 through U+097F.
fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Devanagari ──────────────────────────────────────────

    #[test]
    fn devanagari_text_is_hindi() {
        assert_eq!(detect_language("मुझे सिरदर्द है"), Language::Hi);
    }

    #[test]
    fn single_devanagari_char_wins_over_everything() {
        // Mixed script: one Devanagari character outranks English words
        // and Hinglish vocabulary alike.
        assert_eq!(detect_language("what is fever बुखार kya hai"), Language::Hi);
    }

    // ── Hinglish vocabulary ─────────────────────────────────

    #[test]
    fn hinglish_sentence_detected() {
        assert_eq!(detect_language("mujhe bukhar hai kya karna chahiye"), Language::Hinglish);
    }

    #[test]
    fn punctuation_stripped_before_token_match() {
        assert_eq!(detect_language("Bukhar hai?"), Language::Hinglish);
        assert_eq!(detect_language("Dawai chahiye, please."), Language::Hinglish);
    }

    #[test]
    fn vocabulary_matches_whole_tokens_only() {
        // "khaki" contains "ka" but is not the token "ka".
        assert_eq!(detect_language("my khaki trousers"), Language::En);
        // "dog" is not "do".
        assert_eq!(detect_language("my dog is sick"), Language::En);
    }

    #[test]
    fn single_vocabulary_token_is_enough() {
        assert_eq!(detect_language("fever medicine"), Language::Hinglish);
    }

    // ── English default ─────────────────────────────────────

    #[test]
    fn plain_english_is_english() {
        assert_eq!(detect_language("What is a headache?"), Language::En);
        assert_eq!(detect_language("I have chest pain and a headache"), Language::En);
    }

    #[test]
    fn empty_and_whitespace_default_to_english() {
        assert_eq!(detect_language(""), Language::En);
        assert_eq!(detect_language("   \t  "), Language::En);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detect_language("KYA HAI"), Language::Hinglish);
    }
}
