//! Keyword dispatch: emergency short-circuit, topic matching, greeting
//! check, and the fallback intent buckets.
//!
//! Matching is literal substring search over fixed key lists; the caller
//! passes an already-lowercased query.

use super::knowledge::{EMERGENCY_KEYWORDS, GREETING_WORDS, KNOWLEDGE_BASE};
use super::types::FallbackIntent;

/// Scan the ordered emergency list; the first phrase found as a substring
/// wins. A hit preempts all topic, greeting, and fallback logic.
pub fn check_emergency(query_lower: &str) -> Option<&'static str> {
    EMERGENCY_KEYWORDS
        .iter()
        .find(|kw| query_lower.contains(*kw))
        .copied()
}

/// Collect every topic key occurring as a substring of the query, in
/// knowledge-base table order (not query order).
///
/// When one matched key is a proper substring of another matched key, only
/// the longer, more specific key is kept. With the current table no key
/// contains another, but the guarantee holds as topics are added — "blood"
/// could never shadow "blood loss".
pub fn match_topics(query_lower: &str) -> Vec<&'static str> {
    let matched: Vec<&'static str> = KNOWLEDGE_BASE
        .iter()
        .filter(|(key, _)| query_lower.contains(key))
        .map(|(key, _)| *key)
        .collect();
    drop_shadowed(matched)
}

/// Remove matched keys that are proper substrings of other matched keys,
/// preserving order.
fn drop_shadowed(matched: Vec<&'static str>) -> Vec<&'static str> {
    matched
        .iter()
        .filter(|key| {
            !matched
                .iter()
                .any(|other| other != *key && other.contains(**key))
        })
        .copied()
        .collect()
}

/// Does the query contain a greeting word? Only consulted once emergency
/// and topic matching both came up empty.
pub fn is_greeting(query_lower: &str) -> bool {
    GREETING_WORDS.iter().any(|g| query_lower.contains(g))
}

/// Bucket a no-match query by coarse intent. The advice check runs second
/// and overrides an explanation hit, matching long-standing behavior.
pub fn classify_intent(query_lower: &str) -> FallbackIntent {
    let mut intent = FallbackIntent::General;
    if ["how", "why", "what", "tell me"]
        .iter()
        .any(|w| query_lower.contains(w))
    {
        intent = FallbackIntent::Explanation;
    }
    if ["help", "do", "action"].iter().any(|w| query_lower.contains(w)) {
        intent = FallbackIntent::Advice;
    }
    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Emergency scan ──────────────────────────────────────

    #[test]
    fn first_emergency_phrase_in_list_order_wins() {
        // Query mentions both "stroke" and "chest pain"; "chest pain" is
        // earlier in the list.
        let q = "after the stroke he had chest pain";
        assert_eq!(check_emergency(q), Some("chest pain"));
    }

    #[test]
    fn emergency_substring_inside_sentence() {
        assert_eq!(check_emergency("i can't breathe properly"), Some("can't breathe"));
        assert_eq!(
            check_emergency("this is the worst headache of my life"),
            Some("worst headache")
        );
    }

    #[test]
    fn no_emergency_in_benign_query() {
        assert_eq!(check_emergency("what is a headache"), None);
        assert_eq!(check_emergency(""), None);
    }

    // ── Topic matching ──────────────────────────────────────

    #[test]
    fn single_topic_match() {
        assert_eq!(match_topics("what is a headache"), vec!["headache"]);
    }

    #[test]
    fn multi_topic_match_preserves_table_order() {
        // Query order is "blood loss ... fatigue"; table order is
        // fatigue before blood loss.
        let topics = match_topics("blood loss is causing my fatigue");
        assert_eq!(topics, vec!["fatigue", "blood loss"]);
    }

    #[test]
    fn blood_loss_does_not_drag_in_blood_tests() {
        assert_eq!(match_topics("i have blood loss"), vec!["blood loss"]);
    }

    #[test]
    fn blood_loss_and_blood_tests_both_match_when_both_present() {
        let topics = match_topics("do blood tests show blood loss");
        assert_eq!(topics, vec!["blood loss", "blood tests"]);
    }

    #[test]
    fn no_topic_match_yields_empty() {
        assert!(match_topics("my knee hurts").is_empty());
    }

    #[test]
    fn shadowed_shorter_key_is_dropped() {
        // Synthetic overlap: a general key that is a proper substring of a
        // more specific one resolves to the specific key only.
        let deduped = drop_shadowed(vec!["blood", "blood loss"]);
        assert_eq!(deduped, vec!["blood loss"]);
    }

    #[test]
    fn unrelated_keys_are_not_dropped() {
        let deduped = drop_shadowed(vec!["anemia", "blood loss"]);
        assert_eq!(deduped, vec!["anemia", "blood loss"]);
    }

    // ── Greeting ────────────────────────────────────────────

    #[test]
    fn greeting_words_detected() {
        assert!(is_greeting("hello"));
        assert!(is_greeting("hey there"));
        assert!(is_greeting("hi"));
    }

    #[test]
    fn non_greeting_query() {
        assert!(!is_greeting("my knee hurts"));
    }

    // ── Intent buckets ──────────────────────────────────────

    #[test]
    fn explanation_intent() {
        assert_eq!(classify_intent("why is my knee sore"), FallbackIntent::Explanation);
        assert_eq!(classify_intent("tell me about my knee"), FallbackIntent::Explanation);
    }

    #[test]
    fn advice_intent() {
        assert_eq!(classify_intent("please help with my knee"), FallbackIntent::Advice);
    }

    #[test]
    fn advice_overrides_explanation() {
        assert_eq!(
            classify_intent("what can i do about my knee"),
            FallbackIntent::Advice
        );
    }

    #[test]
    fn general_intent() {
        assert_eq!(classify_intent("my knee is sore"), FallbackIntent::General);
    }
}
