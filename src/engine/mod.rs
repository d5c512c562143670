//! The response engine: classify a free-text health query and assemble a
//! templated answer in the detected language.
//!
//! Control flow is linear and synchronous: detect language → emergency
//! check → topic match (zero/one/many) → render. Every table the engine
//! reads is process-lifetime static data, so the engine itself is stateless
//! and freely shareable; chat history belongs to the caller.

pub mod knowledge;
pub mod lab;
pub mod language;
pub mod matcher;
pub mod quick;
pub mod render;
pub mod strings;
pub mod types;

use strings::Strings;

pub use types::{FallbackIntent, KnowledgeEntry, LabFinding, LabMarker, LabStatus, Language};

/// Stateless classify-and-render engine over the static knowledge tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseEngine;

impl ResponseEngine {
    pub fn new() -> Self {
        ResponseEngine
    }

    /// Main pipeline: returns the rendered response for a user query.
    ///
    /// `lang_override` skips auto-detection when the caller already knows
    /// the user's language. Output is a pure function of the inputs — the
    /// same query always produces byte-identical text.
    pub fn process_query(&self, query: &str, lang_override: Option<Language>) -> String {
        let lang = lang_override.unwrap_or_else(|| language::detect_language(query));
        let s = Strings::for_language(lang);
        let query_lower = query.to_lowercase();

        if let Some(keyword) = matcher::check_emergency(&query_lower) {
            tracing::warn!(keyword, lang = lang.as_code(), "emergency keyword matched");
            return render::render_emergency(keyword, s);
        }

        let topics = matcher::match_topics(&query_lower);
        tracing::debug!(?topics, lang = lang.as_code(), "topic match");
        match topics.as_slice() {
            [topic] => {
                // match_topics only returns table keys.
                let entry = knowledge::entry(topic).expect("matched topic must exist");
                render::render_detail(topic, entry, s)
            }
            [_, ..] => render::render_multi(&topics, s),
            [] if matcher::is_greeting(&query_lower) => render::render_greeting(s),
            [] => {
                let intent = matcher::classify_intent(&query_lower);
                render::render_fallback(query, intent, s)
            }
        }
    }

    /// Secondary pipeline: interpret lab-report text against the marker
    /// reference table. `lang` defaults to English — lab reports are
    /// usually pasted rather than typed, so auto-detection is not applied.
    pub fn interpret_lab_text(&self, text: &str, lang: Option<Language>) -> String {
        let s = Strings::for_language(lang.unwrap_or(Language::En));
        let findings = lab::scan_lab_text(text);
        tracing::debug!(found = findings.len(), "lab marker scan");
        lab::render_lab_report(&findings, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Emergency precedence ────────────────────────────────

    #[test]
    fn emergency_preempts_topic_match() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("I have chest pain and a headache", None);
        assert!(out.contains("🚨"));
        assert!(out.contains("**chest pain**"));
        // The headache topic template must not leak through.
        assert!(!out.contains("Understanding Headache"));
        assert!(!out.contains("Common Causes"));
    }

    #[test]
    fn emergency_preempts_greeting() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("hello, my father is unconscious", None);
        assert!(out.contains("**unconscious**"));
        assert!(!out.contains("What's on your mind today?"));
    }

    // ── Single topic ────────────────────────────────────────

    #[test]
    fn single_topic_renders_detail() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("What is a headache?", None);
        assert!(out.contains("Understanding Headache"));
        assert!(out.contains("A headache is pain or discomfort"));
        assert!(out.contains("When to Consult a Doctor"));
        assert!(!out.contains("Common Diagnostic Profiles"));
    }

    #[test]
    fn blood_tests_query_renders_profiles() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("what are common blood tests", None);
        assert!(out.contains("Common Diagnostic Profiles"));
        assert!(out.contains("**Lipid Profile**"));
        assert!(out.contains("Liver Function Test"));
    }

    // ── Multi-topic ─────────────────────────────────────────

    #[test]
    fn multi_topic_summary_for_cooccurring_symptoms() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("I have anemia and blood loss", None);
        assert!(out.contains("Anemia"));
        assert!(out.contains("Blood loss"));
        assert!(out.contains("**consult a healthcare professional**"));
        // Summary view: no per-topic self-care detail.
        assert!(!out.contains("Self-Care & Relief"));
    }

    #[test]
    fn blood_loss_alone_resolves_to_blood_loss() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("how bad is blood loss", None);
        assert!(out.contains("Understanding Blood loss"));
        assert!(!out.contains("Potential Related Conditions"));
    }

    // ── Greeting and fallback ───────────────────────────────

    #[test]
    fn greeting_without_topic() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("Hello", None);
        assert!(out.contains("Health Assistant"));
    }

    #[test]
    fn fallback_for_unknown_topic() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("my knee is sore", None);
        assert!(out.contains("**\"my knee is sore\"**"));
        assert!(out.contains("**My Thought Process:**"));
    }

    #[test]
    fn empty_input_falls_back() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("", None);
        assert!(out.contains("**My Thought Process:**"));
    }

    // ── Language handling ───────────────────────────────────

    #[test]
    fn devanagari_query_answers_in_hindi() {
        let engine = ResponseEngine::new();
        // Contains the topic key in English plus Devanagari context.
        let out = engine.process_query("मुझे fever है", None);
        assert!(out.contains("डॉक्टर से कब सलाह लें"));
    }

    #[test]
    fn hinglish_query_answers_in_hinglish() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("fever hai kya karu", None);
        assert!(out.contains("Doctor se kab consult karein"));
    }

    #[test]
    fn language_override_beats_detection() {
        let engine = ResponseEngine::new();
        let out = engine.process_query("what is fever", Some(Language::Hi));
        assert!(out.contains("डॉक्टर से कब सलाह लें"));
    }

    // ── Determinism ─────────────────────────────────────────

    #[test]
    fn process_query_is_idempotent() {
        let engine = ResponseEngine::new();
        for query in [
            "I have chest pain and a headache",
            "What is a headache?",
            "I have anemia and blood loss",
            "Hello",
            "my knee is sore",
        ] {
            assert_eq!(
                engine.process_query(query, None),
                engine.process_query(query, None),
                "non-deterministic output for {query:?}"
            );
        }
    }

    // ── Lab pipeline ────────────────────────────────────────

    #[test]
    fn lab_text_interprets_both_markers() {
        let engine = ResponseEngine::new();
        let out = engine.interpret_lab_text("Hemoglobin: 10 Glucose 140", None);
        assert!(out.contains("Potential Anemia"));
        assert!(out.contains("Potential Diabetes/Hyperglycemia"));
    }

    #[test]
    fn lab_text_without_markers() {
        let engine = ResponseEngine::new();
        let out = engine.interpret_lab_text("no markers here", None);
        assert!(out.contains("No common lab markers identified"));
    }
}
