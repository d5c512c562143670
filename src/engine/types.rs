use serde::{Deserialize, Serialize};

/// Language a response is rendered in.
///
/// Detection is heuristic (see `language::detect_language`); matching logic
/// always runs against the English topic keys regardless of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Hinglish,
}

impl Language {
    /// Short code used in logs and by callers ("en" / "hi" / "hinglish").
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Hinglish => "hinglish",
        }
    }

    /// Parse a language code. Unknown codes return `None`; callers fall
    /// back to auto-detection.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "hinglish" => Some(Language::Hinglish),
            _ => None,
        }
    }
}

/// Structured facts for one health topic.
///
/// `explanation` and `consult_doctor_if` are always present and non-empty;
/// the renderer relies on that. Every other field may be an empty slice,
/// in which case its section is simply omitted from the rendered response.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub explanation: &'static str,
    pub common_causes: &'static [&'static str],
    pub self_care: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub common_otc_relief: &'static [&'static str],
    pub common_profiles: &'static [&'static str],
    pub tests_to_get: &'static [&'static str],
    pub actions_to_take: &'static [&'static str],
    pub consult_doctor_if: &'static [&'static str],
}

/// A clinical measurement with a simplified reference range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabMarker {
    /// Lowercase name matched against report text.
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    /// Patient-facing meaning of a below-range value.
    pub low_label: &'static str,
    /// Patient-facing meaning of an above-range value.
    pub high_label: &'static str,
}

/// Where a found lab value sits relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabStatus {
    Normal,
    BelowRange,
    AboveRange,
}

/// One marker found in free lab-report text, classified against its range.
#[derive(Debug, Clone, Serialize)]
pub struct LabFinding {
    pub marker: &'static LabMarker,
    pub value: f64,
    pub status: LabStatus,
}

impl LabFinding {
    /// Display label for the status: "Normal" or the marker-specific
    /// out-of-range meaning.
    pub fn status_label(&self) -> &'static str {
        match self.status {
            LabStatus::Normal => "Normal",
            LabStatus::BelowRange => self.marker.low_label,
            LabStatus::AboveRange => self.marker.high_label,
        }
    }
}

/// Coarse intent bucket for queries that matched no topic.
///
/// This drives template selection only; there is no knowledge-base lookup
/// on the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackIntent {
    /// "how" / "why" / "what" / "tell me" — the user wants something explained.
    Explanation,
    /// "help" / "do" / "action" — the user wants to be told what to do.
    Advice,
    General,
}
