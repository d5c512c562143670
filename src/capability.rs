//! Collaborator seams for optional third-party features.
//!
//! The engine never depends on these; callers inject an implementation (or
//! [`Unavailable`]) and surface missing features as capability-absent
//! results rather than engine errors. A generative model, an OCR backend,
//! and a document exporter are integrations, not part of the core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CapabilityError {
    /// The feature is not present in this build or installation.
    #[error("{0} support is not available in this build")]
    Unavailable(&'static str),

    /// The backing implementation was present but failed.
    #[error("capability failed: {0}")]
    Failed(String),
}

/// Optional generative-model fallback for queries the rule engine cannot
/// answer. Callers decide whether to consult it at all.
pub trait GenerativeFallback {
    fn generate(&self, prompt: &str) -> Result<String, CapabilityError>;
}

/// Optional image-to-text extraction, run before lab interpretation when
/// the user uploads a report photo.
pub trait TextExtractor {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, CapabilityError>;
}

/// Optional document export of a chat transcript (see
/// [`crate::chat::ChatHistory::transcript`]).
pub trait ReportExporter {
    fn export(&self, transcript: &str) -> Result<Vec<u8>, CapabilityError>;
}

/// The always-absent implementation of every capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl GenerativeFallback for Unavailable {
    fn generate(&self, _prompt: &str) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unavailable("generative model"))
    }
}

impl TextExtractor for Unavailable {
    fn extract_text(&self, _image_bytes: &[u8]) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unavailable("OCR"))
    }
}

impl ReportExporter for Unavailable {
    fn export(&self, _transcript: &str) -> Result<Vec<u8>, CapabilityError> {
        Err(CapabilityError::Unavailable("report export"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_capabilities_report_which_feature_is_missing() {
        let err = Unavailable.generate("prompt").unwrap_err();
        assert_eq!(err.to_string(), "generative model support is not available in this build");

        let err = Unavailable.extract_text(&[]).unwrap_err();
        assert!(err.to_string().contains("OCR"));

        let err = Unavailable.export("transcript").unwrap_err();
        assert!(err.to_string().contains("report export"));
    }

    #[test]
    fn capabilities_are_object_safe() {
        let _: &dyn GenerativeFallback = &Unavailable;
        let _: &dyn TextExtractor = &Unavailable;
        let _: &dyn ReportExporter = &Unavailable;
    }
}
