//! Lab marker interpretation: find "<marker> [:] <number>" patterns in free
//! text and classify each value against the simplified reference range.
//!
//! Only the first occurrence per marker counts. Malformed numbers next to a
//! marker name simply fail the pattern and are treated as "not found" —
//! this path has no error case.

use std::sync::LazyLock;

use regex::Regex;

use super::knowledge::LAB_MARKERS;
use super::render::capitalize;
use super::strings::Strings;
use super::types::{LabFinding, LabMarker, LabStatus};

/// One compiled pattern per marker, e.g. `(?i)glucose\s*:?\s*(\d+(?:\.\d+)?)`.
static MARKER_PATTERNS: LazyLock<Vec<(&'static LabMarker, Regex)>> = LazyLock::new(|| {
    LAB_MARKERS
        .iter()
        .map(|marker| {
            let pattern = format!(r"(?i){}\s*:?\s*(\d+(?:\.\d+)?)", marker.name);
            let regex = Regex::new(&pattern).expect("invalid lab marker pattern");
            (marker, regex)
        })
        .collect()
});

static NO_MARKERS_MESSAGE: &str = "No common lab markers identified. Please ensure the \
     report contains keywords like Hemoglobin, Glucose, or WBC.";

static LAB_DISCLAIMER: &str = "*Disclaimer: Automated analysis is not a medical \
     diagnosis. Always review lab results with your doctor.*";

/// Scan text for every known marker; first regex match per marker wins.
pub fn scan_lab_text(text: &str) -> Vec<LabFinding> {
    let mut findings = Vec::new();
    for (marker, regex) in MARKER_PATTERNS.iter() {
        let Some(caps) = regex.captures(text) else { continue };
        // The capture group is \d+(\.\d+)? so parsing cannot fail.
        let Ok(value) = caps[1].parse::<f64>() else { continue };
        findings.push(LabFinding {
            marker,
            value,
            status: classify(value, marker),
        });
    }
    findings
}

fn classify(value: f64, marker: &LabMarker) -> LabStatus {
    if value < marker.min {
        LabStatus::BelowRange
    } else if value > marker.max {
        LabStatus::AboveRange
    } else {
        LabStatus::Normal
    }
}

/// Render the found markers as a report, or the fixed "not identified"
/// message when nothing matched.
pub fn render_lab_report(findings: &[LabFinding], s: &Strings) -> String {
    if findings.is_empty() {
        return NO_MARKERS_MESSAGE.to_string();
    }

    let mut out = format!("### 🔬 {}\n\n", s.lab_interpretation);
    for f in findings {
        out.push_str(&format!(
            "- **{}**: {} {} (Normal: {} - {}) -> {}\n",
            capitalize(f.marker.name),
            fmt_value(f.value),
            f.marker.unit,
            fmt_value(f.marker.min),
            fmt_value(f.marker.max),
            f.status_label(),
        ));
    }
    out.push_str("\n---\n");
    out.push_str(LAB_DISCLAIMER);
    out
}

/// Whole values print without a trailing ".0" (140, not 140.0).
fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}
