//! Deterministic template rendering: matched knowledge entries (or none)
//! become structured markdown-ish prose in the detected language.
//!
//! List items are emitted verbatim — inline `**bold**` markup in the data
//! passes through untouched; the renderer never reinterprets it.

use super::knowledge;
use super::strings::Strings;
use super::types::{FallbackIntent, KnowledgeEntry};

/// Uppercase the first character of a topic phrase ("blood tests" →
/// "Blood tests").
pub fn capitalize(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn push_bullets(out: &mut String, items: &[&str]) {
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out.push('\n');
}

/// Full single-topic response: fixed section ordering, each optional
/// section included only when its data field is non-empty.
pub fn render_detail(topic: &str, entry: &KnowledgeEntry, s: &Strings) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {} {}\n\n", s.understanding, capitalize(topic)));
    out.push_str(&format!("**{}:** {}\n\n", s.what_it_is, entry.explanation));

    if !entry.common_causes.is_empty() {
        out.push_str(&format!("### {}\n", s.common_causes));
        push_bullets(&mut out, entry.common_causes);
    }
    if !entry.self_care.is_empty() {
        out.push_str(&format!("### {}\n", s.self_care));
        push_bullets(&mut out, entry.self_care);
    }
    if !entry.tips.is_empty() {
        out.push_str(&format!("### {}\n", s.tips));
        push_bullets(&mut out, entry.tips);
    }
    if !entry.common_otc_relief.is_empty() {
        out.push_str(&format!("### 💊 {}\n", s.otc_relief));
        out.push_str(s.otc_caution);
        out.push_str("\n\n");
        push_bullets(&mut out, entry.common_otc_relief);
    }
    if !entry.common_profiles.is_empty() {
        out.push_str(&format!("### 📊 {}\n", s.diagnostic_profiles));
        push_bullets(&mut out, entry.common_profiles);
    }
    if !entry.tests_to_get.is_empty() {
        out.push_str(&format!("### 🧪 {}\n{}\n", s.recommended_tests, s.tests_desc));
        push_bullets(&mut out, entry.tests_to_get);
    }
    if !entry.actions_to_take.is_empty() {
        out.push_str(&format!("### ✅ {}\n", s.actions));
        push_bullets(&mut out, entry.actions_to_take);
    }

    out.push_str(&format!("### 🩺 {}\n{}\n", s.consult_doctor, s.consult_desc));
    for condition in entry.consult_doctor_if {
        out.push_str("- ");
        out.push_str(condition);
        out.push('\n');
    }

    out.push_str(&format!("\n---\n{}", s.disclaimer));
    out
}

/// Multi-topic summary: explanations only, no per-topic detail lists —
/// when several symptoms co-occur the response pushes toward professional
/// consultation instead of drowning the user in detail.
pub fn render_multi(topics: &[&str], s: &Strings) -> String {
    let names: Vec<String> = topics.iter().map(|t| capitalize(t)).collect();

    let mut out = String::from("## Potential Related Conditions\n\n");
    out.push_str(&format!(
        "Based on your symptoms, I found several related health topics: **{}**.\n\n",
        names.join(", ")
    ));
    out.push_str("Here is a quick overview of how these may be related:\n\n");

    for topic in topics {
        // Matched topics always come from the table, but stay total anyway.
        if let Some(entry) = knowledge::entry(topic) {
            out.push_str(&format!("### {}\n{}\n\n", capitalize(topic), entry.explanation));
        }
    }

    out.push_str("---\n### 🩺 Next Steps\n");
    out.push_str(
        "Since you are experiencing multiple symptoms, it is highly recommended to \
         **consult a healthcare professional** for a proper diagnosis. They can \
         determine if these are linked.\n\n",
    );
    out.push_str(s.disclaimer);
    out
}

/// Emergency response: returned unconditionally when an emergency phrase
/// matched, whatever else the query contains.
pub fn render_emergency(keyword: &str, s: &Strings) -> String {
    format!(
        "### 🚨 {}\n\n\
         You mentioned **{}**, which can be a sign of a life-threatening emergency.\n\n\
         **{}**\n\
         1. **Call emergency services (e.g., 911 or 108)** right now.\n\
         2. Do not attempt to drive yourself to the hospital.\n\
         3. Stay on the line with the emergency operator and follow their instructions.\n\n\
         {}",
        s.emergency_title, keyword, s.emergency_steps, s.emergency_disclaimer
    )
}

pub fn render_greeting(s: &Strings) -> String {
    s.greeting.to_string()
}

/// Fallback for queries that matched nothing: template selection on the
/// intent bucket, echoing the original query. No knowledge-base lookup.
pub fn render_fallback(query: &str, intent: FallbackIntent, s: &Strings) -> String {
    let middle = match intent {
        FallbackIntent::Explanation => {
            "I am analyzing your request to provide a clear explanation. While I search \
             my medical database, keep in mind that I am a rule-based assistant optimized \
             for specific health profiles."
        }
        FallbackIntent::Advice => {
            "I understand you are looking for advice. As your Health Assistant, I \
             prioritize safety above all else. Here is how you can proceed:"
        }
        FallbackIntent::General => s.fallback_general,
    };

    format!(
        "{} **\"{}\"**. {}\n\n\
         **My Thought Process:**\n\
         1. Search recognized medical conditions (Headache, Fever, Diabetes, etc.) -> **No exact match.**\n\
         2. Provide general wellness guidance and safety indicators.\n\n\
         **General Guidance:**\n\
         - **Observe**: Notice any new symptoms or changes in existing ones.\n\
         - **Hydrate**: Drink enough water for better recovery.\n\
         - **Rest**: Give your body time to heal.\n\n\
         **When to seek immediate help:**\n\
         If you have a high fever, sudden intense pain, or trouble breathing, please go \
         to the nearest emergency center (A&E).\n\n\
         *Would you like to ask about a specific condition like 'Headache' or 'Diabetes' instead?*",
        s.fallback_intro, query, middle
    )
}
