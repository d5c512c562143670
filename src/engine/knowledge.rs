//! Static knowledge tables: topic entries, emergency keywords, greeting
//! words, and the simplified lab marker reference.
//!
//! All tables are process-lifetime constants, never mutated at runtime, so
//! the engine is freely shareable across threads. Topic keys are lowercase,
//! space-separated phrases matched as raw substrings of the query; table
//! order is the canonical iteration order for matching.

use super::types::{KnowledgeEntry, LabMarker};

const NONE: &[&str] = &[];

// ── Knowledge base ──────────────────────────────────────────

pub static KNOWLEDGE_BASE: &[(&str, KnowledgeEntry)] = &[
    (
        "headache",
        KnowledgeEntry {
            explanation: "A headache is pain or discomfort in the head or face area. They can range from minor annoyances to severe pain.",
            common_causes: &[
                "Stress and tension",
                "Dehydration (not drinking enough water)",
                "Eye strain (especially from screens)",
                "Lack of sleep",
                "Caffeine withdrawal",
            ],
            self_care: &[
                "Rest in a quiet, dark room.",
                "Apply a cool cloth to your forehead.",
                "Drink plenty of water.",
                "Gentle stretching or massage of neck muscles.",
            ],
            tips: NONE,
            common_otc_relief: &[
                "**Paracetamol (Acetaminophen)**: Commonly used for pain relief and fever.",
                "**Ibuprofen**: Helps reduce inflammation and pain.",
                "**Aspirin**: Sometimes used for adults (avoid in children due to Reye's syndrome risk).",
            ],
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "The headache is sudden and the 'worst of your life'.",
                "It follows a head injury.",
                "It is accompanied by fever, stiff neck, or confusion.",
                "You experience vision changes or numbness.",
                "Headaches are becoming more frequent or severe.",
            ],
        },
    ),
    (
        "fever",
        KnowledgeEntry {
            explanation: "A fever is a temporary increase in your body temperature, often due to an illness. It's a sign that your immune system is fighting something.",
            common_causes: &[
                "Viral infections (like cold or flu)",
                "Bacterial infections",
                "Heat exhaustion",
                "Certain inflammatory conditions",
            ],
            self_care: &[
                "Drink plenty of fluids (water, broth, juice).",
                "Get lots of rest.",
                "Keep the room temperature cool.",
                "Wear lightweight clothing.",
            ],
            tips: NONE,
            common_otc_relief: &[
                "**Paracetamol (Acetaminophen)**: Effective for lowering body temperature.",
                "**Ibuprofen**: Can help reduce fever and associated body aches.",
            ],
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "Temperature is 103°F (39.4°C) or higher.",
                "Fever lasts more than three days.",
                "Accompanied by severe headache, rash, or stiff neck.",
                "You have difficulty breathing or chest pain.",
            ],
        },
    ),
    (
        "abdominal pain",
        KnowledgeEntry {
            explanation: "Abdominal pain (stomach ache) is pain felt anywhere between your chest and groin.",
            common_causes: &[
                "Indigestion or gas",
                "Muscle strain",
                "Stomach virus (gastritis)",
                "Food intolerance",
            ],
            self_care: &[
                "Sip water or clear fluids.",
                "Avoid solid foods for a few hours.",
                "Rest in a comfortable position.",
                "Apply a heating pad (low setting) to the area.",
            ],
            tips: NONE,
            common_otc_relief: NONE,
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "Pain is severe, sudden, or sharp.",
                "Your abdomen is tender to the touch.",
                "Pain radiates to your chest, neck, or shoulder.",
                "You have blood in your stool or are vomiting blood.",
                "You have persistent nausea or fever.",
            ],
        },
    ),
    (
        "cough",
        KnowledgeEntry {
            explanation: "A cough is your body's way of clearing irritants and mucus from your airways.",
            common_causes: &[
                "Common cold or flu",
                "Allergies or asthma",
                "Post-nasal drip",
                "Environmental irritants (smoke, dust)",
            ],
            self_care: &[
                "Stay hydrated to thin mucus.",
                "Use a humidifier or take a steamy shower.",
                "Try a spoonful of honey (for adults and children over 1).",
                "Gargle with warm salt water.",
            ],
            tips: NONE,
            common_otc_relief: &[
                "**Cough Suppressants (Antitussives)**: For dry, hacking coughs.",
                "**Expectorants (Guaifenesin)**: To help thin and clear mucus from the chest.",
                "**Decongestants**: If accompanied by a stuffy nose.",
            ],
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "Cough lasts longer than 3 weeks.",
                "You are coughing up blood.",
                "You have shortness of breath or wheezing.",
                "Accompanied by high fever or chest pain.",
            ],
        },
    ),
    (
        "diabetes",
        KnowledgeEntry {
            explanation: "Diabetes is a condition where your blood sugar (glucose) levels are too high. Glucose is your main source of energy, coming from the food you eat.",
            common_causes: NONE,
            self_care: NONE,
            tips: &[
                "Follow a balanced diet rich in vegetables, lean protein, and whole grains.",
                "Monitor your blood sugar levels as recommended by your doctor.",
                "Stay physically active with regular exercise.",
                "Take all prescribed medications exactly as directed.",
                "Check your feet daily for any cuts or sores.",
            ],
            common_otc_relief: NONE,
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "You experience extreme thirst or frequent urination.",
                "You have blurred vision that doesn't go away.",
                "You feel unusually tired or weak.",
                "Cuts or bruises are slow to heal.",
            ],
        },
    ),
    (
        "hypertension",
        KnowledgeEntry {
            explanation: "Hypertension (high blood pressure) means the force of blood against your artery walls is too high, which can damage your heart over time.",
            common_causes: NONE,
            self_care: NONE,
            tips: &[
                "Reduce salt (sodium) in your diet.",
                "Maintain a healthy weight.",
                "Exercise regularly.",
                "Limit alcohol and quit smoking.",
                "Manage stress through relaxation techniques.",
            ],
            common_otc_relief: NONE,
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "You have severe headaches or nosebleeds.",
                "You feel dizzy or have blurred vision.",
                "You experience chest pain or shortness of breath.",
                "Your home blood pressure readings are consistently high.",
            ],
        },
    ),
    (
        "fatigue",
        KnowledgeEntry {
            explanation: "Fatigue is a constant feeling of tiredness or lack of energy that doesn't go away with rest. It can be physical, mental, or both.",
            common_causes: &[
                "Anemia (low blood count)",
                "Sleep disorders (like apnea)",
                "Stress, anxiety, or depression",
                "Thyroid problems",
                "Poor nutrition or dehydration",
            ],
            self_care: &[
                "Maintain a regular sleep schedule.",
                "Stay hydrated and eat balanced meals.",
                "Engage in light physical activity.",
                "Practice stress-reduction techniques.",
            ],
            tips: NONE,
            common_otc_relief: NONE,
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: NONE,
            consult_doctor_if: &[
                "Fatigue is severe and lasts more than two weeks.",
                "Accompanied by unexplained weight loss.",
                "Accompanied by low mood or loss of interest in activities.",
                "You have difficulty performing daily tasks.",
            ],
        },
    ),
    (
        "anemia",
        KnowledgeEntry {
            explanation: "Anemia happens when your blood doesn't have enough healthy red blood cells or hemoglobin to carry oxygen to your tissues.",
            common_causes: NONE,
            self_care: &[
                "Eat iron-rich foods (lean meat, leafy greens, beans).",
                "Take vitamin supplements if recommended by a doctor.",
                "Rest when you feel tired.",
            ],
            tips: NONE,
            common_otc_relief: NONE,
            common_profiles: NONE,
            tests_to_get: &[
                "**Complete Blood Count (CBC)**: This is the primary test to check your red blood cell, white blood cell, and platelet levels.",
                "**Iron Tests**: To check if your iron levels are low.",
                "**Vitamin B12 and Folate tests**: To check for nutritional deficiencies.",
            ],
            actions_to_take: NONE,
            consult_doctor_if: &[
                "You feel unusually weak or dizzy.",
                "Your skin looks pale or yellowish.",
                "You have a fast or irregular heartbeat.",
                "You experience chest pain or cold hands and feet.",
            ],
        },
    ),
    (
        "blood loss",
        KnowledgeEntry {
            explanation: "Blood loss (hemorrhage) can be internal or external and can lead to symptoms like dizziness, weakness, and fatigue.",
            common_causes: NONE,
            self_care: NONE,
            tips: NONE,
            common_otc_relief: NONE,
            common_profiles: NONE,
            tests_to_get: NONE,
            actions_to_take: &[
                "If bleeding is external, apply firm, direct pressure to the wound.",
                "If you suspect internal bleeding due to an injury, seek medical attention immediately.",
                "A **Complete Blood Count (CBC)** test is used to measure the impact of blood loss on your body.",
            ],
            consult_doctor_if: &[
                "Bleeding is heavy or won't stop with pressure.",
                "You feel lightheaded or faint.",
                "You have blood in your stool or vomit.",
                "You have deep wounds or suspected internal injuries.",
            ],
        },
    ),
    (
        "blood tests",
        KnowledgeEntry {
            explanation: "Blood tests involve taking a sample of your blood to assess your overall health and detect specific conditions.",
            common_causes: NONE,
            self_care: NONE,
            tips: NONE,
            common_otc_relief: NONE,
            common_profiles: &[
                "**Complete Blood Count (CBC)**: Measures red/white cells, hemoglobin, and platelets. Good for checking for fatigue, infection, and anemia.",
                "**Lipid Profile**: Checks cholesterol levels (LDL, HDL, triglycerides).",
                "**Kidney Function Test (KFT)**: Checks levels of urea and creatinine.",
                "**Liver Function Test (LFT)**: Measures enzymes and proteins related to liver health.",
                "**Blood Sugar Test**: Checks for glucose levels (Diabetes monitoring).",
            ],
            tests_to_get: &[
                "Basic health screening (Annual physical)",
                "Diagnostic tests based on specific symptoms (like fatigue or pain)",
                "Monitoring chronic conditions",
            ],
            actions_to_take: NONE,
            consult_doctor_if: &[
                "You receive results outside the 'normal' range.",
                "You have persistent symptoms despite normal results.",
                "You need help interpreting complex lab reports.",
            ],
        },
    ),
];

/// Look up one topic entry by its exact key.
pub fn entry(topic: &str) -> Option<&'static KnowledgeEntry> {
    KNOWLEDGE_BASE
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|(_, entry)| entry)
}

// ── Emergency keywords ──────────────────────────────────────

/// Checked before any topic matching; first phrase found as a substring
/// wins and preempts everything else.
pub static EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "can't breathe",
    "shortness of breath",
    "stroke",
    "unconscious",
    "heavy bleeding",
    "seizure",
    "poison",
    "worst headache",
];

/// Greeting words, matched as substrings after emergency and topic checks.
pub static GREETING_WORDS: &[&str] = &["hello", "hi", "hey"];

// ── Lab marker reference (simplified) ───────────────────────

pub static LAB_MARKERS: &[LabMarker] = &[
    LabMarker {
        name: "hemoglobin",
        min: 13.5,
        max: 17.5,
        unit: "g/dL",
        low_label: "Potential Anemia",
        high_label: "Polycythemia",
    },
    LabMarker {
        name: "glucose",
        min: 70.0,
        max: 100.0,
        unit: "mg/dL",
        low_label: "Hypoglycemia",
        high_label: "Potential Diabetes/Hyperglycemia",
    },
    LabMarker {
        name: "wbc",
        min: 4500.0,
        max: 11000.0,
        unit: "cells/mcL",
        low_label: "Weakened Immune System",
        high_label: "Infection or Inflammation",
    },
    LabMarker {
        name: "platelets",
        min: 150000.0,
        max: 450000.0,
        unit: "mcL",
        low_label: "Thrombocytopenia (Bleeding risk)",
        high_label: "Thrombocytosis (Clotting risk)",
    },
];
