//! Legacy one-line responder: a small phrase table with several canned
//! phrasings per topic, one picked at random.
//!
//! This is the only non-deterministic path in the crate, and only across
//! seeds: the caller supplies the RNG seed, so a fixed seed gives a fixed
//! response. The main engine never uses it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

static QUICK_EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "heart attack",
    "stroke",
    "unconscious",
    "severe bleeding",
];

static QUICK_EMERGENCY_RESPONSE: &str = "🚨 EMERGENCY: If you're experiencing a medical \
     emergency, call emergency services (911) immediately! This is not a substitute for \
     emergency medical care.";

static QUICK_RESPONSES: &[(&str, &[&str])] = &[
    (
        "headache",
        &[
            "Headaches can be caused by stress, dehydration, eye strain, or lack of sleep. Try resting in a quiet, dark room, staying hydrated, and taking a break from screens.",
            "Consider over-the-counter pain relievers like acetaminophen or ibuprofen. If headaches are severe or frequent, consult a doctor.",
            "Practice relaxation techniques like deep breathing. Ensure you're getting enough sleep and staying hydrated.",
        ],
    ),
    (
        "fever",
        &[
            "Fever is often a sign of infection. Monitor your temperature and rest. Seek medical attention if fever is high (>103°F/39.4°C) or persistent.",
            "Stay hydrated and rest. Use acetaminophen or ibuprofen to reduce fever. If fever persists for more than 3 days, see a doctor.",
            "Fever helps your body fight infection. Rest, drink plenty of fluids, and monitor your symptoms.",
        ],
    ),
    (
        "cough",
        &[
            "Rest, stay hydrated, and consider honey for soothing. Over-the-counter cough medicines may help. If severe or persistent, see a doctor.",
            "A cough can be caused by cold, flu, or allergies. Rest and stay hydrated. If it persists for weeks, consult a healthcare provider.",
            "Try honey, warm tea, or over-the-counter remedies. If cough is severe or produces colored mucus, see a doctor.",
        ],
    ),
    (
        "cold",
        &[
            "Rest, stay hydrated, and get plenty of sleep. Over-the-counter medications can help with symptoms. Most colds resolve in 7-10 days.",
            "There's no cure for the common cold, but rest and fluids help. Consider zinc supplements and vitamin C.",
            "Use saline nasal sprays, stay hydrated, and rest. Avoid antibiotics unless prescribed by a doctor.",
        ],
    ),
    (
        "exercise",
        &[
            "Aim for 150 minutes of moderate exercise per week. Start gradually and build up. Walking, swimming, and cycling are great options.",
            "Regular exercise benefits both physical and mental health. Start with 10-15 minutes daily and gradually increase.",
            "Include both cardio and strength training. Always warm up and cool down. Consult your doctor before starting a new exercise program.",
        ],
    ),
    (
        "diet",
        &[
            "A balanced diet includes fruits, vegetables, lean proteins, whole grains, and healthy fats. Stay hydrated with water.",
            "Eat a variety of colorful fruits and vegetables. Limit processed foods, added sugars, and excessive salt.",
            "Consider the Mediterranean diet or DASH diet for heart health. Portion control and regular meal times are important.",
        ],
    ),
    (
        "sleep",
        &[
            "Adults need 7-9 hours of sleep per night. Maintain a regular sleep schedule and create a relaxing bedtime routine.",
            "Avoid screens before bed, keep your room cool and dark, and avoid caffeine late in the day.",
            "Good sleep hygiene includes a consistent schedule, comfortable environment, and avoiding large meals before bed.",
        ],
    ),
    (
        "stress",
        &[
            "Practice stress management techniques like deep breathing, meditation, or yoga. Regular exercise and adequate sleep help.",
            "Consider talking to a counselor or therapist. Mindfulness and relaxation techniques can be very effective.",
            "Identify stress triggers and develop healthy coping mechanisms. Don't hesitate to seek professional help if needed.",
        ],
    ),
    (
        "medication",
        &[
            "Always take medications exactly as prescribed by your doctor. Don't stop or change doses without consulting your healthcare provider.",
            "Store medications properly and check expiration dates. Never share prescription medications with others.",
            "Keep a list of all medications you're taking. Report any side effects to your doctor immediately.",
        ],
    ),
];

static QUICK_GENERAL: &[&str] = &[
    "I can provide general health information, but for specific medical advice, please consult a healthcare professional.",
    "This is general information only. For personalized medical advice, please see your doctor.",
    "I'm here to provide health information, but I can't diagnose or treat medical conditions. Please consult a healthcare provider for specific concerns.",
    "For medical diagnosis or treatment, please consult a qualified healthcare professional.",
    "This information is for educational purposes only. Always consult your doctor for medical advice.",
];

/// One-line response: emergency check first, then first topic hit, else a
/// general phrase. The seed fully determines which phrasing is picked.
pub fn quick_response(input: &str, seed: u64) -> String {
    let input_lower = input.to_lowercase();

    if QUICK_EMERGENCY_KEYWORDS
        .iter()
        .any(|kw| input_lower.contains(kw))
    {
        return QUICK_EMERGENCY_RESPONSE.to_string();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for (topic, phrasings) in QUICK_RESPONSES {
        if input_lower.contains(topic) {
            // Tables are non-empty, so choose always succeeds.
            return phrasings.choose(&mut rng).copied().unwrap_or_default().to_string();
        }
    }

    QUICK_GENERAL.choose(&mut rng).copied().unwrap_or_default().to_string()
}
