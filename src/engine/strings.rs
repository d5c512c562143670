//! Per-language template strings for response rendering.
//!
//! These are render-only: keyword matching always runs against the English
//! topic keys and emergency phrases, whatever language the answer comes
//! back in. English, Hindi (Devanagari), and Hinglish are carried; the
//! Hinglish set intentionally mixes scripts the way its speakers type.

use super::types::Language;

/// Localized labels for every template slot the renderers use.
#[derive(Debug)]
pub struct Strings {
    pub understanding: &'static str,
    pub what_it_is: &'static str,
    pub common_causes: &'static str,
    pub self_care: &'static str,
    pub tips: &'static str,
    pub otc_relief: &'static str,
    pub diagnostic_profiles: &'static str,
    pub recommended_tests: &'static str,
    pub tests_desc: &'static str,
    pub actions: &'static str,
    pub consult_doctor: &'static str,
    pub consult_desc: &'static str,
    pub disclaimer: &'static str,
    pub fallback_intro: &'static str,
    pub fallback_general: &'static str,
    pub emergency_title: &'static str,
    pub emergency_steps: &'static str,
    pub emergency_disclaimer: &'static str,
    pub lab_interpretation: &'static str,
    pub greeting: &'static str,
    /// Caution banner shown above the OTC medication list.
    pub otc_caution: &'static str,
}

impl Strings {
    pub fn for_language(lang: Language) -> &'static Strings {
        match lang {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Hinglish => &HINGLISH,
        }
    }
}

static EN: Strings = Strings {
    understanding: "Understanding",
    what_it_is: "What it is",
    common_causes: "Common Causes",
    self_care: "Self-Care & Relief",
    tips: "Health Management Tips",
    otc_relief: "Common Over-the-Counter (OTC) Relief",
    diagnostic_profiles: "Common Diagnostic Profiles",
    recommended_tests: "Recommended Tests",
    tests_desc: "To better understand your condition, a doctor might recommend:",
    actions: "Actions to Take",
    consult_doctor: "When to Consult a Doctor",
    consult_desc: "It is important to seek professional medical advice if:",
    disclaimer: "*Disclaimer: This information is for educational purposes. Always consult a healthcare professional for diagnosis and treatment.*",
    fallback_intro: "I've noted that you're asking about",
    fallback_general: "While I don't have a detailed profile for this specific topic yet, here is some general guidance:",
    emergency_title: "URGENT MEDICAL ADVICE: IMMEDIATE ACTION REQUIRED",
    emergency_steps: "Please take the following steps immediately:",
    emergency_disclaimer: "*This chatbot is for informational purposes and cannot provide emergency medical care.*",
    lab_interpretation: "Lab Interpretation Report",
    greeting: "Hello! I'm your Health Assistant. I can explain medical conditions in simple terms and help you decide if you need to see a doctor. What's on your mind today?",
    otc_caution: "> [!CAUTION]\n> **Always consult a pharmacist or doctor before taking new medication.** Check for allergies, dosages, and interactions.",
};

static HI: Strings = Strings {
    understanding: "समझना",
    what_it_is: "यह क्या है",
    common_causes: "सामान्य कारण",
    self_care: "स्व-देखभाल और राहत",
    tips: "स्वास्थ्य प्रबंधन टिप्स",
    otc_relief: "सामान्य ओवर-द-काउंटर (OTC) राहत",
    diagnostic_profiles: "सामान्य नैदानिक प्रोफाइल",
    recommended_tests: "अनुशंसित परीक्षण",
    tests_desc: "आपकी स्थिति को बेहतर ढंग से समझने के लिए, डॉक्टर इन परीक्षणों की सिफारिश कर सकते हैं:",
    actions: "किए जाने वाले कार्य",
    consult_doctor: "डॉक्टर से कब सलाह लें",
    consult_desc: "यदि आपको निम्नलिखित समस्याएं हैं, तो पेशेवर चिकित्सा सलाह लेना महत्वपूर्ण है:",
    disclaimer: "*अस्वीकरण: यह जानकारी केवल शैक्षिक उद्देश्यों के लिए है। निदान और उपचार के लिए हमेशा स्वास्थ्य देखभाल पेशेवर से परामर्श लें।*",
    fallback_intro: "मैंने गौर किया है कि आप इसके बारे में पूछ रहे हैं",
    fallback_general: "हालांकि मेरे पास अभी तक इस विशिष्ट विषय के लिए विस्तृत प्रोफाइल नहीं है, लेकिन यहां कुछ सामान्य मार्गदर्शन दिया गया है:",
    emergency_title: "तत्काल चिकित्सा सलाह: तत्काल कार्रवाई की आवश्यकता है",
    emergency_steps: "कृपया तुरंत निम्नलिखित कदम उठाएं:",
    emergency_disclaimer: "*यह चैटबॉट केवल सूचनात्मक उद्देश्यों के लिए है और आपातकालीन चिकित्सा देखभाल प्रदान नहीं कर सकता है।*",
    lab_interpretation: "लैब व्याख्या रिपोर्ट",
    greeting: "नमस्ते! मैं आपका हेल्थ असिस्टेंट हूं। मैं चिकित्सा स्थितियों के बारे में बता सकता हूं और आपको यह तय करने में मदद कर सकता हूं कि क्या आपको डॉक्टर को देखने की आवश्यकता है। आज आपके मन में क्या है?",
    otc_caution: "> [!CAUTION]\n> **नई दवा लेने से पहले हमेशा फार्मासिस्ट या डॉक्टर से सलाह लें।** एलर्जी, खुराक और इंटरैक्शन की जांच करें।",
};

static HINGLISH: Strings = Strings {
    understanding: "Understanding",
    what_it_is: "Ye kya hai",
    common_causes: "Common Causes",
    self_care: "Self-Care & Relief",
    tips: "Health Management Tips",
    otc_relief: "Common OTC Meds",
    diagnostic_profiles: "Common Diagnostic Profiles",
    recommended_tests: "Recommended Tests",
    tests_desc: "Apni condition ko better samajhne ke liye, doctor ye tests suggest kar sakte hain:",
    actions: "Actions to Take",
    consult_doctor: "Doctor se kab consult karein",
    consult_desc: "Professional medical advice lena zaroori hai agar:",
    disclaimer: "*Disclaimer: Ye info sirf educational purposes ke liye hai. Diagnose aur treatment ke liye hamesha doctor se milein.*",
    fallback_intro: "Maine dekha ki aap pooch rahe hain",
    fallback_general: "Mere paas abhi is topic par detail info nahi hai, par ye general guidance hai:",
    emergency_title: "URGENT MEDICAL ADVICE: IMMEDIATE ACTION REQUIRED",
    emergency_steps: "Please jaldi ye steps follow karein:",
    emergency_disclaimer: "*Ye chatbot sirf info ke liye hai aur emergency care provide nahi kar sakta.*",
    lab_interpretation: "Lab Interpretation Report",
    greeting: "Hello! Main aapka Health Assistant hoon. Main medical conditions ke bare mein bata sakta hoon aur aapki help kar sakta hoon decide karne mein ki doctor se milna chahiye ya nahi. Aaj kya help chahiye?",
    otc_caution: "> [!CAUTION]\n> **Nayi medicine lene se pehle hamesha pharmacist ya doctor se consult karein.** Allergies aur dosage zarur check karein.",
};
