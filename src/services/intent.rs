use crate::models::{ClassifiedIntent, Intent};

// Ordered keyword vocabulary. First matching rule wins, so the order of
// the checks in detect_intent is load-bearing: complaint markers must be
// tested before doctor and specialization markers.

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey"];
const GREETING_PHRASES: &[&str] = &["good morning", "good evening"];

const THANKS_WORDS: &[&str] = &["thanks", "thx"];
const THANKS_PHRASES: &[&str] = &["thank you"];

const COMPLAINT_MARKERS: &[&str] = &[
    "complaint", "complain", "feedback", "support", "issue", "problem",
];

const CARDIOLOGY_MARKERS: &[&str] = &["heart", "cardio", "cardiology"];

const ALL_AVAILABLE_PHRASES: &[&str] = &[
    "which doctor is available",
    "doctor available",
    "doctors available",
    "who is available",
];

/// Classify one utterance. Pure and deterministic; entity extraction is
/// limited to the fixed doctor-name and specialization vocabulary, so
/// unknown names fall through to Fallback.
pub fn detect_intent(text: &str) -> ClassifiedIntent {
    let t = normalize(text);

    if contains_any_word(&t, GREETING_WORDS) || contains_any_substr(&t, GREETING_PHRASES) {
        return ClassifiedIntent::bare(Intent::Greet);
    }

    if contains_any_word(&t, THANKS_WORDS) || contains_any_substr(&t, THANKS_PHRASES) {
        return ClassifiedIntent::bare(Intent::Thanks);
    }

    if contains_any_substr(&t, COMPLAINT_MARKERS) {
        return ClassifiedIntent::bare(Intent::Complaint);
    }

    if t.contains("sharma") {
        return ClassifiedIntent {
            intent: Intent::DoctorAvailability,
            doctor: Some("Dr. Sharma".to_string()),
            spec: None,
        };
    }
    if t.contains("patel") {
        return ClassifiedIntent {
            intent: Intent::DoctorAvailability,
            doctor: Some("Dr. Patel".to_string()),
            spec: None,
        };
    }

    if contains_any_substr(&t, CARDIOLOGY_MARKERS) {
        return ClassifiedIntent {
            intent: Intent::SpecialistLookup,
            doctor: None,
            spec: Some("cardiology".to_string()),
        };
    }

    if contains_any_substr(&t, ALL_AVAILABLE_PHRASES) {
        return ClassifiedIntent::bare(Intent::AllDoctorsAvailable);
    }

    ClassifiedIntent::bare(Intent::Fallback)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// Single-word markers match whole tokens, not raw substrings: "which"
// contains the letters "hi" but is not a greeting.
fn contains_any_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.contains(&token))
}

fn contains_any_substr(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
