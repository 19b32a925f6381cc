//! Fixed keyword tables used by the extractor.
//!
//! Every table is ordered: earlier entries win when more than one matches.

use crate::models::{Outcome, Severity};

/// Drug name patterns, tried in order. The boolean marks case-insensitive patterns.
pub const DRUG_PATTERNS: &[(&str, bool)] = &[
    (
        r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:tablet|capsule|injection|dose|mg|ml|g)\b",
        false,
    ),
    (r"\bDrug\s+[A-Z]\b", true),
    (r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:X|Y|Z)\b", false),
    (
        r"\b(?:aspirin|ibuprofen|acetaminophen|morphine|penicillin|insulin|warfarin|metformin)\b",
        true,
    ),
];

pub const UNKNOWN_DRUG: &str = "Unknown Drug";

/// Adverse event categories and the lowercase synonyms that indicate them.
pub const ADVERSE_EVENTS: &[(&str, &[&str])] = &[
    ("nausea", &["nausea", "nauseous", "nauseated", "queasy"]),
    ("headache", &["headache", "head pain", "migraine", "cephalgia"]),
    ("dizziness", &["dizziness", "dizzy", "vertigo", "lightheaded"]),
    (
        "rash",
        &["rash", "skin irritation", "dermatitis", "hives", "skin reaction"],
    ),
    ("fatigue", &["fatigue", "tiredness", "exhaustion", "weakness"]),
    ("diarrhea", &["diarrhea", "diarrhoea", "loose stools"]),
    ("vomiting", &["vomiting", "vomit", "throwing up", "emesis"]),
    ("fever", &["fever", "pyrexia", "elevated temperature"]),
    (
        "pain",
        &["pain", "ache", "soreness", "discomfort", "chest pain"],
    ),
    ("swelling", &["swelling", "edema", "inflammation"]),
    (
        "shortness of breath",
        &["shortness of breath", "breathing difficulty", "dyspnea"],
    ),
    (
        "allergic reaction",
        &["allergic reaction", "allergy", "hypersensitivity"],
    ),
];

pub const SEVERITY_INDICATORS: &[(Severity, &[&str])] = &[
    (
        Severity::Severe,
        &["severe", "serious", "critical", "life-threatening", "intense", "extreme"],
    ),
    (
        Severity::Moderate,
        &["moderate", "modest", "noticeable", "significant"],
    ),
    (Severity::Mild, &["mild", "slight", "minor", "light", "gentle"]),
];

pub const DEFAULT_SEVERITY: Severity = Severity::Mild;

pub const OUTCOME_INDICATORS: &[(Outcome, &[&str])] = &[
    (
        Outcome::Recovered,
        &["recovered", "recovery", "resolved", "better", "improved", "healed"],
    ),
    (
        Outcome::Ongoing,
        &["ongoing", "continuing", "persistent", "still", "remains"],
    ),
    (
        Outcome::Fatal,
        &["fatal", "death", "died", "deceased", "expired", "passed away"],
    ),
];

pub const DEFAULT_OUTCOME: Outcome = Outcome::Ongoing;
