use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    French,
    Swahili,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::French, Language::Swahili];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::French => "french",
            Language::Swahili => "swahili",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

const FRENCH: &[(&str, &str)] = &[
    ("recovered", "rétabli"),
    ("ongoing", "en cours"),
    ("fatal", "fatal"),
    ("mild", "léger"),
    ("moderate", "modéré"),
    ("severe", "sévère"),
    ("nausea", "nausée"),
    ("headache", "mal de tête"),
    ("dizziness", "étourdissement"),
    ("rash", "éruption cutanée"),
    ("fatigue", "fatigue"),
    ("diarrhea", "diarrhée"),
    ("vomiting", "vomissements"),
    ("fever", "fièvre"),
    ("pain", "douleur"),
    ("swelling", "gonflement"),
];

const SWAHILI: &[(&str, &str)] = &[
    ("recovered", "amepona"),
    ("ongoing", "inaendelea"),
    ("fatal", "la kufa"),
    ("mild", "nyepesi"),
    ("moderate", "wastani"),
    ("severe", "kali"),
    ("nausea", "kichefuchefu"),
    ("headache", "kichwa cha maumivu"),
    ("dizziness", "kizunguzungu"),
    ("rash", "mashavu"),
    ("fatigue", "uchovu"),
    ("diarrhea", "kuhara"),
    ("vomiting", "kutapika"),
    ("fever", "homa"),
    ("pain", "maumivu"),
    ("swelling", "uvimbe"),
];

static TABLES: LazyLock<HashMap<Language, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (Language::French, FRENCH.iter().copied().collect()),
            (Language::Swahili, SWAHILI.iter().copied().collect()),
        ])
    });

/// Translate a single term. Unknown languages and unknown terms are returned unchanged.
pub fn translate(term: &str, language: &str) -> String {
    match Language::parse(language) {
        Some(language) => translate_to(term, language),
        None => term.to_string(),
    }
}

pub fn translate_to(term: &str, language: Language) -> String {
    TABLES
        .get(&language)
        .and_then(|table| table.get(term.to_lowercase().as_str()))
        .map(|t| t.to_string())
        .unwrap_or_else(|| term.to_string())
}
