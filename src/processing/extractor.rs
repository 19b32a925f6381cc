use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::models::{NewReport, Outcome, Severity};

use super::lexicon::{
    ADVERSE_EVENTS, DEFAULT_OUTCOME, DEFAULT_SEVERITY, DRUG_PATTERNS, OUTCOME_INDICATORS,
    SEVERITY_INDICATORS, UNKNOWN_DRUG,
};

static DRUG_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DRUG_PATTERNS
        .iter()
        .map(|(pattern, insensitive)| {
            RegexBuilder::new(pattern)
                .case_insensitive(*insensitive)
                .build()
                .unwrap()
        })
        .collect()
});

/// Extract structured fields from a free-text report. Never fails: fields
/// that cannot be recognised fall back to their defaults.
pub fn extract(text: &str) -> NewReport {
    let lower = text.to_lowercase();
    NewReport {
        original_report: text.to_string(),
        drug: extract_drug(text),
        adverse_events: extract_adverse_events(&lower),
        severity: extract_severity(&lower),
        outcome: extract_outcome(&lower),
    }
}

pub fn extract_drug(text: &str) -> String {
    DRUG_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_DRUG.to_string())
}

/// Event categories with at least one synonym present, in table order.
/// Expects lowercased text.
pub fn extract_adverse_events(lower: &str) -> Vec<String> {
    ADVERSE_EVENTS
        .iter()
        .filter(|(_, synonyms)| synonyms.iter().any(|s| lower.contains(s)))
        .map(|(event, _)| event.to_string())
        .collect()
}

/// Expects lowercased text.
pub fn extract_severity(lower: &str) -> Severity {
    first_tier(SEVERITY_INDICATORS, lower).unwrap_or(DEFAULT_SEVERITY)
}

/// Expects lowercased text.
pub fn extract_outcome(lower: &str) -> Outcome {
    first_tier(OUTCOME_INDICATORS, lower).unwrap_or(DEFAULT_OUTCOME)
}

fn first_tier<T: Copy>(tiers: &[(T, &[&str])], lower: &str) -> Option<T> {
    tiers
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|i| lower.contains(i)))
        .map(|(tier, _)| *tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severe_drug_x_died() {
        let r = extract("Patient experienced severe nausea after taking Drug X and later died.");
        assert_eq!(r.drug, "Drug X");
        assert_eq!(r.severity, Severity::Severe);
        assert_eq!(r.outcome, Outcome::Fatal);
        assert_eq!(r.adverse_events, vec!["nausea"]);
    }

    #[test]
    fn unrecognised_text_uses_defaults() {
        let r = extract("The weather was cold on Tuesday.");
        assert_eq!(r.drug, "Unknown Drug");
        assert_eq!(r.severity, Severity::Mild);
        assert_eq!(r.outcome, Outcome::Ongoing);
        assert!(r.adverse_events.is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "Moderate rash, fever and dizziness after Ibuprofen 200mg; symptoms persistent.";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn keeps_original_text() {
        let r = extract("mild headache");
        assert_eq!(r.original_report, "mild headache");
    }

    #[test]
    fn dosage_form_pattern_wins_over_allowlist() {
        let text = "Patient experienced severe allergic reaction to Penicillin injection. Patient died.";
        assert_eq!(extract_drug(text), "Penicillin injection");
    }

    #[test]
    fn placeholder_is_case_insensitive() {
        assert_eq!(extract_drug("after taking drug y twice"), "drug y");
    }

    #[test]
    fn capitalised_name_with_placeholder_letter() {
        assert_eq!(extract_drug("was given Compound Z yesterday"), "Compound Z");
    }

    #[test]
    fn capitalised_name_patterns_are_case_sensitive() {
        assert_eq!(
            extract_drug("severe headache after tylenol tablet"),
            "Unknown Drug"
        );
        assert_eq!(
            extract_drug("severe headache after Tylenol tablet"),
            "Tylenol tablet"
        );
    }

    #[test]
    fn allowlist_matches_generic_names() {
        assert_eq!(
            extract_drug("Patient reported mild dizziness after taking Aspirin 500mg."),
            "Aspirin"
        );
        assert_eq!(extract_drug("started on metformin last week"), "metformin");
    }

    #[test]
    fn adverse_events_follow_table_order_without_duplicates() {
        let events = extract_adverse_events(
            "dizzy, vertigo, skin rash, hives, fatigue and shortness of breath",
        );
        assert_eq!(
            events,
            vec!["dizziness", "rash", "fatigue", "shortness of breath"]
        );
    }

    #[test]
    fn synonyms_match_as_substrings() {
        // "ache" inside "headache" also flags pain
        assert_eq!(extract_adverse_events("headache"), vec!["headache", "pain"]);
    }

    #[test]
    fn severity_tiers_checked_in_order() {
        assert_eq!(extract_severity("mild at first, then severe"), Severity::Severe);
        assert_eq!(extract_severity("a noticeable and slight rash"), Severity::Moderate);
        assert_eq!(extract_severity("slight rash"), Severity::Mild);
        assert_eq!(extract_severity("rash"), Severity::Mild);
    }

    #[test]
    fn outcome_tiers_checked_in_order() {
        assert_eq!(extract_outcome("patient recovered"), Outcome::Recovered);
        assert_eq!(extract_outcome("symptoms persistent"), Outcome::Ongoing);
        assert_eq!(extract_outcome("patient passed away"), Outcome::Fatal);
        assert_eq!(extract_outcome("no follow-up"), Outcome::Ongoing);
    }

    #[test]
    fn uppercase_keywords_are_found() {
        let r = extract("SEVERE VOMITING. PATIENT DIED.");
        assert_eq!(r.severity, Severity::Severe);
        assert_eq!(r.outcome, Outcome::Fatal);
        assert_eq!(r.adverse_events, vec!["vomiting"]);
    }
}
