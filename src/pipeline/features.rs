//! Per-row feature derivations: country, experience level, skills.
//!
//! All three are pure functions of existing columns and safe to map over
//! rows in parallel. Matching is literal case-insensitive substring
//! containment; the phrase patterns are intentionally kept exactly as the
//! classifier was tuned, so "senior" also fires inside "seniority".

use regex::Regex;

use crate::config::JobmapConfig;
use crate::core::ExperienceLevel;

/// Last comma-delimited token of a location, trimmed.
///
/// `"New York, NY, USA"` yields `"USA"`; a single token like `"Remote"` is
/// returned as-is; an empty location yields an empty country.
pub fn extract_country(location: &str) -> String {
    location
        .rsplit(',')
        .next()
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

/// Compiled experience phrase sets, built once per run from configuration
#[derive(Debug)]
pub struct ExperienceMatcher {
    entry: Vec<Regex>,
    mid: Vec<Regex>,
    senior: Vec<Regex>,
}

impl ExperienceMatcher {
    pub fn from_config(config: &JobmapConfig) -> Self {
        Self {
            entry: compile_phrases(&config.entry_phrases),
            mid: compile_phrases(&config.mid_phrases),
            senior: compile_phrases(&config.senior_phrases),
        }
    }

    /// Classify a description, first match wins: Entry before Mid before
    /// Senior. A description matching several phrase sets takes the
    /// earliest bucket; no match is `Unspecified`.
    pub fn classify(&self, description: &str) -> ExperienceLevel {
        if matches_any(&self.entry, description) {
            ExperienceLevel::Entry
        } else if matches_any(&self.mid, description) {
            ExperienceLevel::Mid
        } else if matches_any(&self.senior, description) {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Unspecified
        }
    }
}

fn compile_phrases(phrases: &[String]) -> Vec<Regex> {
    phrases
        .iter()
        .map(|phrase| Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap())
        .collect()
}

fn matches_any(patterns: &[Regex], haystack: &str) -> bool {
    patterns.iter().any(|p| p.is_match(haystack))
}

/// All vocabulary terms contained (case-insensitively) in the description,
/// comma-space-joined in vocabulary order; empty string when none match.
pub fn extract_skills(description: &str, vocabulary: &[String]) -> String {
    let haystack = description.to_lowercase();
    vocabulary
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ExperienceMatcher {
        ExperienceMatcher::from_config(&JobmapConfig::default())
    }

    #[test]
    fn country_is_last_comma_token() {
        assert_eq!(extract_country("New York, NY, USA"), "USA");
        assert_eq!(extract_country("Remote"), "Remote");
        assert_eq!(extract_country(""), "");
        assert_eq!(extract_country("Paris , France "), "France");
    }

    #[test]
    fn entry_phrases_win_over_senior() {
        let level = matcher().classify("Entry level role reporting to a senior manager");
        assert_eq!(level, ExperienceLevel::Entry);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let m = matcher();
        assert_eq!(m.classify("FRESHER welcome"), ExperienceLevel::Entry);
        assert_eq!(m.classify("2-5 Years required"), ExperienceLevel::Mid);
        assert_eq!(m.classify("6+ years in ops"), ExperienceLevel::Senior);
        assert_eq!(m.classify("no hints here"), ExperienceLevel::Unspecified);
    }

    #[test]
    fn plus_sign_in_phrase_is_literal() {
        // "6+ years" must not be read as a regex quantifier
        let m = matcher();
        assert_eq!(m.classify("666 years"), ExperienceLevel::Unspecified);
        assert_eq!(m.classify("6+ years"), ExperienceLevel::Senior);
    }

    #[test]
    fn substring_match_is_preserved_verbatim() {
        // Tuned behavior: "senior" fires inside larger words too
        assert_eq!(matcher().classify("seniority matters"), ExperienceLevel::Senior);
    }

    #[test]
    fn skills_in_vocabulary_order_without_duplicates() {
        let vocab = JobmapConfig::default().skills;
        let skills = extract_skills("Requires Python, SQL and Docker experience", &vocab);
        assert_eq!(skills, "python, sql, docker");
    }

    #[test]
    fn multiword_skills_match() {
        let vocab = JobmapConfig::default().skills;
        let skills = extract_skills("Machine Learning with Python", &vocab);
        assert_eq!(skills, "python, machine learning");
    }

    #[test]
    fn no_skills_is_empty_string() {
        let vocab = JobmapConfig::default().skills;
        assert_eq!(extract_skills("Forklift operator", &vocab), "");
    }
}
