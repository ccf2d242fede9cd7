//! Preference filters applied before selection.
//!
//! They narrow the catalog down to the courses the student asked for (by
//! course name) and optionally to the instructors they prefer. Matching is
//! case-insensitive on trimmed names.

use log::warn;
use strsim::jaro_winkler;

use crate::models::Course;

/// Minimum Jaro-Winkler similarity for a catalog name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Course-name preferences that matched nothing in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedPreferences {
    pub names: Vec<String>,
    /// Closest catalog names, one list per unmatched preference.
    pub suggestions: Vec<Vec<String>>,
}

/// True if `input` names the offered semester (case-insensitive).
pub fn is_offered_semester(input: &str, offered: &str) -> bool {
    input.trim().eq_ignore_ascii_case(offered.trim())
}

/// Split a comma separated answer into lowercased, trimmed, non-empty entries.
pub fn split_preferences(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Keep the courses whose name matches one of `preferences`.
///
/// Output follows preference order, then catalog order for sections of the
/// same course. Fails if any preference matches no course.
pub fn filter_by_course_names(
    courses: &[Course],
    preferences: &[String],
) -> Result<Vec<Course>, UnmatchedPreferences> {
    let mut preferred: Vec<Course> = Vec::new();
    let mut not_found: Vec<String> = Vec::new();

    for pref in preferences {
        let pref = pref.trim().to_lowercase();
        let before = preferred.len();
        preferred.extend(courses.iter().filter(|c| c.name().to_lowercase() == pref).cloned());
        if preferred.len() == before {
            not_found.push(pref);
        }
    }

    if not_found.is_empty() {
        return Ok(preferred);
    }

    warn!("no matching courses for: {}", not_found.join(", "));
    let suggestions = not_found.iter().map(|n| suggest_names(courses, n)).collect();
    Err(UnmatchedPreferences { names: not_found, suggestions })
}

/// Keep the courses taught by one of `preferences`; no preferences keeps all.
pub fn filter_by_instructors(courses: &[Course], preferences: &[String]) -> Vec<Course> {
    let wanted: Vec<String> = preferences.iter().map(|p| p.trim().to_lowercase()).collect();
    courses
        .iter()
        .filter(|c| wanted.is_empty() || wanted.contains(&c.instructor().to_lowercase()))
        .cloned()
        .collect()
}

/// Catalog names close to `query`, most similar first, without duplicates.
pub fn suggest_names(courses: &[Course], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = Vec::new();
    for c in courses {
        if scored.iter().any(|(_, n)| *n == c.name()) {
            continue;
        }
        let score = jaro_winkler(&query, &c.name().to_lowercase());
        if score >= SUGGESTION_THRESHOLD {
            scored.push((score, c.name()));
        }
    }
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, n)| n.to_string()).collect()
}
