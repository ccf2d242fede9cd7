//! Credit balance advice over a finished selection.
//!
//! Credits are grouped by category in the order categories first appear in
//! the selection. Any category holding less than `MIN_CATEGORY_SHARE` of the
//! total earns an advice line; otherwise a single "well balanced" line is
//! returned.

use serde::Serialize;

use crate::models::Course;

pub const MIN_CATEGORY_SHARE: f64 = 0.3;

pub const BALANCED_MESSAGE: &str = "Your credit distribution is well balanced across categories.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    /// Summed in `u64` so any number of `u32` credits fits.
    pub credits: u64,
    /// Fraction of the total credits, 0.0 when the total is zero.
    pub share: f64,
}

/// Credits per category, first-seen order.
pub fn category_breakdown(selected: &[Course]) -> Vec<CategoryShare> {
    let mut totals: Vec<(String, u64)> = Vec::new();
    for course in selected {
        let credits = u64::from(course.credits());
        match totals.iter_mut().find(|(cat, _)| cat == course.category()) {
            Some((_, sum)) => *sum = sum.saturating_add(credits),
            None => totals.push((course.category().to_string(), credits)),
        }
    }

    let total: u64 = totals.iter().fold(0u64, |acc, (_, c)| acc.saturating_add(*c));
    totals
        .into_iter()
        .map(|(category, credits)| {
            let share = if total == 0 { 0.0 } else { credits as f64 / total as f64 };
            CategoryShare { category, credits, share }
        })
        .collect()
}

/// Advice lines for under-represented categories, or the balanced message.
///
/// With no credits at all (empty selection or only zero-credit courses)
/// there is no distribution to judge and the balanced message is returned.
pub fn analyze_distribution(selected: &[Course]) -> Vec<String> {
    let breakdown = category_breakdown(selected);
    let total: u64 = breakdown.iter().fold(0u64, |acc, c| acc.saturating_add(c.credits));

    let advice: Vec<String> = if total == 0 {
        Vec::new()
    } else {
        breakdown
            .iter()
            .filter(|c| c.share < MIN_CATEGORY_SHARE)
            .map(|c| format!("Increase your credits in {} for a more balanced course load.", c.category))
            .collect()
    };

    if advice.is_empty() {
        vec![BALANCED_MESSAGE.to_string()]
    } else {
        advice
    }
}
