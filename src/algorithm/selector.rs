use log::{debug, info};
use serde::Serialize;

use crate::algorithm::conflict::SlotIndex;
use crate::models::Course;

/// Upper bounds enforced while filling a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionLimits {
    pub max_credits: u32,
    pub max_online: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        SelectionLimits { max_credits: 10, max_online: 1 }
    }
}

/// Why a candidate was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    CreditLimit,
    OnlineLimit,
    /// Coincides with the accepted section in `with`.
    TimeConflict { with: Course },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCourse {
    pub course: Course,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub courses: Vec<Course>,
    pub total_credits: u32,
    pub skipped: Vec<SkippedCourse>,
}

/// Greedy first-fit selection with at most one online course.
///
/// Candidates are visited once, in order; accepted courses keep their input
/// order and are never revisited.
pub fn select_courses(candidates: &[Course], max_credits: u32) -> Vec<Course> {
    let limits = SelectionLimits { max_credits, max_online: 1 };
    select_with_limits(candidates, &limits).courses
}

/// Same single pass as `select_courses`, with configurable limits and a
/// record of every rejected candidate.
pub fn select_with_limits(candidates: &[Course], limits: &SelectionLimits) -> Selection {
    let mut selection = Selection::default();
    let mut online_taken = 0usize;
    let mut occupied = SlotIndex::new();

    for course in candidates {
        let reason = if selection.total_credits.saturating_add(course.credits()) > limits.max_credits {
            Some(SkipReason::CreditLimit)
        } else if course.is_online() && online_taken >= limits.max_online {
            Some(SkipReason::OnlineLimit)
        } else {
            occupied
                .conflict_for(course)
                .map(|pos| SkipReason::TimeConflict { with: selection.courses[pos].clone() })
        };

        match reason {
            Some(reason) => {
                debug!("skip {} ({}) {}: {:?}", course.name(), course.instructor(), course.time_slot(), reason);
                selection.skipped.push(SkippedCourse { course: course.clone(), reason });
            }
            None => {
                debug!("accept {} ({}) {} {}", course.name(), course.instructor(), course.day(), course.time());
                selection.total_credits += course.credits();
                if course.is_online() {
                    online_taken += 1;
                }
                occupied.insert(course, selection.courses.len());
                selection.courses.push(course.clone());
            }
        }
    }

    info!(
        "selected {} of {} candidates, {} credits",
        selection.courses.len(),
        candidates.len(),
        selection.total_credits
    );
    selection
}
