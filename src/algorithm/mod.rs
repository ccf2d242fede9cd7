// Selection pipeline: preference filters, conflict checks and the greedy selector.
pub mod conflict;
pub mod filters;
pub mod selector;

pub use conflict::SlotIndex;
pub use filters::{
    filter_by_course_names, filter_by_instructors, is_offered_semester, split_preferences, suggest_names,
    UnmatchedPreferences,
};
pub use selector::{select_courses, select_with_limits, Selection, SelectionLimits, SkipReason, SkippedCourse};
