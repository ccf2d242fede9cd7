// Rendering of a finished selection, as console text or JSON.
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::advisory::{analyze_distribution, category_breakdown, CategoryShare};
use crate::models::{Course, TimeSlot};

pub const EMPTY_SELECTION_MESSAGE: &str = "No courses could be selected based on the preferences and constraints.";

/// Selected courses, one per line, under a "Selected Courses:" header.
pub fn render_selection(courses: &[Course]) -> String {
    if courses.is_empty() {
        return EMPTY_SELECTION_MESSAGE.to_string();
    }
    let mut out = String::from("Selected Courses:");
    for c in courses {
        out.push('\n');
        out.push_str(&format!(
            "{}, {} Credits, {}, {}, {} {}, {}",
            c.name(),
            c.credits(),
            c.mode(),
            c.instructor(),
            c.day(),
            c.time(),
            c.category()
        ));
    }
    out
}

/// One selected section placed on the reference week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableEntry {
    pub name: String,
    pub instructor: String,
    pub slot: TimeSlot,
    pub starts_at: NaiveDateTime,
}

impl TimetableEntry {
    fn from_course(course: &Course) -> Self {
        let slot = course.time_slot();
        TimetableEntry {
            name: course.name().to_string(),
            instructor: course.instructor().to_string(),
            slot,
            starts_at: slot.to_datetime(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub semester: String,
    pub max_credits: u32,
    pub total_credits: u64,
    pub selected: Vec<Course>,
    /// Selected sections in week order.
    pub timetable: Vec<TimetableEntry>,
    pub breakdown: Vec<CategoryShare>,
    pub advice: Vec<String>,
}

impl SelectionReport {
    pub fn new(semester: &str, max_credits: u32, selected: Vec<Course>) -> Self {
        let total_credits = selected.iter().fold(0u64, |acc, c| acc.saturating_add(u64::from(c.credits())));
        let mut timetable: Vec<TimetableEntry> = selected.iter().map(TimetableEntry::from_course).collect();
        timetable.sort_by_key(|e| e.starts_at);
        let breakdown = category_breakdown(&selected);
        let advice = analyze_distribution(&selected);
        SelectionReport {
            semester: semester.to_string(),
            max_credits,
            total_credits,
            selected,
            timetable,
            breakdown,
            advice,
        }
    }

    /// Selection followed by the advice lines.
    pub fn to_text(&self) -> String {
        let mut out = render_selection(&self.selected);
        for line in &self.advice {
            out.push('\n');
            out.push_str(line);
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Mode};

    #[test]
    fn test_render_selection_lines() {
        let c = Course::new("Java", 5, Mode::InCampus, "Jane", Day::Monday, "10AM", "Technical").unwrap();
        assert_eq!(
            render_selection(&[c]),
            "Selected Courses:\nJava, 5 Credits, InCampus, Jane, Monday 10AM, Technical"
        );
        assert_eq!(render_selection(&[]), EMPTY_SELECTION_MESSAGE);
    }

    #[test]
    fn test_report_json_shape() {
        let c = Course::new("Cybersecurity", 3, Mode::Online, "Donald", Day::Friday, "8PM", "Technical").unwrap();
        let report = SelectionReport::new("fall", 10, vec![c]);
        let v: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(v["total_credits"], 3);
        assert_eq!(v["selected"][0]["mode"], "Online");
        assert_eq!(v["selected"][0]["day"], "Friday");
        assert_eq!(v["breakdown"][0]["category"], "Technical");
        assert_eq!(v["advice"][0], crate::advisory::BALANCED_MESSAGE);
        assert_eq!(v["timetable"][0]["starts_at"], "2023-01-05T20:00:00");
    }

    #[test]
    fn test_timetable_in_week_order() {
        let friday = Course::new("Python", 5, Mode::InCampus, "Amy", Day::Friday, "4PM", "Technical").unwrap();
        let monday = Course::new("Java", 5, Mode::InCampus, "Jane", Day::Monday, "10AM", "Technical").unwrap();
        let report = SelectionReport::new("fall", 10, vec![friday, monday]);
        let names: Vec<&str> = report.timetable.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Java", "Python"]);
        assert_eq!(report.timetable[0].starts_at.to_string(), "2023-01-01 10:00:00");
    }

    #[test]
    fn test_total_credits_do_not_overflow() {
        let big = Course::new("Huge", u32::MAX, Mode::InCampus, "X", Day::Monday, "9AM", "Technical").unwrap();
        let small = Course::new("Tiny", 2, Mode::InCampus, "Y", Day::Tuesday, "9AM", "Practical").unwrap();
        let report = SelectionReport::new("fall", u32::MAX, vec![big, small]);
        assert_eq!(report.total_credits, u64::from(u32::MAX) + 2);
        assert_eq!(report.advice.len(), 1);
    }
}
