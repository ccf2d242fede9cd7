//! Compiled-in course catalog and its loader.
//!
//! The catalog is a constant table of records in the
//! `Name, Credits, Mode, Instructor, Day Time, Category` format. Loading
//! parses every record (resolving its time slot) up front, so a bad record
//! stops the program at startup.

mod parser;

pub use parser::parse_record;

use log::info;

use crate::errors::{CourseError, Result};
use crate::models::Course;

/// Fall semester offering.
pub const FALL_CATALOG: &[&str] = &[
    "Python, 5, InCampus, Amy, Thursday 4PM, Technical",
    "Python, 5, InCampus, Amy, Friday 4PM, Technical",
    "Python, 5, InCampus, Andrew, Thursday 4PM, Technical",
    "Python, 5, InCampus, Andrew, Friday 4PM, Technical",
    "Java, 5, InCampus, Jane, Monday 10AM, Technical",
    "Java, 5, InCampus, Jane, Monday 2PM, Technical",
    "Java, 5, InCampus, John, Monday 10AM, Technical",
    "Java, 5, InCampus, Jane, Thursday 10AM, Technical",
    "Game Design Basics, 3, InCampus, James, Monday 10AM, Practical",
    "Game Design Basics, 3, InCampus, Duncan, Monday 10AM, Practical",
    "Game Design Basics, 3, InCampus, Jordan, Friday 2PM, Practical",
    "Foundations of Natural Language Processing, 3, Online, Adams, Tuesday 2PM, Theoretical",
    "Foundations of Natural Language Processing, 3, InCampus, Williams, Tuesday 10AM, Theoretical",
    "Foundations of Natural Language Processing, 3, InCampus, Taylor, Tuesday 2PM, Theoretical",
    "Foundations of Natural Language Processing, 3, Online, David, Wednesday 2PM, Theoretical",
    "Advanced Machine Learning, 3, Online, John Wick, Wednesday 4PM, Technical",
    "Advanced Machine Learning, 3, Online, John Wick, Friday 4PM, Technical",
    "Advanced Machine Learning, 3, InCampus, Jane, Wednesday 4PM, Technical",
    "Advanced Machine Learning, 3, InCampus, John Wick, Thursday 4PM, Technical",
    "Web Development Fundamentals, 3, InCampus, Tom Cruise, Monday 4PM, Practical",
    "Web Development Fundamentals, 3, InCampus, Tom Cruise, Tuesday 4PM, Practical",
    "Web Development Fundamentals, 3, InCampus, Tom Cruise, Thursday 4PM, Practical",
    "Web Development Fundamentals, 3, Online, Tom Cruise, Friday 4PM, Practical",
    "Algorithms, 5, InCampus, Jessie J, Monday 10AM, Theoretical",
    "Algorithms, 5, InCampus, Jessie J, Tuesday 10AM, Theoretical",
    "Algorithms, 5, InCampus, Jessie J, Wednesday 2PM, Theoretical",
    "Algorithms, 5, InCampus, Jessie J, Friday 2PM, Theoretical",
    "Operating Systems, 3, InCampus, Lady Gaga, Monday 8AM, Technical",
    "Operating Systems, 3, InCampus, Lady Gaga, Tuesday 8AM, Technical",
    "Operating Systems, 3, InCampus, Lady Gaga, Friday 8AM, Technical",
    "Computer Graphics, 3, InCampus, John Mayer, Monday 6PM, Practical",
    "Computer Graphics, 3, InCampus, John Mayer, Tuesday 6PM, Practical",
    "Computer Graphics, 3, InCampus, John Mayer, Wednesday 6PM, Practical",
    "Cybersecurity, 3, Online, Donald, Monday 8PM, Technical",
    "Cybersecurity, 3, Online, Donald, Friday 8PM, Technical",
];

#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Parse and validate every record. Errors carry the 1-based line number.
    pub fn from_records(records: &[&str]) -> Result<Self> {
        let mut courses = Vec::with_capacity(records.len());
        for (idx, raw) in records.iter().enumerate() {
            let course = parse_record(raw).map_err(|e| CourseError::Record { line: idx + 1, source: Box::new(e) })?;
            courses.push(course);
        }
        info!("catalog loaded: {} sections", courses.len());
        Ok(Catalog { courses })
    }

    pub fn fall() -> Result<Self> {
        Catalog::from_records(FALL_CATALOG)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Distinct course names in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.courses {
            if !out.contains(&c.name()) {
                out.push(c.name());
            }
        }
        out
    }

    /// Distinct instructors in first-seen order.
    pub fn instructors(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.courses {
            if !out.contains(&c.instructor()) {
                out.push(c.instructor());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fall_catalog_loads() {
        let catalog = Catalog::fall().expect("fall catalog is valid");
        assert_eq!(catalog.len(), FALL_CATALOG.len());
        assert_eq!(catalog.names().len(), 10);
        assert_eq!(catalog.names()[0], "Python");
    }

    #[test]
    fn test_bad_record_reports_line() {
        let records = ["Python, 5, InCampus, Amy, Thursday 4PM, Technical", "Java, 5, InCampus, Jane, Monday 10XM, Technical"];
        match Catalog::from_records(&records) {
            Err(CourseError::Record { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(*source, CourseError::TimeParse { .. }));
            }
            other => panic!("expected record error, got {:?}", other),
        }
    }
}
