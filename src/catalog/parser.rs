use crate::errors::{CourseError, Result};
use crate::models::{Course, Day, Mode};

const FIELD_SEPARATOR: &str = ", ";
const FIELD_COUNT: usize = 6;

/// Parse one catalog record into a `Course`.
///
/// Format: `Name, Credits, Mode, Instructor, Day Time, Category`.
/// The schedule field is split on its last space, so the day must be a
/// single token. The time is kept as written and resolved into a slot; an
/// unreadable time fails with `CourseError::TimeParse`.
pub fn parse_record(raw: &str) -> Result<Course> {
    let fields: Vec<&str> = raw.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CourseError::malformed(
            raw,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let name = fields[0];
    let credits: u32 = fields[1]
        .trim()
        .parse()
        .map_err(|_| CourseError::malformed(raw, format!("credits '{}' is not a number", fields[1])))?;
    let mode: Mode = fields[2].parse()?;
    let instructor = fields[3];
    let (day, time) = fields[4]
        .rsplit_once(' ')
        .ok_or_else(|| CourseError::malformed(raw, format!("schedule '{}' has no day/time separator", fields[4])))?;
    let day: Day = day.parse()?;
    let category = fields[5];

    Course::new(name, credits, mode, instructor, day, time, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_fields() {
        let c = parse_record("Test Course, 4, Online, Test Instructor, Friday 3PM, Technical").unwrap();
        assert_eq!(c.name(), "Test Course");
        assert_eq!(c.credits(), 4);
        assert_eq!(c.mode(), Mode::Online);
        assert_eq!(c.instructor(), "Test Instructor");
        assert_eq!(c.day(), Day::Friday);
        assert_eq!(c.time(), "3PM");
        assert_eq!(c.category(), "Technical");
    }

    #[test]
    fn test_parse_record_wrong_field_count() {
        let err = parse_record("Python, 5, InCampus, Amy, Thursday 4PM").unwrap_err();
        assert!(matches!(err, CourseError::MalformedRecord { .. }));
        let err = parse_record("Python, 5, InCampus, Amy, Thursday 4PM, Technical, Extra").unwrap_err();
        assert!(matches!(err, CourseError::MalformedRecord { .. }));
    }

    #[test]
    fn test_parse_record_bad_credits_and_schedule() {
        assert!(matches!(
            parse_record("Python, five, InCampus, Amy, Thursday 4PM, Technical"),
            Err(CourseError::MalformedRecord { .. })
        ));
        assert!(matches!(
            parse_record("Python, 5, InCampus, Amy, Thursday4PM, Technical"),
            Err(CourseError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_parse_record_unknown_day_or_mode() {
        assert!(matches!(
            parse_record("Python, 5, InCampus, Amy, Sunday 4PM, Technical"),
            Err(CourseError::Validation { field: "day", .. })
        ));
        assert!(matches!(
            parse_record("Python, 5, Hybrid, Amy, Monday 4PM, Technical"),
            Err(CourseError::Validation { field: "mode", .. })
        ));
    }

    #[test]
    fn test_parse_record_rejects_unreadable_time() {
        assert!(matches!(
            parse_record("Python, 5, InCampus, Amy, Monday noon, Technical"),
            Err(CourseError::TimeParse { .. })
        ));
    }
}
