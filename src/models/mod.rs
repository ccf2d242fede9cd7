// Core data structures: courses, delivery mode, weekdays and resolved time slots.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::errors::{CourseError, Result};

/// How a course is delivered. Parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    InCampus,
    Online,
}

impl FromStr for Mode {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "incampus" => Ok(Mode::InCampus),
            "online" => Ok(Mode::Online),
            _ => Err(CourseError::Validation { field: "mode", value: s.to_string() }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::InCampus => write!(f, "InCampus"),
            Mode::Online => write!(f, "Online"),
        }
    }
}

/// Teaching days. Only the five weekdays exist in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday];

    /// Monday = 0 ... Friday = 4
    pub fn index(self) -> u8 {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl FromStr for Day {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self> {
        Day::ALL
            .into_iter()
            .find(|d| d.name() == s.trim())
            .ok_or_else(|| CourseError::Validation { field: "day", value: s.to_string() })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical (day, hour-of-day) token used to compare course schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeSlot {
    day: Day,
    hour: u8,
}

impl TimeSlot {
    pub fn new(day: Day, hour: u8) -> Self {
        TimeSlot { day, hour }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn day_index(&self) -> u8 {
        self.day.index()
    }

    /// 0-23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn hour_of_week(&self) -> u32 {
        u32::from(self.day.index()) * 24 + u32::from(self.hour)
    }

    /// Resolve a `<hour><AM|PM>` time on `day` into a (day, hour 0-23) slot.
    ///
    /// The hour is taken modulo 12 and PM adds 12, so "12AM" is hour 0 and
    /// "12PM" is hour 12.
    pub fn resolve(day: Day, time: &str) -> Result<Self> {
        let t = time.trim();
        let split = t
            .len()
            .checked_sub(2)
            .filter(|&i| i > 0 && t.is_char_boundary(i))
            .ok_or_else(|| CourseError::time_parse(time, "expected <hour>AM or <hour>PM"))?;
        let (digits, marker) = t.split_at(split);
        let offset = match marker.to_ascii_uppercase().as_str() {
            "AM" => 0,
            "PM" => 12,
            other => {
                return Err(CourseError::time_parse(time, format!("unknown meridiem marker '{}'", other)));
            }
        };
        let raw: u32 = digits
            .parse()
            .map_err(|_| CourseError::time_parse(time, format!("'{}' is not an hour", digits)))?;
        // raw % 12 < 12, so the sum always fits in 0-23
        let hour = (raw % 12) as u8 + offset;
        Ok(TimeSlot::new(day, hour))
    }

    /// Anchor the slot on the week that starts at 2023-01-01 00:00.
    pub fn to_datetime(&self) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap_or_default()
            .and_time(Default::default());
        base + Duration::hours(i64::from(self.hour_of_week()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", self.day, self.hour)
    }
}

/// One offered section of a course. Immutable once built.
///
/// The time is resolved when the course is built, so every `Course` carries
/// a valid slot and comparisons between courses cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    name: String,
    credits: u32,
    mode: Mode,
    instructor: String,
    day: Day,
    time: String,
    category: String,
    slot: TimeSlot,
}

impl Course {
    /// Fails with `CourseError::TimeParse` when `time` is not `<hour>AM` / `<hour>PM`.
    pub fn new(
        name: impl Into<String>,
        credits: u32,
        mode: Mode,
        instructor: impl Into<String>,
        day: Day,
        time: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self> {
        let time = time.into();
        let slot = TimeSlot::resolve(day, &time)?;
        Ok(Course {
            name: name.into(),
            credits,
            mode,
            instructor: instructor.into(),
            day,
            time,
            category: category.into(),
            slot,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_online(&self) -> bool {
        self.mode == Mode::Online
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn day(&self) -> Day {
        self.day
    }

    /// Raw time as written in the catalog, e.g. "4PM".
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The (day, hour 0-23) slot resolved at construction.
    pub fn time_slot(&self) -> TimeSlot {
        self.slot
    }

    /// True when both courses fall on the same day and resolved hour.
    pub fn occurs_same_time(&self, other: &Course) -> bool {
        self.day == other.day && self.slot == other.slot
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {} {}, {}",
            self.name, self.credits, self.mode, self.instructor, self.day, self.time, self.category
        )
    }
}
