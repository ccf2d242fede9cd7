//! Error types shared by the catalog, the course model and the configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    /// A catalog record does not have the `Name, Credits, Mode, Instructor, Day Time, Category` shape.
    #[error("malformed record '{record}': {reason}")]
    MalformedRecord { record: String, reason: String },

    /// A time string could not be resolved to an hour of the day.
    #[error("cannot parse time '{time}': {reason}")]
    TimeParse { time: String, reason: String },

    /// A field holds a value outside its closed vocabulary (day or mode).
    #[error("invalid {field} '{value}'")]
    Validation { field: &'static str, value: String },

    /// Wraps a record error with its position in the catalog.
    #[error("catalog line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<CourseError>,
    },

    #[error("invalid configuration value for '{key}': '{value}'")]
    Config { key: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CourseError {
    pub(crate) fn malformed(record: &str, reason: impl Into<String>) -> Self {
        CourseError::MalformedRecord {
            record: record.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn time_parse(time: &str, reason: impl Into<String>) -> Self {
        CourseError::TimeParse {
            time: time.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
