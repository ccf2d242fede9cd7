//! Runtime settings read from the environment (and `.env` when present).
//!
//! | variable                 | default |
//! |--------------------------|---------|
//! | `COURSEPLAN_MAX_CREDITS` | 10      |
//! | `COURSEPLAN_MAX_ONLINE`  | 1       |
//! | `COURSEPLAN_SEMESTER`    | fall    |
//! | `COURSEPLAN_OUTPUT`      | text    |

use std::env;
use std::str::FromStr;

use crate::algorithm::SelectionLimits;
use crate::errors::{CourseError, Result};

pub const MAX_CREDITS_KEY: &str = "COURSEPLAN_MAX_CREDITS";
pub const MAX_ONLINE_KEY: &str = "COURSEPLAN_MAX_ONLINE";
pub const SEMESTER_KEY: &str = "COURSEPLAN_SEMESTER";
pub const OUTPUT_KEY: &str = "COURSEPLAN_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CourseError::Config { key: OUTPUT_KEY.to_string(), value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_credits: u32,
    pub max_online: usize,
    /// Only semester with an offering.
    pub semester: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        let limits = SelectionLimits::default();
        Config {
            max_credits: limits.max_credits,
            max_online: limits.max_online,
            semester: "fall".to_string(),
            output: OutputFormat::Text,
        }
    }
}

// load .env if present; a missing file is not an error
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(v) = lookup(MAX_CREDITS_KEY) {
            cfg.max_credits = parse_value(MAX_CREDITS_KEY, &v)?;
        }
        if let Some(v) = lookup(MAX_ONLINE_KEY) {
            cfg.max_online = parse_value(MAX_ONLINE_KEY, &v)?;
        }
        if let Some(v) = lookup(SEMESTER_KEY) {
            let v = v.trim();
            if v.is_empty() {
                return Err(CourseError::Config { key: SEMESTER_KEY.to_string(), value: v.to_string() });
            }
            cfg.semester = v.to_lowercase();
        }
        if let Some(v) = lookup(OUTPUT_KEY) {
            cfg.output = v.parse()?;
        }
        Ok(cfg)
    }

    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits { max_credits: self.max_credits, max_online: self.max_online }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CourseError::Config { key: key.to_string(), value: value.to_string() })
}
