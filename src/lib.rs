// Root of the `courseplan` crate.
// Exposes the course model, the catalog, the selection pipeline and the
// advisory, plus `run_session`, which drives the interactive enrollment flow.
pub mod advisory;
pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod input;
pub mod models;
pub mod report;
pub mod session;

pub use errors::{CourseError, Result};
pub use session::run_session;
