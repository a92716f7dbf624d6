//! Typed records for the plan data model.
//!
//! Every axis the source plan keyed by ad-hoc strings is a closed enum here:
//! unknown values fail at parse time instead of silently creating new groups.

pub mod milestone;
pub mod object;
pub mod task;

pub use milestone::{Milestone, ModuleOverview, WeeklyAllocation};
pub use object::{Category, Complexity, MigrationObject};
pub use task::{Module, Task, TaskKind};

use std::fmt;

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}
