use thiserror::Error;

use crate::model::ParseEnumError;

/// Errors produced by plan mutation and aggregation.
///
/// Every variant carries a stable `P####` code for machine parsing and an
/// optional remediation hint for terminal output. Invalid input always fails
/// fast; nothing is clamped or coerced.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("weekly series length mismatch: {lead} lead weeks vs {intern} intern weeks")]
    WeekSeriesMismatch { lead: usize, intern: usize },

    #[error("task index {index} out of range: plan has {len} tasks")]
    TaskIndexOutOfRange { index: usize, len: usize },

    #[error("week {week} out of range: plan runs weeks 1 through {max}")]
    WeekOutOfRange { week: u32, max: u32 },

    #[error("{field} of {value} exceeds the per-task limit of {max}")]
    HoursOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("empty patch: no fields to change")]
    EmptyPatch,

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error(transparent)]
    Parse(#[from] ParseEnumError),
}

impl PlanError {
    /// Stable code identifier (`P####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WeekSeriesMismatch { .. } => "P1001",
            Self::TaskIndexOutOfRange { .. } => "P1002",
            Self::WeekOutOfRange { .. } => "P1003",
            Self::HoursOutOfRange { .. } => "P1004",
            Self::EmptyPatch => "P1005",
            Self::UnknownField { .. } => "P1006",
            Self::Parse(_) => "P1007",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::WeekSeriesMismatch { .. } => {
                Some("Give [resources] lead and intern the same number of weeks.")
            }
            Self::TaskIndexOutOfRange { .. } => {
                Some("Use the 1-based row number shown in the task table's # column.")
            }
            Self::WeekOutOfRange { .. } => None,
            Self::HoursOutOfRange { .. } => Some("Split work above the limit into two tasks."),
            Self::EmptyPatch => Some("Provide at least one FIELD=VALUE pair."),
            Self::UnknownField { .. } => {
                Some("Editable fields: week, task, lead_hours, intern_hours, type, module.")
            }
            Self::Parse(_) => Some("Use one of the documented category/module/type values."),
        }
    }
}
