use crate::output::CliError;
use planwise_core::model::{Category, Module, TaskKind};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
    pub suggestion: String,
    pub code: &'static str,
}

impl ValidationError {
    pub fn new(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
        suggestion: impl Into<String>,
        code: &'static str,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
            suggestion: suggestion.into(),
            code,
        }
    }

    pub fn to_cli_error(&self) -> CliError {
        CliError::with_details(
            format!("invalid {} '{}': {}", self.field, self.value, self.reason),
            self.suggestion.clone(),
            self.code,
        )
    }
}

pub fn validate_category(s: &str) -> Result<Category, ValidationError> {
    s.parse().map_err(|_| {
        ValidationError::new(
            "category",
            s,
            "expected one of foundation-data, employee-data, payroll-data, time-data",
            "use --category foundation-data, --category employee-data, etc.",
            "invalid_category",
        )
    })
}

pub fn validate_module(s: &str) -> Result<Module, ValidationError> {
    s.parse().map_err(|_| {
        ValidationError::new(
            "module",
            s,
            "expected one of setup, architecture, foundation-data, employee-data, \
             payroll-data, time-data, integration, deployment",
            "use --module employee-data, --module integration, etc.",
            "invalid_module",
        )
    })
}

pub fn validate_kind(s: &str) -> Result<TaskKind, ValidationError> {
    s.parse().map_err(|_| {
        ValidationError::new(
            "kind",
            s,
            "expected one of setup, development, testing, documentation, deployment",
            "use --kind setup|development|testing|documentation|deployment",
            "invalid_kind",
        )
    })
}

/// Split a `--set` spec into its `(row, field, value)` parts.
///
/// The accepted shape is `ROW:FIELD=VALUE` with a 1-based row number. Field
/// names are trimmed; the value is passed through untouched so the patch layer
/// sees exactly what the caller typed.
pub fn parse_set_spec(spec: &str) -> Result<(usize, &str, &str), ValidationError> {
    let Some((row_part, assignment)) = spec.split_once(':') else {
        return Err(ValidationError::new(
            "set",
            spec,
            "expected ROW:FIELD=VALUE",
            "use --set 3:week=5",
            "invalid_set",
        ));
    };

    let Ok(row) = row_part.trim().parse::<usize>() else {
        return Err(ValidationError::new(
            "set",
            spec,
            "row must be a number",
            "use the row shown in the task table's # column, e.g. --set 3:week=5",
            "invalid_set",
        ));
    };

    let Some((field, value)) = assignment.split_once('=') else {
        return Err(ValidationError::new(
            "set",
            spec,
            "expected ROW:FIELD=VALUE",
            "use --set 3:lead_hours=20",
            "invalid_set",
        ));
    };

    Ok((row, field.trim(), value))
}
