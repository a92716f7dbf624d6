use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::ParseEnumError;

/// The five kinds of plan task (the `type` column of the source table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Setup,
    Development,
    Testing,
    Documentation,
    Deployment,
}

impl TaskKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
            Self::Deployment => "deployment",
        }
    }

    /// Human-facing label used in task tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Development => "Development",
            Self::Testing => "Testing",
            Self::Documentation => "Documentation",
            Self::Deployment => "Deployment",
        }
    }
}

/// Where a task sits in the delivery plan. A superset of [`super::Category`]:
/// tasks also cover setup, architecture, integration, and deployment phases
/// that own no migration objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Setup,
    Architecture,
    FoundationData,
    EmployeeData,
    PayrollData,
    TimeData,
    Integration,
    Deployment,
}

impl Module {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Architecture => "architecture",
            Self::FoundationData => "foundation-data",
            Self::EmployeeData => "employee-data",
            Self::PayrollData => "payroll-data",
            Self::TimeData => "time-data",
            Self::Integration => "integration",
            Self::Deployment => "deployment",
        }
    }

    /// Human-facing label used in task tables and bar charts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Architecture => "Architecture",
            Self::FoundationData => "Foundation Data",
            Self::EmployeeData => "Employee Data",
            Self::PayrollData => "Payroll Data",
            Self::TimeData => "Time Data",
            Self::Integration => "Integration",
            Self::Deployment => "Deployment",
        }
    }
}

/// One row of the editable plan-task grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Plan week, 1-based.
    pub week: u32,
    pub description: String,
    pub lead_hours: u32,
    pub intern_hours: u32,
    /// Serialized as `type` to match the source table's column name.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub module: Module,
}

impl Task {
    #[must_use]
    pub fn new(
        week: u32,
        description: &str,
        lead_hours: u32,
        intern_hours: u32,
        kind: TaskKind,
        module: Module,
    ) -> Self {
        Self {
            week,
            description: description.to_string(),
            lead_hours,
            intern_hours,
            kind,
            module,
        }
    }

    /// Combined hours across both labor pools.
    #[must_use]
    pub const fn total_hours(&self) -> u32 {
        self.lead_hours + self.intern_hours
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = super::normalize(s);
        match normalized.as_str() {
            "setup" => Ok(Self::Setup),
            "development" => Ok(Self::Development),
            "testing" => Ok(Self::Testing),
            "documentation" => Ok(Self::Documentation),
            "deployment" => Ok(Self::Deployment),
            _ => Err(ParseEnumError {
                expected: "task kind",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Module {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = super::normalize(s);
        match normalized.as_str() {
            "setup" => Ok(Self::Setup),
            "architecture" => Ok(Self::Architecture),
            "foundation-data" | "foundation data" => Ok(Self::FoundationData),
            "employee-data" | "employee data" => Ok(Self::EmployeeData),
            "payroll-data" | "payroll data" => Ok(Self::PayrollData),
            "time-data" | "time data" => Ok(Self::TimeData),
            "integration" => Ok(Self::Integration),
            "deployment" => Ok(Self::Deployment),
            _ => Err(ParseEnumError {
                expected: "module",
                got: s.to_string(),
            }),
        }
    }
}
