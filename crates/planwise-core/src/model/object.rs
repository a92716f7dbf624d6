use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::ParseEnumError;

/// The four migration object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    FoundationData,
    EmployeeData,
    PayrollData,
    TimeData,
}

impl Category {
    const fn as_str(self) -> &'static str {
        match self {
            Self::FoundationData => "foundation-data",
            Self::EmployeeData => "employee-data",
            Self::PayrollData => "payroll-data",
            Self::TimeData => "time-data",
        }
    }

    /// Human-facing label used in tables and metric cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FoundationData => "Foundation Data",
            Self::EmployeeData => "Employee Data",
            Self::PayrollData => "Payroll Data",
            Self::TimeData => "Time Data",
        }
    }

    /// All categories, in the order the engagement plan lists them.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::FoundationData,
            Self::EmployeeData,
            Self::PayrollData,
            Self::TimeData,
        ]
    }
}

/// Migration complexity rating, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
    VeryComplex,
}

impl Complexity {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
            Self::VeryComplex => "very-complex",
        }
    }

    /// Human-facing label used in object tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Medium => "Medium",
            Self::Complex => "Complex",
            Self::VeryComplex => "Very Complex",
        }
    }
}

/// One migratable object in the engagement scope table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationObject {
    pub name: String,
    pub category: Category,
    pub complexity: Complexity,
    /// Estimated hours from the sizing pass.
    pub hours: u32,
    /// Source scope flag (the Y/N column). Out-of-scope objects never
    /// contribute to counts or effort sums.
    #[serde(default = "default_in_scope")]
    pub in_scope: bool,
    /// Agreed effort after scope review.
    pub final_effort: u32,
}

impl MigrationObject {
    /// An in-scope object whose final effort matches the sizing estimate,
    /// which is every row of the seed engagement.
    #[must_use]
    pub fn new(name: &str, category: Category, complexity: Complexity, hours: u32) -> Self {
        Self {
            name: name.to_string(),
            category,
            complexity,
            hours,
            in_scope: true,
            final_effort: hours,
        }
    }
}

const fn default_in_scope() -> bool {
    true
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = super::normalize(s);
        match normalized.as_str() {
            "foundation-data" | "foundation data" | "foundation" => Ok(Self::FoundationData),
            "employee-data" | "employee data" | "employee" => Ok(Self::EmployeeData),
            "payroll-data" | "payroll data" | "payroll" => Ok(Self::PayrollData),
            "time-data" | "time data" | "time" => Ok(Self::TimeData),
            _ => Err(ParseEnumError {
                expected: "category",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Complexity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = super::normalize(s);
        match normalized.as_str() {
            "simple" => Ok(Self::Simple),
            "medium" => Ok(Self::Medium),
            "complex" => Ok(Self::Complex),
            "very-complex" | "very complex" => Ok(Self::VeryComplex),
            _ => Err(ParseEnumError {
                expected: "complexity",
                got: s.to_string(),
            }),
        }
    }
}
