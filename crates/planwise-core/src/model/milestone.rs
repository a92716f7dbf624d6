use serde::{Deserialize, Serialize};

use super::object::Category;

/// A billing milestone with its authored staffing figures.
///
/// Milestone hours are hand-entered by the engagement lead and carry no
/// computed tie to the task grid; `pw audit` compares them against the
/// recomputed task sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    /// Display label such as `"W1-W4"`. Never parsed into a numeric range.
    pub week_range: String,
    pub lead_hours: u32,
    pub intern_hours: u32,
    /// Authored to sum to 100 across all milestones; the audit checks it.
    pub billing_percent: u8,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

impl Milestone {
    /// Combined hours across both labor pools.
    #[must_use]
    pub const fn total_hours(&self) -> u32 {
        self.lead_hours + self.intern_hours
    }
}

/// Authored per-category summary card from the module-breakdown view.
///
/// Kept distinct from the recomputed [`crate::aggregate::CategorySummary`]
/// so drift between authored and recomputed figures stays observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOverview {
    pub category: Category,
    pub objects: u32,
    /// Display label such as `"W3-W4"`.
    pub weeks: String,
    pub effort_hours: u32,
}

/// Authored weekly staffing series from the resource-allocation view.
///
/// The two series must be equal length; mismatched plans are rejected when
/// the weekly curve is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAllocation {
    pub lead: Vec<u32>,
    pub intern: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::{Milestone, ModuleOverview, WeeklyAllocation};
    use crate::model::Category;

    #[test]
    fn milestone_total_hours() {
        let milestone = Milestone {
            name: "M1: Architecture & Foundation".to_string(),
            week_range: "W1-W4".to_string(),
            lead_hours: 100,
            intern_hours: 50,
            billing_percent: 25,
            deliverables: vec!["Project Setup & Requirements Package".to_string()],
        };
        assert_eq!(milestone.total_hours(), 150);
    }

    #[test]
    fn milestone_deliverables_default_to_empty() {
        let milestone: Milestone = toml::from_str(
            r#"
            name = "M3: Employee Data Financial"
            week_range = "W7"
            lead_hours = 60
            intern_hours = 30
            billing_percent = 15
            "#,
        )
        .unwrap();
        assert!(milestone.deliverables.is_empty());
    }

    #[test]
    fn module_overview_roundtrips_through_toml() {
        let overview = ModuleOverview {
            category: Category::PayrollData,
            objects: 9,
            weeks: "W8".to_string(),
            effort_hours: 110,
        };
        let serialized = toml::to_string(&overview).unwrap();
        let back: ModuleOverview = toml::from_str(&serialized).unwrap();
        assert_eq!(back, overview);
    }

    #[test]
    fn allocation_default_is_empty() {
        let allocation = WeeklyAllocation::default();
        assert!(allocation.lead.is_empty());
        assert!(allocation.intern.is_empty());
    }
}
