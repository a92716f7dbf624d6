use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigOverrides, EngagementConfig};
use crate::error::PlanError;
use crate::model::{
    Milestone, MigrationObject, Module, ModuleOverview, ParseEnumError, Task, TaskKind,
    WeeklyAllocation,
};

/// Upper bound for a single task's lead or intern hours.
pub const MAX_TASK_HOURS: u32 = 100;

/// One engagement's complete plan: session figures plus the itemized tables.
///
/// The plan is a plain value. Loading, editing, and reporting all happen on
/// an owned copy; nothing is persisted unless the caller saves explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPlan {
    #[serde(default)]
    pub config: EngagementConfig,
    #[serde(default)]
    pub objects: Vec<MigrationObject>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub module_overviews: Vec<ModuleOverview>,
    #[serde(default)]
    pub resources: WeeklyAllocation,
}

impl ProjectPlan {
    /// The bundled baseline engagement.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            config: crate::seed::config(),
            objects: crate::seed::objects(),
            tasks: crate::seed::tasks(),
            milestones: crate::seed::milestones(),
            module_overviews: crate::seed::module_overviews(),
            resources: crate::seed::allocation(),
        }
    }

    /// Load a plan from a TOML file.
    ///
    /// Absent tables fall back to their defaults, so a file holding only
    /// `[config]` is a valid, if empty, plan.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse plan file {}", path.display()))
    }

    /// Write the plan as pretty TOML, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize plan")?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write plan file {}", path.display()))
    }

    /// Apply session overrides to this copy of the plan.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        self.config = self.config.apply(overrides);
    }

    /// Edit one task row in place, all fields or none.
    ///
    /// `row` is the 1-based position shown in the task table. The patch is
    /// validated in full before any field is written, so a failed call
    /// leaves the task untouched.
    ///
    /// # Errors
    ///
    /// [`PlanError::EmptyPatch`] when the patch sets nothing,
    /// [`PlanError::TaskIndexOutOfRange`] for a bad row,
    /// [`PlanError::WeekOutOfRange`] for a week outside the plan duration
    /// and [`PlanError::HoursOutOfRange`] for hours above
    /// [`MAX_TASK_HOURS`].
    pub fn patch_task(&mut self, row: usize, patch: &TaskPatch) -> Result<(), PlanError> {
        if patch.is_empty() {
            return Err(PlanError::EmptyPatch);
        }
        if row == 0 || row > self.tasks.len() {
            return Err(PlanError::TaskIndexOutOfRange {
                index: row,
                len: self.tasks.len(),
            });
        }
        if let Some(week) = patch.week {
            if week == 0 || week > self.config.duration_weeks {
                return Err(PlanError::WeekOutOfRange {
                    week,
                    max: self.config.duration_weeks,
                });
            }
        }
        let hour_fields = [
            ("lead_hours", patch.lead_hours),
            ("intern_hours", patch.intern_hours),
        ];
        for (field, value) in hour_fields
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| (field, value)))
        {
            if value > MAX_TASK_HOURS {
                return Err(PlanError::HoursOutOfRange {
                    field,
                    value,
                    max: MAX_TASK_HOURS,
                });
            }
        }

        let task = &mut self.tasks[row - 1];
        if let Some(week) = patch.week {
            task.week = week;
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(lead_hours) = patch.lead_hours {
            task.lead_hours = lead_hours;
        }
        if let Some(intern_hours) = patch.intern_hours {
            task.intern_hours = intern_hours;
        }
        if let Some(kind) = patch.kind {
            task.kind = kind;
        }
        if let Some(module) = patch.module {
            task.module = module;
        }
        Ok(())
    }
}

/// A partial task edit. Unset fields keep their current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    pub week: Option<u32>,
    pub description: Option<String>,
    pub lead_hours: Option<u32>,
    pub intern_hours: Option<u32>,
    pub kind: Option<TaskKind>,
    pub module: Option<Module>,
}

impl TaskPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.week.is_none()
            && self.description.is_none()
            && self.lead_hours.is_none()
            && self.intern_hours.is_none()
            && self.kind.is_none()
            && self.module.is_none()
    }

    /// Apply one `FIELD=VALUE` assignment using the task table's column
    /// names: `week`, `task`, `lead_hours`, `intern_hours`, `type`,
    /// `module`.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownField`] for an unrecognized field name and
    /// [`PlanError::Parse`] for a value the field cannot hold.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), PlanError> {
        match field {
            "week" => self.week = Some(parse_number(value, "week number")?),
            "task" => self.description = Some(value.to_owned()),
            "lead_hours" => self.lead_hours = Some(parse_number(value, "lead hours")?),
            "intern_hours" => self.intern_hours = Some(parse_number(value, "intern hours")?),
            "type" => self.kind = Some(value.parse()?),
            "module" => self.module = Some(value.parse()?),
            _ => {
                return Err(PlanError::UnknownField {
                    field: field.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn parse_number(value: &str, expected: &'static str) -> Result<u32, PlanError> {
    value.trim().parse().map_err(|_| {
        PlanError::Parse(ParseEnumError {
            expected,
            got: value.to_owned(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_tables_have_the_authored_shape() {
        let plan = ProjectPlan::seed();
        assert_eq!(plan.config, EngagementConfig::default());
        assert_eq!(plan.objects.len(), 62);
        assert_eq!(plan.tasks.len(), 30);
        assert_eq!(plan.milestones.len(), 5);
        assert_eq!(plan.module_overviews.len(), 4);
        assert_eq!(plan.resources.lead.len(), 14);
        assert_eq!(plan.resources.intern.len(), 14);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/plan.toml");

        let plan = ProjectPlan::seed();
        plan.save(&path).unwrap();
        let loaded = ProjectPlan::load(&path).unwrap();
        assert_eq!(loaded, plan);
    }

    #[test]
    fn load_reports_the_missing_path() {
        let err = ProjectPlan::load(Path::new("/nonexistent/plan.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/plan.toml"));
    }

    #[test]
    fn minimal_file_loads_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.toml");
        std::fs::write(&path, "[config]\nlead_hours = 300\n").unwrap();

        let plan = ProjectPlan::load(&path).unwrap();
        assert_eq!(plan.config.lead_hours, 300);
        assert_eq!(plan.config.intern_hours, 213);
        assert!(plan.objects.is_empty());
        assert!(plan.tasks.is_empty());
    }

    #[test]
    fn overrides_touch_only_the_session_figures() {
        let mut plan = ProjectPlan::seed();
        plan.apply_overrides(ConfigOverrides {
            lead_hours: Some(400),
            ..ConfigOverrides::default()
        });
        assert_eq!(plan.config.lead_hours, 400);
        assert_eq!(plan.tasks, ProjectPlan::seed().tasks);
    }

    #[test]
    fn patch_edits_the_one_based_row() {
        let mut plan = ProjectPlan::seed();
        let patch = TaskPatch {
            week: Some(2),
            lead_hours: Some(12),
            ..TaskPatch::default()
        };
        plan.patch_task(1, &patch).unwrap();
        assert_eq!(plan.tasks[0].week, 2);
        assert_eq!(plan.tasks[0].lead_hours, 12);
        assert_eq!(plan.tasks[0].description, "Project kickoff & environment setup");
    }

    #[test]
    fn patch_rejects_row_zero_and_past_the_end() {
        let mut plan = ProjectPlan::seed();
        let patch = TaskPatch {
            week: Some(2),
            ..TaskPatch::default()
        };

        assert_eq!(plan.patch_task(0, &patch).unwrap_err().code(), "P1002");
        assert_eq!(plan.patch_task(31, &patch).unwrap_err().code(), "P1002");
    }

    #[test]
    fn patch_validates_before_writing_anything() {
        let mut plan = ProjectPlan::seed();
        let before = plan.tasks[4].clone();
        let patch = TaskPatch {
            description: Some("renamed".to_owned()),
            week: Some(13),
            ..TaskPatch::default()
        };

        assert_eq!(plan.patch_task(5, &patch).unwrap_err().code(), "P1003");
        assert_eq!(plan.tasks[4], before);
    }

    #[test]
    fn patch_enforces_the_hour_ceiling() {
        let mut plan = ProjectPlan::seed();
        let patch = TaskPatch {
            intern_hours: Some(101),
            ..TaskPatch::default()
        };

        let err = plan.patch_task(1, &patch).unwrap_err();
        assert_eq!(err.code(), "P1004");
        assert!(err.to_string().contains("intern_hours"));

        let patch = TaskPatch {
            intern_hours: Some(100),
            ..TaskPatch::default()
        };
        plan.patch_task(1, &patch).unwrap();
        assert_eq!(plan.tasks[0].intern_hours, 100);
    }

    #[test]
    fn empty_patch_is_rejected() {
        let mut plan = ProjectPlan::seed();
        let err = plan.patch_task(1, &TaskPatch::default()).unwrap_err();
        assert_eq!(err.code(), "P1005");
    }

    #[test]
    fn assignments_parse_into_patch_fields() {
        let mut patch = TaskPatch::default();
        patch.set("week", "3").unwrap();
        patch.set("task", "Re-scoped work").unwrap();
        patch.set("lead_hours", "18").unwrap();
        patch.set("type", "testing").unwrap();
        patch.set("module", "payroll-data").unwrap();

        assert_eq!(patch.week, Some(3));
        assert_eq!(patch.description.as_deref(), Some("Re-scoped work"));
        assert_eq!(patch.lead_hours, Some(18));
        assert_eq!(patch.kind, Some(TaskKind::Testing));
        assert_eq!(patch.module, Some(Module::PayrollData));
    }

    #[test]
    fn assignments_reject_unknown_fields_and_bad_values() {
        let mut patch = TaskPatch::default();

        let err = patch.set("owner", "kim").unwrap_err();
        assert_eq!(err.code(), "P1006");

        let err = patch.set("week", "soon").unwrap_err();
        assert_eq!(err.code(), "P1007");
        assert!(err.to_string().contains("soon"));

        let err = patch.set("module", "finance").unwrap_err();
        assert_eq!(err.code(), "P1007");
    }
}
