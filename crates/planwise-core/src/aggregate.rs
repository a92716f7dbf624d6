//! Pure aggregation over plan tables.
//!
//! Every function here recomputes from the itemized rows. Authored headline
//! figures live in [`crate::config::EngagementConfig`] and are compared
//! against these results by the audit, never mixed into them.

use serde::Serialize;

use crate::error::PlanError;
use crate::model::{Category, MigrationObject, Module, Task, TaskKind};

/// Per-category rollup of the migration object register.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: u32,
    pub total_effort: u32,
    pub avg_effort: f64,
}

/// Summarize in-scope objects per category, in first-occurrence order.
///
/// Out-of-scope objects contribute neither count nor effort. Categories with
/// no in-scope objects are omitted entirely, so `avg_effort` is always over a
/// non-zero count.
#[must_use]
pub fn summarize_by_category(objects: &[MigrationObject]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for object in objects.iter().filter(|object| object.in_scope) {
        match summaries
            .iter_mut()
            .find(|summary| summary.category == object.category)
        {
            Some(summary) => {
                summary.count += 1;
                summary.total_effort += object.final_effort;
            }
            None => summaries.push(CategorySummary {
                category: object.category,
                count: 1,
                total_effort: object.final_effort,
                avg_effort: 0.0,
            }),
        }
    }

    for summary in &mut summaries {
        summary.avg_effort = f64::from(summary.total_effort) / f64::from(summary.count);
    }

    summaries
}

/// Reorder summaries by object count, largest first. Ties keep their
/// existing relative order.
pub fn sort_by_count_desc(summaries: &mut [CategorySummary]) {
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Conjunctive task filter. Absent fields match everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskFilter {
    pub week: Option<u32>,
    pub module: Option<Module>,
    pub kind: Option<TaskKind>,
}

impl TaskFilter {
    /// Check one task against every set criterion.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        self.week.is_none_or(|week| task.week == week)
            && self.module.is_none_or(|module| task.module == module)
            && self.kind.is_none_or(|kind| task.kind == kind)
    }
}

/// Select tasks matching every set criterion, preserving plan order.
///
/// An empty result is a valid answer, not an error.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Per-module rollup of task hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleHours {
    pub module: Module,
    pub lead_hours: u32,
    pub intern_hours: u32,
    pub total_hours: u32,
}

/// Sum lead and intern hours per module, in first-occurrence order.
///
/// Accepts any task iterator so filtered selections can be rolled up the
/// same way as the full table.
#[must_use]
pub fn hours_by_module<'a, I>(tasks: I) -> Vec<ModuleHours>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut rollup: Vec<ModuleHours> = Vec::new();

    for task in tasks {
        match rollup.iter_mut().find(|entry| entry.module == task.module) {
            Some(entry) => {
                entry.lead_hours += task.lead_hours;
                entry.intern_hours += task.intern_hours;
                entry.total_hours += task.total_hours();
            }
            None => rollup.push(ModuleHours {
                module: task.module,
                lead_hours: task.lead_hours,
                intern_hours: task.intern_hours,
                total_hours: task.total_hours(),
            }),
        }
    }

    rollup
}

/// One week of the resource allocation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekLoad {
    pub week: u32,
    pub lead: u32,
    pub intern: u32,
    pub total: u32,
}

/// The full allocation curve with recomputed totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceCurve {
    pub weeks: Vec<WeekLoad>,
    pub total_lead: u32,
    pub total_intern: u32,
    pub total_hours: u32,
    /// Week number of the highest combined load; the earliest such week
    /// when several tie. `None` for an empty curve.
    pub peak_week: Option<u32>,
}

/// Zip the lead and intern series into a weekly curve.
///
/// Weeks are numbered from 1 in series order.
///
/// # Errors
///
/// Returns [`PlanError::WeekSeriesMismatch`] when the two series have
/// different lengths; a partial zip would silently drop hours.
pub fn weekly_resource_curve(lead: &[u32], intern: &[u32]) -> Result<ResourceCurve, PlanError> {
    if lead.len() != intern.len() {
        return Err(PlanError::WeekSeriesMismatch {
            lead: lead.len(),
            intern: intern.len(),
        });
    }

    let weeks: Vec<WeekLoad> = (1u32..)
        .zip(lead.iter().zip(intern))
        .map(|(week, (&lead, &intern))| WeekLoad {
            week,
            lead,
            intern,
            total: lead + intern,
        })
        .collect();

    let total_lead = weeks.iter().map(|week| week.lead).sum();
    let total_intern = weeks.iter().map(|week| week.intern).sum();

    // max_by_key keeps the last maximum; ties must resolve to the earliest week
    let mut peak_week: Option<u32> = None;
    let mut peak_total = 0;
    for week in &weeks {
        if peak_week.is_none() || week.total > peak_total {
            peak_week = Some(week.week);
            peak_total = week.total;
        }
    }

    Ok(ResourceCurve {
        total_lead,
        total_intern,
        total_hours: total_lead + total_intern,
        peak_week,
        weeks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Complexity;

    fn object(name: &str, category: Category, hours: u32) -> MigrationObject {
        MigrationObject::new(name, category, Complexity::Medium, hours)
    }

    fn task(week: u32, kind: TaskKind, module: Module, lead: u32, intern: u32) -> Task {
        Task::new(week, "task", lead, intern, kind, module)
    }

    #[test]
    fn summaries_follow_first_occurrence_order() {
        let objects = vec![
            object("a", Category::EmployeeData, 10),
            object("b", Category::FoundationData, 5),
            object("c", Category::EmployeeData, 20),
        ];

        let summaries = summarize_by_category(&objects);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].category, Category::EmployeeData);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].total_effort, 30);
        assert!((summaries[0].avg_effort - 15.0).abs() < f64::EPSILON);
        assert_eq!(summaries[1].category, Category::FoundationData);
        assert_eq!(summaries[1].count, 1);
    }

    #[test]
    fn out_of_scope_objects_are_excluded() {
        let mut descoped = object("b", Category::FoundationData, 20);
        descoped.in_scope = false;

        let objects = vec![object("a", Category::FoundationData, 5), descoped];
        let summaries = summarize_by_category(&objects);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].count, 1);
        assert_eq!(summaries[0].total_effort, 5);
    }

    #[test]
    fn category_with_no_in_scope_objects_is_omitted() {
        let mut descoped = object("a", Category::TimeData, 15);
        descoped.in_scope = false;

        let summaries = summarize_by_category(&[descoped]);
        assert!(summaries.is_empty());
    }

    #[test]
    fn count_sort_is_descending_and_stable() {
        let objects = vec![
            object("a", Category::FoundationData, 5),
            object("b", Category::EmployeeData, 10),
            object("c", Category::EmployeeData, 10),
            object("d", Category::PayrollData, 5),
        ];

        let mut summaries = summarize_by_category(&objects);
        sort_by_count_desc(&mut summaries);

        assert_eq!(summaries[0].category, Category::EmployeeData);
        // Foundation and Payroll tie at one object each; plan order holds.
        assert_eq!(summaries[1].category, Category::FoundationData);
        assert_eq!(summaries[2].category, Category::PayrollData);
    }

    #[test]
    fn filters_are_conjunctive() {
        let tasks = vec![
            task(8, TaskKind::Development, Module::PayrollData, 40, 0),
            task(8, TaskKind::Testing, Module::PayrollData, 15, 20),
            task(9, TaskKind::Development, Module::TimeData, 25, 0),
        ];

        let filter = TaskFilter {
            week: Some(8),
            module: Some(Module::PayrollData),
            kind: Some(TaskKind::Testing),
        };
        let matched = filter_tasks(&tasks, filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].intern_hours, 20);
    }

    #[test]
    fn default_filter_matches_everything_in_order() {
        let tasks = vec![
            task(1, TaskKind::Setup, Module::Setup, 10, 5),
            task(2, TaskKind::Development, Module::Architecture, 15, 0),
        ];

        let matched = filter_tasks(&tasks, TaskFilter::default());
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].week, 1);
        assert_eq!(matched[1].week, 2);
    }

    #[test]
    fn unmatched_filter_yields_empty_not_error() {
        let tasks = vec![task(1, TaskKind::Setup, Module::Setup, 10, 5)];
        let filter = TaskFilter {
            week: Some(99),
            ..TaskFilter::default()
        };
        assert!(filter_tasks(&tasks, filter).is_empty());
    }

    #[test]
    fn module_hours_group_in_first_occurrence_order() {
        let tasks = vec![
            task(1, TaskKind::Setup, Module::Setup, 10, 5),
            task(2, TaskKind::Development, Module::Architecture, 30, 10),
            task(1, TaskKind::Documentation, Module::Setup, 8, 10),
        ];

        let rollup = hours_by_module(&tasks);
        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].module, Module::Setup);
        assert_eq!(rollup[0].lead_hours, 18);
        assert_eq!(rollup[0].intern_hours, 15);
        assert_eq!(rollup[0].total_hours, 33);
        assert_eq!(rollup[1].module, Module::Architecture);
        assert_eq!(rollup[1].total_hours, 40);
    }

    #[test]
    fn module_hours_accepts_filtered_selections() {
        let tasks = vec![
            task(1, TaskKind::Setup, Module::Setup, 10, 5),
            task(2, TaskKind::Development, Module::Architecture, 30, 10),
        ];

        let selection = filter_tasks(&tasks, TaskFilter {
            week: Some(2),
            ..TaskFilter::default()
        });
        let rollup = hours_by_module(selection);
        assert_eq!(rollup.len(), 1);
        assert_eq!(rollup[0].module, Module::Architecture);
    }

    #[test]
    fn curve_zips_weeks_and_recomputes_totals() {
        let curve = weekly_resource_curve(&[40, 35, 10], &[5, 15, 15]).unwrap();
        assert_eq!(curve.weeks.len(), 3);
        assert_eq!(curve.weeks[0], WeekLoad {
            week: 1,
            lead: 40,
            intern: 5,
            total: 45,
        });
        assert_eq!(curve.total_lead, 85);
        assert_eq!(curve.total_intern, 35);
        assert_eq!(curve.total_hours, 120);
        assert_eq!(curve.peak_week, Some(2));
    }

    #[test]
    fn peak_picks_the_earliest_of_tied_weeks() {
        let curve = weekly_resource_curve(&[20, 30, 30], &[10, 0, 0]).unwrap();
        assert_eq!(curve.peak_week, Some(1));
    }

    #[test]
    fn empty_curve_has_no_peak() {
        let curve = weekly_resource_curve(&[], &[]).unwrap();
        assert!(curve.weeks.is_empty());
        assert_eq!(curve.total_hours, 0);
        assert_eq!(curve.peak_week, None);
    }

    #[test]
    fn mismatched_series_are_rejected() {
        let err = weekly_resource_curve(&[10, 20], &[5]).unwrap_err();
        assert_eq!(err.code(), "P1001");
        assert!(err.to_string().contains("2"));
        assert!(err.to_string().contains("1"));
    }
}
