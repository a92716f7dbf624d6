//! Consistency audit between authored headline figures and itemized tables.
//!
//! The source plan carries its totals twice: once as hand-written summary
//! numbers and once implied by the object, task, milestone, and allocation
//! tables. Those two views disagree in several places. The audit surfaces
//! every disagreement as a warning-level finding; drift never aborts a
//! command unless the caller opts into strict mode.

use serde::Serialize;

use crate::aggregate::{summarize_by_category, weekly_resource_curve};
use crate::plan::ProjectPlan;

/// One authored-vs-computed comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Short machine-friendly check name, e.g. `object-count`.
    pub check: String,
    pub authored: i64,
    pub computed: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Finding {
    #[must_use]
    pub fn is_drift(&self) -> bool {
        self.authored != self.computed
    }
}

/// Compare every authored figure against the tables and return all findings,
/// agreeing and drifting alike.
///
/// Check groups, in report order: object register vs session config, task
/// hours vs session config, milestone rollup vs session config, module
/// overview rows vs the object register, and the resource curve vs session
/// config.
#[must_use]
pub fn audit_plan(plan: &ProjectPlan) -> Vec<Finding> {
    let mut findings = Vec::new();

    object_checks(plan, &mut findings);
    task_checks(plan, &mut findings);
    milestone_checks(plan, &mut findings);
    overview_checks(plan, &mut findings);
    resource_checks(plan, &mut findings);

    for finding in findings.iter().filter(|finding| finding.is_drift()) {
        tracing::warn!(
            check = %finding.check,
            authored = finding.authored,
            computed = finding.computed,
            "authored figure drifts from itemized tables"
        );
    }

    findings
}

fn object_checks(plan: &ProjectPlan, findings: &mut Vec<Finding>) {
    let in_scope = plan
        .objects
        .iter()
        .filter(|object| object.in_scope)
        .count();
    let effort: u32 = plan
        .objects
        .iter()
        .filter(|object| object.in_scope)
        .map(|object| object.final_effort)
        .sum();

    findings.push(check(
        "object-count",
        plan.config.total_objects,
        from_count(plan.objects.len()),
    ));
    findings.push(check(
        "in-scope-count",
        plan.config.in_scope_objects,
        from_count(in_scope),
    ));
    findings.push(check("object-effort-hours", plan.config.total_effort_hours, effort));
}

fn task_checks(plan: &ProjectPlan, findings: &mut Vec<Finding>) {
    let lead: u32 = plan.tasks.iter().map(|task| task.lead_hours).sum();
    let intern: u32 = plan.tasks.iter().map(|task| task.intern_hours).sum();

    findings.push(check("task-lead-hours", plan.config.lead_hours, lead));
    findings.push(check("task-intern-hours", plan.config.intern_hours, intern));
}

fn milestone_checks(plan: &ProjectPlan, findings: &mut Vec<Finding>) {
    let lead: u32 = plan.milestones.iter().map(|m| m.lead_hours).sum();
    let intern: u32 = plan.milestones.iter().map(|m| m.intern_hours).sum();
    let billing: u32 = plan
        .milestones
        .iter()
        .map(|m| u32::from(m.billing_percent))
        .sum();

    findings.push(check("milestone-count", plan.config.milestone_count, from_count(plan.milestones.len())));
    findings.push(check("milestone-lead-hours", plan.config.lead_hours, lead));
    findings.push(check("milestone-intern-hours", plan.config.intern_hours, intern));
    findings.push(check("milestone-billing-percent", 100u32, billing));
}

fn overview_checks(plan: &ProjectPlan, findings: &mut Vec<Finding>) {
    let summaries = summarize_by_category(&plan.objects);

    for overview in &plan.module_overviews {
        let summary = summaries
            .iter()
            .find(|summary| summary.category == overview.category);
        let (count, effort) = summary.map_or((0, 0), |s| (s.count, s.total_effort));

        findings.push(detailed(
            "overview-objects",
            overview.objects,
            count,
            overview.category.label(),
        ));
        findings.push(detailed(
            "overview-effort-hours",
            overview.effort_hours,
            effort,
            overview.category.label(),
        ));
    }
}

fn resource_checks(plan: &ProjectPlan, findings: &mut Vec<Finding>) {
    let Ok(curve) = weekly_resource_curve(&plan.resources.lead, &plan.resources.intern) else {
        findings.push(Finding {
            check: "resource-series-length".to_owned(),
            authored: from_count(plan.resources.lead.len()),
            computed: from_count(plan.resources.intern.len()),
            detail: Some("lead and intern series must cover the same weeks".to_owned()),
        });
        return;
    };

    findings.push(check("resource-lead-hours", plan.config.lead_hours, curve.total_lead));
    findings.push(check("resource-intern-hours", plan.config.intern_hours, curve.total_intern));
    findings.push(check(
        "resource-week-count",
        plan.config.duration_weeks,
        from_count(curve.weeks.len()),
    ));
}

fn check(name: &str, authored: impl Into<i64>, computed: impl Into<i64>) -> Finding {
    Finding {
        check: name.to_owned(),
        authored: authored.into(),
        computed: computed.into(),
        detail: None,
    }
}

fn detailed(name: &str, authored: impl Into<i64>, computed: impl Into<i64>, detail: &str) -> Finding {
    Finding {
        detail: Some(detail.to_owned()),
        ..check(name, authored, computed)
    }
}

fn from_count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngagementConfig;
    use crate::model::{
        Category, Complexity, MigrationObject, Milestone, ModuleOverview, WeeklyAllocation,
    };

    fn tiny_plan() -> ProjectPlan {
        ProjectPlan {
            config: EngagementConfig {
                duration_weeks: 2,
                lead_hours: 30,
                intern_hours: 10,
                total_objects: 1,
                in_scope_objects: 1,
                total_effort_hours: 5,
                milestone_count: 1,
            },
            objects: vec![MigrationObject::new(
                "Bank",
                Category::FoundationData,
                Complexity::Simple,
                5,
            )],
            tasks: vec![crate::model::Task::new(
                1,
                "setup",
                30,
                10,
                crate::model::TaskKind::Setup,
                crate::model::Module::Setup,
            )],
            milestones: vec![Milestone {
                name: "M1".to_owned(),
                week_range: "W1-W2".to_owned(),
                lead_hours: 30,
                intern_hours: 10,
                billing_percent: 100,
                deliverables: Vec::new(),
            }],
            module_overviews: vec![ModuleOverview {
                category: Category::FoundationData,
                objects: 1,
                weeks: "W1".to_owned(),
                effort_hours: 5,
            }],
            resources: WeeklyAllocation {
                lead: vec![20, 10],
                intern: vec![5, 5],
            },
        }
    }

    #[test]
    fn consistent_plan_reports_no_drift() {
        let findings = audit_plan(&tiny_plan());
        assert!(!findings.is_empty());
        assert!(findings.iter().all(|finding| !finding.is_drift()));
    }

    #[test]
    fn drift_is_reported_per_check() {
        let mut plan = tiny_plan();
        plan.config.lead_hours = 99;

        let findings = audit_plan(&plan);
        let drifting: Vec<&str> = findings
            .iter()
            .filter(|finding| finding.is_drift())
            .map(|finding| finding.check.as_str())
            .collect();

        assert_eq!(
            drifting,
            vec!["task-lead-hours", "milestone-lead-hours", "resource-lead-hours"]
        );
    }

    #[test]
    fn overview_rows_compare_against_the_register() {
        let mut plan = tiny_plan();
        plan.module_overviews[0].objects = 3;

        let findings = audit_plan(&plan);
        let finding = findings
            .iter()
            .find(|finding| finding.check == "overview-objects")
            .unwrap();
        assert!(finding.is_drift());
        assert_eq!(finding.authored, 3);
        assert_eq!(finding.computed, 1);
        assert_eq!(finding.detail.as_deref(), Some("Foundation Data"));
    }

    #[test]
    fn mismatched_series_become_a_finding_not_an_error() {
        let mut plan = tiny_plan();
        plan.resources.intern = vec![5];

        let findings = audit_plan(&plan);
        let finding = findings
            .iter()
            .find(|finding| finding.check == "resource-series-length")
            .unwrap();
        assert!(finding.is_drift());
        assert_eq!(finding.authored, 2);
        assert_eq!(finding.computed, 1);
        assert!(
            findings
                .iter()
                .all(|finding| finding.check != "resource-lead-hours")
        );
    }

    #[test]
    fn out_of_scope_objects_drop_out_of_effort_checks() {
        let mut plan = tiny_plan();
        plan.objects.push({
            let mut extra =
                MigrationObject::new("Legacy", Category::FoundationData, Complexity::Medium, 10);
            extra.in_scope = false;
            extra
        });
        plan.config.total_objects = 2;

        let findings = audit_plan(&plan);
        let by_check = |name: &str| {
            findings
                .iter()
                .find(|finding| finding.check == name)
                .unwrap()
        };

        assert!(!by_check("object-count").is_drift());
        assert!(!by_check("in-scope-count").is_drift());
        assert!(!by_check("object-effort-hours").is_drift());
    }
}
