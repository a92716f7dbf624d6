//! `pw overview` — engagement summary metrics.

use std::io::Write;

use clap::Args;
use planwise_core::plan::ProjectPlan;
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `pw overview`.
#[derive(Args, Debug, Default)]
pub struct OverviewArgs {}

#[derive(Debug, Serialize)]
struct BillingLine {
    milestone: String,
    week_range: String,
    percent: u8,
}

/// Report payload for `pw overview`. All figures come from the authored
/// engagement config; `pw audit` is the place where they meet the recomputed
/// truth.
#[derive(Debug, Serialize)]
struct OverviewReport {
    duration_weeks: u32,
    lead_hours: u32,
    intern_hours: u32,
    total_objects: u32,
    in_scope_objects: u32,
    total_effort_hours: u32,
    milestone_count: u32,
    billing_schedule: Vec<BillingLine>,
}

/// Execute `pw overview`.
pub fn run_overview(
    _args: &OverviewArgs,
    plan: &ProjectPlan,
    output: OutputMode,
) -> anyhow::Result<()> {
    let payload = build_overview(plan);
    render_mode(
        output,
        &payload,
        |report, w| render_overview_text(report, w),
        |report, w| render_overview_human(report, w),
    )
}

fn build_overview(plan: &ProjectPlan) -> OverviewReport {
    let billing_schedule = plan
        .milestones
        .iter()
        .map(|milestone| BillingLine {
            milestone: milestone.name.clone(),
            week_range: milestone.week_range.clone(),
            percent: milestone.billing_percent,
        })
        .collect();

    OverviewReport {
        duration_weeks: plan.config.duration_weeks,
        lead_hours: plan.config.lead_hours,
        intern_hours: plan.config.intern_hours,
        total_objects: plan.config.total_objects,
        in_scope_objects: plan.config.in_scope_objects,
        total_effort_hours: plan.config.total_effort_hours,
        milestone_count: plan.config.milestone_count,
        billing_schedule,
    }
}

fn render_overview_human(report: &OverviewReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Engagement overview")?;
    pretty_kv(w, "duration", format!("{} weeks", report.duration_weeks))?;
    pretty_kv(w, "lead", format!("{} h", report.lead_hours))?;
    pretty_kv(w, "intern", format!("{} h", report.intern_hours))?;
    pretty_kv(
        w,
        "objects",
        format!("{} ({} in scope)", report.total_objects, report.in_scope_objects),
    )?;
    pretty_kv(w, "effort", format!("{} h", report.total_effort_hours))?;
    pretty_kv(w, "milestones", report.milestone_count.to_string())?;

    writeln!(w)?;
    pretty_section(w, "Billing schedule")?;
    for line in &report.billing_schedule {
        writeln!(w, "{:>3}%  {:<8} {}", line.percent, line.week_range, line.milestone)?;
    }

    Ok(())
}

fn render_overview_text(report: &OverviewReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Engagement overview")?;
    writeln!(w, "duration:    {} weeks", report.duration_weeks)?;
    writeln!(w, "lead:        {} h", report.lead_hours)?;
    writeln!(w, "intern:      {} h", report.intern_hours)?;
    writeln!(
        w,
        "objects:     {} ({} in scope)",
        report.total_objects, report.in_scope_objects
    )?;
    writeln!(w, "effort:      {} h", report.total_effort_hours)?;
    writeln!(w, "milestones:  {}", report.milestone_count)?;

    writeln!(w, "\nBilling schedule:")?;
    for line in &report.billing_schedule {
        writeln!(w, "  {} ({}): {}%", line.milestone, line.week_range, line.percent)?;
    }

    Ok(())
}
