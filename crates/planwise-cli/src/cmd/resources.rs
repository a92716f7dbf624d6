//! `pw resources` — recomputed weekly staffing curve.

use std::io::Write;

use clap::Args;
use planwise_core::aggregate::{ResourceCurve, weekly_resource_curve};
use planwise_core::error::PlanError;
use planwise_core::plan::ProjectPlan;
use serde::Serialize;

use crate::output::{CliError, OutputMode, pretty_bar, pretty_section, render_error, render_mode};

/// Arguments for `pw resources`.
#[derive(Args, Debug, Default)]
pub struct ResourcesArgs {}

/// Report payload for `pw resources`.
#[derive(Debug, Serialize)]
struct ResourceReport {
    curve: ResourceCurve,
    avg_lead_per_week: f64,
    avg_intern_per_week: f64,
}

/// Execute `pw resources`.
pub fn run_resources(
    _args: &ResourcesArgs,
    plan: &ProjectPlan,
    output: OutputMode,
) -> anyhow::Result<()> {
    let payload = match build_resources(plan) {
        Ok(payload) => payload,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("resource allocation unreadable");
        }
    };

    render_mode(
        output,
        &payload,
        |report, w| render_resources_text(report, w),
        |report, w| render_resources_human(report, w),
    )
}

fn build_resources(plan: &ProjectPlan) -> Result<ResourceReport, PlanError> {
    let curve = weekly_resource_curve(&plan.resources.lead, &plan.resources.intern)?;

    let (avg_lead_per_week, avg_intern_per_week) = if curve.weeks.is_empty() {
        (0.0, 0.0)
    } else {
        #[allow(clippy::cast_precision_loss)]
        let week_count = curve.weeks.len() as f64;
        (
            f64::from(curve.total_lead) / week_count,
            f64::from(curve.total_intern) / week_count,
        )
    };

    Ok(ResourceReport {
        curve,
        avg_lead_per_week,
        avg_intern_per_week,
    })
}

fn render_resources_human(report: &ResourceReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Weekly resources")?;
    writeln!(w, "{:<5} {:>5} {:>7} {:>6}", "week", "lead", "intern", "total")?;

    let max_total = report.curve.weeks.iter().map(|week| week.total).max().unwrap_or(0);
    for week in &report.curve.weeks {
        writeln!(
            w,
            "W{:<4} {:>5} {:>7} {:>6}  {}",
            week.week,
            week.lead,
            week.intern,
            week.total,
            pretty_bar(week.total, max_total, 16)
        )?;
    }
    writeln!(
        w,
        "{:<5} {:>5} {:>7} {:>6}",
        "total", report.curve.total_lead, report.curve.total_intern, report.curve.total_hours
    )?;

    writeln!(w)?;
    writeln!(w, "avg lead/week:    {:.1} h", report.avg_lead_per_week)?;
    writeln!(w, "avg intern/week:  {:.1} h", report.avg_intern_per_week)?;
    if let Some(peak) = report.curve.peak_week {
        let peak_total = report
            .curve
            .weeks
            .iter()
            .find(|week| week.week == peak)
            .map_or(0, |week| week.total);
        writeln!(w, "peak week:        W{peak} ({peak_total} h)")?;
    }

    Ok(())
}

fn render_resources_text(report: &ResourceReport, w: &mut dyn Write) -> std::io::Result<()> {
    for week in &report.curve.weeks {
        writeln!(
            w,
            "W{}: lead {}, intern {}, total {}",
            week.week, week.lead, week.intern, week.total
        )?;
    }
    writeln!(
        w,
        "total: lead {}, intern {}, total {}",
        report.curve.total_lead, report.curve.total_intern, report.curve.total_hours
    )?;
    writeln!(w, "avg lead/week: {:.1}", report.avg_lead_per_week)?;
    writeln!(w, "avg intern/week: {:.1}", report.avg_intern_per_week)?;
    if let Some(peak) = report.curve.peak_week {
        writeln!(w, "peak week: W{peak}")?;
    }
    Ok(())
}
