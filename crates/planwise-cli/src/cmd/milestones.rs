//! `pw milestones` — per-milestone delivery cards.

use std::io::Write;

use clap::Args;
use planwise_core::plan::ProjectPlan;
use serde::Serialize;

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `pw milestones`.
#[derive(Args, Debug, Default)]
pub struct MilestonesArgs {}

#[derive(Debug, Serialize)]
struct MilestoneCard {
    name: String,
    week_range: String,
    lead_hours: u32,
    intern_hours: u32,
    total_hours: u32,
    billing_percent: u8,
    deliverables: Vec<String>,
}

/// Report payload for `pw milestones`.
#[derive(Debug, Serialize)]
struct MilestoneReport {
    milestones: Vec<MilestoneCard>,
}

/// Execute `pw milestones`.
pub fn run_milestones(
    _args: &MilestonesArgs,
    plan: &ProjectPlan,
    output: OutputMode,
) -> anyhow::Result<()> {
    let payload = build_milestones(plan);
    render_mode(
        output,
        &payload,
        |report, w| render_milestones_text(report, w),
        |report, w| render_milestones_human(report, w),
    )
}

fn build_milestones(plan: &ProjectPlan) -> MilestoneReport {
    let milestones = plan
        .milestones
        .iter()
        .map(|milestone| MilestoneCard {
            name: milestone.name.clone(),
            week_range: milestone.week_range.clone(),
            lead_hours: milestone.lead_hours,
            intern_hours: milestone.intern_hours,
            total_hours: milestone.total_hours(),
            billing_percent: milestone.billing_percent,
            deliverables: milestone.deliverables.clone(),
        })
        .collect();

    MilestoneReport { milestones }
}

fn render_milestones_human(report: &MilestoneReport, w: &mut dyn Write) -> std::io::Result<()> {
    for (i, card) in report.milestones.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        pretty_section(w, &card.name)?;
        pretty_kv(w, "weeks", &card.week_range)?;
        pretty_kv(w, "billing", format!("{}%", card.billing_percent))?;
        pretty_kv(
            w,
            "hours",
            format!(
                "{} lead + {} intern = {} total",
                card.lead_hours, card.intern_hours, card.total_hours
            ),
        )?;
        if !card.deliverables.is_empty() {
            writeln!(w, "deliverables:")?;
            for deliverable in &card.deliverables {
                writeln!(w, "  - {deliverable}")?;
            }
        }
    }
    Ok(())
}

fn render_milestones_text(report: &MilestoneReport, w: &mut dyn Write) -> std::io::Result<()> {
    for card in &report.milestones {
        writeln!(
            w,
            "[{}] {}  lead {}h  intern {}h  total {}h  billing {}%",
            card.week_range,
            card.name,
            card.lead_hours,
            card.intern_hours,
            card.total_hours,
            card.billing_percent
        )?;
        for deliverable in &card.deliverables {
            writeln!(w, "    - {deliverable}")?;
        }
    }
    Ok(())
}
