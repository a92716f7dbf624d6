//! `pw export` — full derived report as pretty JSON.
//!
//! Always emits JSON regardless of the output mode; the report is meant for
//! downstream tooling and spreadsheets, not eyes.

use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::Args;
use planwise_core::aggregate::{
    CategorySummary, ModuleHours, ResourceCurve, hours_by_module, summarize_by_category,
    weekly_resource_curve,
};
use planwise_core::audit::{Finding, audit_plan};
use planwise_core::config::EngagementConfig;
use planwise_core::model::Milestone;
use planwise_core::plan::ProjectPlan;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for `pw export`.
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Output JSON path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// The exported report: authored config plus every recomputed view.
#[derive(Debug, Serialize)]
struct PlanExport {
    generated_at: String,
    config: EngagementConfig,
    categories: Vec<CategorySummary>,
    hours_by_module: Vec<ModuleHours>,
    resources: ResourceCurve,
    milestones: Vec<Milestone>,
    audit: Vec<Finding>,
}

/// Execute `pw export`.
pub fn run_export(args: &ExportArgs, plan: &ProjectPlan) -> Result<()> {
    let payload = build_export(plan)?;

    let mut out: Box<dyn Write> = match args.out.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    serde_json::to_writer_pretty(&mut out, &payload)?;
    writeln!(out)?;
    Ok(())
}

fn build_export(plan: &ProjectPlan) -> Result<PlanExport> {
    let resources = weekly_resource_curve(&plan.resources.lead, &plan.resources.intern)
        .context("resource allocation series are unreadable")?;

    Ok(PlanExport {
        generated_at: Utc::now().to_rfc3339(),
        config: plan.config,
        categories: summarize_by_category(&plan.objects),
        hours_by_module: hours_by_module(&plan.tasks),
        resources,
        milestones: plan.milestones.clone(),
        audit: audit_plan(plan),
    })
}
