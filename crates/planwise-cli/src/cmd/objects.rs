//! `pw objects` — recomputed category summaries over the object register.

use std::io::Write;

use clap::Args;
use planwise_core::aggregate::{CategorySummary, sort_by_count_desc, summarize_by_category};
use planwise_core::model::{Category, Complexity, MigrationObject};
use planwise_core::plan::ProjectPlan;
use serde::Serialize;

use crate::output::{OutputMode, render, render_error};
use crate::validate::validate_category;

/// Arguments for `pw objects`.
#[derive(Args, Debug, Default)]
pub struct ObjectsArgs {
    /// Also show the object table for this category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Sort category summaries by object count, largest first.
    #[arg(long)]
    pub by_count: bool,
}

#[derive(Debug, Serialize)]
struct ObjectRow {
    name: String,
    complexity: Complexity,
    hours: u32,
    final_effort: u32,
    in_scope: bool,
}

#[derive(Debug, Serialize)]
struct CategoryDetail {
    category: Category,
    objects: Vec<ObjectRow>,
}

/// Report payload for `pw objects`.
#[derive(Debug, Serialize)]
struct ObjectsReport {
    summaries: Vec<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<CategoryDetail>,
}

/// Execute `pw objects`.
pub fn run_objects(args: &ObjectsArgs, plan: &ProjectPlan, output: OutputMode) -> anyhow::Result<()> {
    let detail = match args.category.as_deref() {
        Some(raw) => match validate_category(raw) {
            Ok(category) => Some(category),
            Err(err) => {
                render_error(output, &err.to_cli_error())?;
                anyhow::bail!("invalid category filter");
            }
        },
        None => None,
    };

    let payload = build_objects(plan, detail, args.by_count);
    render(output, &payload, |report, w| render_objects_human(report, w))
}

fn build_objects(plan: &ProjectPlan, detail: Option<Category>, by_count: bool) -> ObjectsReport {
    let mut summaries = summarize_by_category(&plan.objects);
    if by_count {
        sort_by_count_desc(&mut summaries);
    }

    let category = detail.map(|category| CategoryDetail {
        category,
        objects: plan
            .objects
            .iter()
            .filter(|object| object.category == category)
            .map(object_row)
            .collect(),
    });

    ObjectsReport { summaries, category }
}

fn object_row(object: &MigrationObject) -> ObjectRow {
    ObjectRow {
        name: object.name.clone(),
        complexity: object.complexity,
        hours: object.hours,
        final_effort: object.final_effort,
        in_scope: object.in_scope,
    }
}

fn render_objects_human(report: &ObjectsReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Object register")?;

    writeln!(w, "\nCategory summaries:")?;
    for summary in &report.summaries {
        writeln!(
            w,
            "  {:<16} {:>3} objects  {:>4} h total  {:>5.1} h avg",
            summary.category.label(),
            summary.count,
            summary.total_effort,
            summary.avg_effort
        )?;
    }

    if let Some(ref detail) = report.category {
        writeln!(w, "\n{} objects:", detail.category.label())?;
        if detail.objects.is_empty() {
            writeln!(w, "  (no objects)")?;
        }
        for row in &detail.objects {
            writeln!(
                w,
                "  {:<38} {:<12} {:>3} h  {}",
                row.name,
                row.complexity.label(),
                row.final_effort,
                if row.in_scope { "in scope" } else { "descoped" }
            )?;
        }
    }

    Ok(())
}
