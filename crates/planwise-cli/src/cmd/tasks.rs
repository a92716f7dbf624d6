//! `pw tasks` — filtered task table with session-local edits.
//!
//! `--set` patches rows before the filters run, so an edited task can move in
//! or out of the selection in the same invocation. Edits live in this
//! process only.

use std::io::Write;

use clap::Args;
use planwise_core::aggregate::{ModuleHours, TaskFilter, filter_tasks, hours_by_module};
use planwise_core::error::PlanError;
use planwise_core::model::{Module, TaskKind};
use planwise_core::plan::{ProjectPlan, TaskPatch};
use serde::Serialize;

use crate::output::{CliError, OutputMode, pretty_bar, pretty_section, render_error, render_mode};
use crate::validate::{parse_set_spec, validate_kind, validate_module};

/// Arguments for `pw tasks`.
#[derive(Args, Debug, Default)]
pub struct TasksArgs {
    /// Only tasks scheduled in this week.
    #[arg(long, value_name = "WEEK")]
    pub week: Option<u32>,

    /// Only tasks in this module.
    #[arg(long, value_name = "MODULE")]
    pub module: Option<String>,

    /// Only tasks of this type.
    #[arg(long, value_name = "TYPE")]
    pub kind: Option<String>,

    /// Patch a task before reporting, as ROW:FIELD=VALUE. Repeatable.
    #[arg(long, value_name = "ROW:FIELD=VALUE")]
    pub set: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TaskRow {
    /// 1-based position in the full task table, stable under filtering so it
    /// can be fed back to `--set`.
    row: usize,
    week: u32,
    description: String,
    lead_hours: u32,
    intern_hours: u32,
    total_hours: u32,
    #[serde(rename = "type")]
    kind: TaskKind,
    module: Module,
}

#[derive(Debug, Serialize)]
struct TaskTotals {
    count: usize,
    lead_hours: u32,
    intern_hours: u32,
    total_hours: u32,
}

/// Report payload for `pw tasks`.
#[derive(Debug, Serialize)]
struct TaskReport {
    tasks: Vec<TaskRow>,
    totals: TaskTotals,
    by_module: Vec<ModuleHours>,
}

/// Execute `pw tasks`.
pub fn run_tasks(args: &TasksArgs, plan: &mut ProjectPlan, output: OutputMode) -> anyhow::Result<()> {
    for spec in &args.set {
        let (row, field, value) = match parse_set_spec(spec) {
            Ok(parts) => parts,
            Err(err) => {
                render_error(output, &err.to_cli_error())?;
                anyhow::bail!("invalid --set spec");
            }
        };

        if let Err(err) = apply_set(plan, row, field, value) {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("task patch rejected");
        }
    }

    let module = match args.module.as_deref() {
        Some(raw) => match validate_module(raw) {
            Ok(module) => Some(module),
            Err(err) => {
                render_error(output, &err.to_cli_error())?;
                anyhow::bail!("invalid module filter");
            }
        },
        None => None,
    };

    let kind = match args.kind.as_deref() {
        Some(raw) => match validate_kind(raw) {
            Ok(kind) => Some(kind),
            Err(err) => {
                render_error(output, &err.to_cli_error())?;
                anyhow::bail!("invalid type filter");
            }
        },
        None => None,
    };

    let filter = TaskFilter {
        week: args.week,
        module,
        kind,
    };
    let payload = build_tasks(plan, filter);

    render_mode(
        output,
        &payload,
        |report, w| render_tasks_text(report, w),
        |report, w| render_tasks_human(report, w),
    )
}

fn apply_set(plan: &mut ProjectPlan, row: usize, field: &str, value: &str) -> Result<(), PlanError> {
    let mut patch = TaskPatch::default();
    patch.set(field, value)?;
    plan.patch_task(row, &patch)
}

fn build_tasks(plan: &ProjectPlan, filter: TaskFilter) -> TaskReport {
    let tasks: Vec<TaskRow> = plan
        .tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .map(|(index, task)| TaskRow {
            row: index + 1,
            week: task.week,
            description: task.description.clone(),
            lead_hours: task.lead_hours,
            intern_hours: task.intern_hours,
            total_hours: task.total_hours(),
            kind: task.kind,
            module: task.module,
        })
        .collect();

    let filtered = filter_tasks(&plan.tasks, filter);
    let totals = TaskTotals {
        count: filtered.len(),
        lead_hours: filtered.iter().map(|task| task.lead_hours).sum(),
        intern_hours: filtered.iter().map(|task| task.intern_hours).sum(),
        total_hours: filtered.iter().map(|task| task.total_hours()).sum(),
    };
    let by_module = hours_by_module(filtered.iter().copied());

    TaskReport {
        tasks,
        totals,
        by_module,
    }
}

fn render_tasks_human(report: &TaskReport, w: &mut dyn Write) -> std::io::Result<()> {
    if report.tasks.is_empty() {
        writeln!(w, "No tasks match the selected filters.")?;
        return Ok(());
    }

    pretty_section(w, "Task schedule")?;
    writeln!(
        w,
        "{:>3}  {:<4} {:<44} {:<13} {:<15} {:>4} {:>6}",
        "#", "wk", "task", "type", "module", "lead", "intern"
    )?;
    for row in &report.tasks {
        writeln!(
            w,
            "{:>3}  W{:<3} {:<44} {:<13} {:<15} {:>4} {:>6}",
            row.row,
            row.week,
            row.description,
            row.kind.label(),
            row.module.label(),
            row.lead_hours,
            row.intern_hours
        )?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "{} tasks  lead {} h  intern {} h  total {} h",
        report.totals.count,
        report.totals.lead_hours,
        report.totals.intern_hours,
        report.totals.total_hours
    )?;

    writeln!(w)?;
    pretty_section(w, "Hours by module")?;
    let max_total = report
        .by_module
        .iter()
        .map(|entry| entry.total_hours)
        .max()
        .unwrap_or(0);
    for entry in &report.by_module {
        writeln!(
            w,
            "{:<15} {:>4} lead {:>4} intern {:>4} total  {}",
            entry.module.label(),
            entry.lead_hours,
            entry.intern_hours,
            entry.total_hours,
            pretty_bar(entry.total_hours, max_total, 16)
        )?;
    }

    Ok(())
}

fn render_tasks_text(report: &TaskReport, w: &mut dyn Write) -> std::io::Result<()> {
    if report.tasks.is_empty() {
        writeln!(w, "No tasks match the selected filters.")?;
        return Ok(());
    }

    for row in &report.tasks {
        writeln!(
            w,
            "{:>3}  W{:<3} {:<13} {:<15} {:>4} {:>6}  {}",
            row.row, row.week, row.kind, row.module, row.lead_hours, row.intern_hours, row.description
        )?;
    }
    writeln!(
        w,
        "{} tasks  lead {} h  intern {} h  total {} h",
        report.totals.count,
        report.totals.lead_hours,
        report.totals.intern_hours,
        report.totals.total_hours
    )?;
    for entry in &report.by_module {
        writeln!(
            w,
            "{}: lead {}, intern {}, total {}",
            entry.module, entry.lead_hours, entry.intern_hours, entry.total_hours
        )?;
    }
    Ok(())
}
