//! `pw modules` — authored module workload table.
//!
//! Shows the hand-maintained per-category cards, heaviest first. This is the
//! authored view; `pw objects` recomputes the same shape from the object
//! inventory and `pw audit` reports where the two disagree.

use std::io::Write;

use clap::Args;
use planwise_core::model::Category;
use planwise_core::plan::ProjectPlan;
use serde::Serialize;

use crate::output::{OutputMode, pretty_bar, pretty_section, render_mode};

/// Arguments for `pw modules`.
#[derive(Args, Debug, Default)]
pub struct ModulesArgs {}

#[derive(Debug, Serialize)]
struct ModuleRow {
    category: Category,
    objects: u32,
    weeks: String,
    effort_hours: u32,
    scale: &'static str,
}

/// Report payload for `pw modules`.
#[derive(Debug, Serialize)]
struct ModuleReport {
    modules: Vec<ModuleRow>,
}

/// Execute `pw modules`.
pub fn run_modules(
    _args: &ModulesArgs,
    plan: &ProjectPlan,
    output: OutputMode,
) -> anyhow::Result<()> {
    let payload = build_modules(plan);
    render_mode(
        output,
        &payload,
        |report, w| render_modules_text(report, w),
        |report, w| render_modules_human(report, w),
    )
}

fn build_modules(plan: &ProjectPlan) -> ModuleReport {
    let mut modules: Vec<ModuleRow> = plan
        .module_overviews
        .iter()
        .map(|overview| ModuleRow {
            category: overview.category,
            objects: overview.objects,
            weeks: overview.weeks.clone(),
            effort_hours: overview.effort_hours,
            scale: scale_label(overview.objects),
        })
        .collect();
    modules.sort_by(|a, b| b.objects.cmp(&a.objects));
    ModuleReport { modules }
}

/// Workload tier used in the module cards.
const fn scale_label(objects: u32) -> &'static str {
    if objects > 30 {
        "High"
    } else if objects > 15 {
        "Medium"
    } else {
        "Low"
    }
}

fn render_modules_human(report: &ModuleReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Module workload")?;
    let max_objects = report.modules.iter().map(|row| row.objects).max().unwrap_or(0);
    for row in &report.modules {
        writeln!(
            w,
            "{:<16} {:>3} objects  {:<7} {:>4} h  {:<6}  {}",
            row.category.label(),
            row.objects,
            row.weeks,
            row.effort_hours,
            row.scale,
            pretty_bar(row.objects, max_objects, 16)
        )?;
    }
    Ok(())
}

fn render_modules_text(report: &ModuleReport, w: &mut dyn Write) -> std::io::Result<()> {
    for row in &report.modules {
        writeln!(
            w,
            "{}  {} objects  {}  {} h  {}",
            row.category.label(),
            row.objects,
            row.weeks,
            row.effort_hours,
            row.scale
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modules_sorted_heaviest_first() {
        let report = build_modules(&ProjectPlan::seed());

        let objects: Vec<u32> = report.modules.iter().map(|row| row.objects).collect();
        assert_eq!(objects, vec![38, 16, 11, 9]);
        assert_eq!(report.modules[0].category, Category::EmployeeData);
    }

    #[test]
    fn scale_label_tiers() {
        assert_eq!(scale_label(38), "High");
        assert_eq!(scale_label(31), "High");
        assert_eq!(scale_label(30), "Medium");
        assert_eq!(scale_label(16), "Medium");
        assert_eq!(scale_label(15), "Low");
        assert_eq!(scale_label(0), "Low");
    }

    #[test]
    fn render_modules_human_has_bars() {
        let report = build_modules(&ProjectPlan::seed());

        let mut out = Vec::new();
        render_modules_human(&report, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");

        assert!(rendered.contains("Module workload"));
        assert!(rendered.contains("Employee Data"));
        assert!(rendered.contains("High"));
        // Heaviest module renders a full bar.
        assert!(rendered.contains(&"█".repeat(16)));
    }

    #[test]
    fn render_modules_text_is_bar_free() {
        let report = build_modules(&ProjectPlan::seed());

        let mut out = Vec::new();
        render_modules_text(&report, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");

        assert!(rendered.contains("38 objects"));
        assert!(!rendered.contains('█'));
    }
}
