//! `pw audit` — drift report between authored figures and recomputed sums.

use std::io::Write;

use clap::Args;
use planwise_core::audit::{Finding, audit_plan};
use planwise_core::plan::ProjectPlan;
use serde::Serialize;

use crate::output::{OutputMode, render};

/// Arguments for `pw audit`.
#[derive(Args, Debug, Default)]
pub struct AuditArgs {
    /// Exit nonzero when any drift is found (for CI).
    #[arg(long)]
    pub strict: bool,
}

/// Report payload for `pw audit`.
#[derive(Debug, Serialize)]
struct AuditReport {
    checks: usize,
    drift: usize,
    findings: Vec<Finding>,
}

/// Execute `pw audit`.
pub fn run_audit(args: &AuditArgs, plan: &ProjectPlan, output: OutputMode) -> anyhow::Result<()> {
    let payload = build_audit(plan);
    render(output, &payload, |report, w| render_audit_human(report, w))?;

    if args.strict && payload.drift > 0 {
        anyhow::bail!(
            "{} authored figures drift from the itemized tables",
            payload.drift
        );
    }
    Ok(())
}

fn build_audit(plan: &ProjectPlan) -> AuditReport {
    let findings = audit_plan(plan);
    let drift = findings.iter().filter(|finding| finding.is_drift()).count();
    AuditReport {
        checks: findings.len(),
        drift,
        findings,
    }
}

fn render_audit_human(report: &AuditReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Plan audit")?;

    writeln!(w, "\n  {:<40} {:>8} {:>9}", "check", "authored", "computed")?;
    for finding in &report.findings {
        let name = match &finding.detail {
            Some(detail) => format!("{} ({detail})", finding.check),
            None => finding.check.clone(),
        };
        let status = if finding.is_drift() { "drift" } else { "ok" };
        writeln!(
            w,
            "  {:<40} {:>8} {:>9}  {}",
            name, finding.authored, finding.computed, status
        )?;
    }

    writeln!(w, "\n{} checks, {} drift", report.checks, report.drift)?;
    Ok(())
}
