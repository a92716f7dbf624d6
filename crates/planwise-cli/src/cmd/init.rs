//! `pw init` — write the starter plan file.

use anyhow::Result;
use clap::Args;
use planwise_core::plan::ProjectPlan;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::output::{OutputMode, render};

/// Arguments for `pw init`.
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite an existing plan file.
    #[arg(long)]
    pub force: bool,

    /// Where to write the plan (defaults to plan.toml).
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct InitOutput {
    path: String,
    objects: usize,
    tasks: usize,
}

/// Execute `pw init`. Writes the built-in plan as an editable TOML file that
/// later runs can pick up with `--plan`.
///
/// # Errors
///
/// Returns an error if the target exists and `--force` is not set, or if the
/// file cannot be written.
pub fn run_init(args: &InitArgs, output: OutputMode) -> Result<()> {
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from("plan.toml"));

    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use `pw init --force` to overwrite it.",
            path.display()
        );
    }

    let plan = ProjectPlan::seed();
    plan.save(&path)?;

    let payload = InitOutput {
        path: path.display().to_string(),
        objects: plan.objects.len(),
        tasks: plan.tasks.len(),
    };
    render(output, &payload, |init, w| {
        writeln!(
            w,
            "Wrote {} ({} objects, {} tasks)",
            init.path, init.objects, init.tasks
        )
    })
}
