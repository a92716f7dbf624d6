#![forbid(unsafe_code)]

mod cmd;
mod output;
mod validate;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use planwise_core::config::{ConfigOverrides, UserConfig, load_user_config};
use planwise_core::plan::ProjectPlan;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "planwise: migration project plan reporting",
    long_about = None
)]
struct Cli {
    /// Load the plan from a TOML file instead of the built-in plan.
    #[arg(long, global = true, value_name = "PATH")]
    plan: Option<PathBuf>,

    /// Override total lead consultant hours for this invocation.
    #[arg(long, global = true, value_name = "HOURS")]
    lead_hours: Option<u32>,

    /// Override total intern hours for this invocation.
    #[arg(long, global = true, value_name = "HOURS")]
    intern_hours: Option<u32>,

    /// Override the total migration object count for this invocation.
    #[arg(long, global = true, value_name = "COUNT")]
    objects: Option<u32>,

    /// Output format (overrides the FORMAT env var and user config).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (shorthand for --format json).
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Collect the session override flags for the engagement config.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            lead_hours: self.lead_hours,
            intern_hours: self.intern_hours,
            total_objects: self.objects,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Reporting",
        about = "Show the engagement summary",
        long_about = "Show the engagement summary: duration, staffing hours, object\ncounts, and the billing schedule.",
        after_help = "EXAMPLES:\n    # Show the summary for the built-in plan\n    pw overview\n\n    # Same, but with 500 lead hours for this run only\n    pw overview --lead-hours 500\n\n    # Emit machine-readable output\n    pw overview --json"
    )]
    Overview(cmd::overview::OverviewArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "Show milestone cards",
        long_about = "Show one card per milestone: week range, deliverables, staffing\nhours, and the billing share.",
        after_help = "EXAMPLES:\n    # Show all milestones\n    pw milestones\n\n    # Emit machine-readable output\n    pw milestones --json"
    )]
    Milestones(cmd::milestones::MilestonesArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "Show the module workload overview",
        long_about = "Show the authored per-module overview: object counts, week windows,\nand effort hours, with a scale bar per module.",
        after_help = "EXAMPLES:\n    # Show the module overview\n    pw modules\n\n    # Emit machine-readable output\n    pw modules --json"
    )]
    Modules(cmd::modules::ModulesArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "Show the weekly resource curve",
        long_about = "Show week-by-week lead and intern hours with totals, averages, and\nthe peak week, recomputed from the weekly allocation series.",
        after_help = "EXAMPLES:\n    # Show the resource curve\n    pw resources\n\n    # Emit machine-readable output\n    pw resources --json"
    )]
    Resources(cmd::resources::ResourcesArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "Show migration object summaries",
        long_about = "Show per-category object counts, effort totals, and averages\nrecomputed from the scoped object inventory.",
        after_help = "EXAMPLES:\n    # Category summaries in plan order\n    pw objects\n\n    # Largest categories first\n    pw objects --by-count\n\n    # Include the object table for one category\n    pw objects --category payroll-data\n\n    # Emit machine-readable output\n    pw objects --json"
    )]
    Objects(cmd::objects::ObjectsArgs),

    #[command(
        next_help_heading = "Editing",
        about = "Filter and edit plan tasks",
        long_about = "Show the task table with optional week/module/type filters. --set\npatches a task row first; edits live for this run only and are never\nwritten back.",
        after_help = "EXAMPLES:\n    # All tasks\n    pw tasks\n\n    # Week 8 payroll tasks\n    pw tasks --week 8 --module payroll-data\n\n    # Move row 3 to week 5, then report\n    pw tasks --set 3:week=5\n\n    # Emit machine-readable output\n    pw tasks --json"
    )]
    Tasks(cmd::tasks::TasksArgs),

    #[command(
        next_help_heading = "Plan Maintenance",
        about = "Check authored figures against itemized tables",
        long_about = "Recompute every roll-up from the itemized tables and compare it with\nthe authored figure next to it. Reports drift without failing unless\n--strict is set.",
        after_help = "EXAMPLES:\n    # Report drift\n    pw audit\n\n    # Fail the process when drift exists (for CI)\n    pw audit --strict\n\n    # Emit machine-readable output\n    pw audit --json"
    )]
    Audit(cmd::audit::AuditArgs),

    #[command(
        next_help_heading = "Plan Maintenance",
        about = "Export the derived report as JSON",
        long_about = "Write the full derived report (config, summaries, roll-ups, resource\ncurve, milestones, audit findings) as pretty JSON.",
        after_help = "EXAMPLES:\n    # Print the report to stdout\n    pw export\n\n    # Write it to a file\n    pw export --out report.json"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        next_help_heading = "Plan Maintenance",
        about = "Write the starter plan to a TOML file",
        long_about = "Write the built-in plan to a TOML file that can be edited and loaded\nback with --plan.",
        after_help = "EXAMPLES:\n    # Write plan.toml in the current directory\n    pw init\n\n    # Write somewhere else\n    pw init --path plans/q3.toml\n\n    # Overwrite an existing file\n    pw init --force"
    )]
    Init(cmd::init::InitArgs),

    #[command(
        next_help_heading = "Plan Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    pw completions bash\n\n    # Generate zsh completions\n    pw completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PLANWISE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "planwise=debug,info"
        } else {
            "planwise=info,warn"
        })
    });

    let format = env::var("PLANWISE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let user_config = load_user_config().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "user config unreadable, falling back to defaults");
        UserConfig::default()
    });
    let output = output::resolve_output_mode(cli.format, cli.json, user_config.output.as_deref());

    let mut plan = match cli.plan {
        Some(ref path) => ProjectPlan::load(path)?,
        None => ProjectPlan::seed(),
    };
    plan.apply_overrides(cli.overrides());

    match cli.command {
        Commands::Overview(ref args) => cmd::overview::run_overview(args, &plan, output),
        Commands::Milestones(ref args) => cmd::milestones::run_milestones(args, &plan, output),
        Commands::Modules(ref args) => cmd::modules::run_modules(args, &plan, output),
        Commands::Resources(ref args) => cmd::resources::run_resources(args, &plan, output),
        Commands::Objects(ref args) => cmd::objects::run_objects(args, &plan, output),
        Commands::Tasks(ref args) => cmd::tasks::run_tasks(args, &mut plan, output),
        Commands::Audit(ref args) => cmd::audit::run_audit(args, &plan, output),
        Commands::Export(ref args) => cmd::export::run_export(args, &plan),
        Commands::Init(ref args) => cmd::init::run_init(args, output),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
