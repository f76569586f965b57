pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::exit;

use crate::domain::value_objects::StagerKind;
use crate::infrastructure::filesystem::PlanFormat;
use commands::{ReportFormat, ShowPlanCommand, SyncCommand};

/// Output format options for show-plan command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML output (default)
    Yaml,
    /// JSON output
    Json,
}

impl From<OutputFormat> for PlanFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => PlanFormat::Yaml,
            OutputFormat::Json => PlanFormat::Json,
        }
    }
}

/// assetsync - Reconcile asset repositories with a source of truth
#[derive(Parser)]
#[command(name = "assetsync")]
#[command(about = "Reconcile asset repositories with a source of truth")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the changes of a plan to the target tree
    Sync {
        /// Path to the plan file (YAML, or JSON with a .json extension)
        #[arg(short, long, env = "ASSETSYNC_PLAN")]
        plan: PathBuf,

        /// Staging backend, overrides the plan (cli or libgit2)
        #[arg(short, long)]
        stager: Option<StagerKind>,

        /// Report format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        output: ReportFormat,
    },

    /// Print a plan with its roots resolved
    ShowPlan {
        /// Path to the plan file
        #[arg(short, long, env = "ASSETSYNC_PLAN")]
        plan: PathBuf,

        /// Output format (yaml or json)
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        if let Some(ref dir) = self.cli.directory {
            env::set_current_dir(dir)?;
        }

        match self.handle_command() {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::Sync {
                plan,
                stager,
                output,
            } => SyncCommand::new(plan.clone(), *stager, *output, self.cli.verbose).execute(),
            Commands::ShowPlan { plan, format } => {
                ShowPlanCommand::new(plan.clone(), (*format).into()).execute()
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
