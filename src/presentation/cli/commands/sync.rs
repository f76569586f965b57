use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use std::path::PathBuf;

use crate::application::services::TracingSink;
use crate::application::use_cases::{SyncAssetsUseCase, SyncReport};
use crate::common::error::TreeKind;
use crate::domain::value_objects::StagerKind;
use crate::infrastructure::{PlanStore, ScmFactory, TreeScanner};

/// How the sync report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary (default)
    Text,
    /// The full report as JSON
    Json,
}

/// Handler for the sync command
pub struct SyncCommand {
    pub plan_path: PathBuf,
    pub stager: Option<StagerKind>,
    pub output: ReportFormat,
    pub verbose: bool,
}

impl SyncCommand {
    pub fn new(
        plan_path: PathBuf,
        stager: Option<StagerKind>,
        output: ReportFormat,
        verbose: bool,
    ) -> Self {
        Self {
            plan_path,
            stager,
            output,
            verbose,
        }
    }

    fn is_text(&self) -> bool {
        self.output == ReportFormat::Text
    }

    pub fn execute(&self) -> Result<()> {
        let plan = PlanStore::load(&self.plan_path)
            .with_context(|| format!("Failed to load plan {}", self.plan_path.display()))?;
        let stager_kind = self.stager.unwrap_or(plan.stager);

        if plan.changes.is_empty() && self.is_text() {
            println!("{} Nothing to sync", "::".blue().bold());
            return Ok(());
        }

        let source_resolver = ScmFactory::create_resolver(&plan.source);
        let target_resolver = ScmFactory::create_resolver(&plan.target);

        if self.verbose && self.is_text() {
            println!(
                "  {} Scanning {} and {}",
                "->".blue(),
                plan.source.root.display(),
                plan.target.root.display()
            );
        }
        let source = TreeScanner::new(source_resolver.as_ref())
            .scan(&plan.source.root, TreeKind::Source)
            .context("Failed to scan source tree")?;
        let target = TreeScanner::new(target_resolver.as_ref())
            .scan(&plan.target.root, TreeKind::Target)
            .context("Failed to scan target tree")?;

        if self.is_text() {
            println!(
                "{} Synchronizing {} assets (stager: {})...",
                "::".blue().bold(),
                plan.changes.total(),
                stager_kind
            );
        }

        let stager = ScmFactory::create_stager(stager_kind);
        let report = SyncAssetsUseCase::new(target_resolver.as_ref(), stager.as_ref(), &TracingSink)
            .execute(&plan.changes, &source, &target, &plan.target.root);

        match self.output {
            ReportFormat::Text => self.print_report(&report),
            ReportFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            ),
        }
        Ok(())
    }

    fn print_report(&self, report: &SyncReport) {
        if report.is_clean() {
            println!("{} Synchronization completed!", "✓".green().bold());
        } else {
            println!(
                "{} Synchronization completed with {} failure(s)",
                "⚠".yellow().bold(),
                report.failures.len()
            );
        }

        println!("  Added: {}", report.added_count);
        println!("  Modified: {}", report.modified_count);
        println!("  Removed: {}", report.removed_count);
        if self.verbose {
            println!("  Repositories staged: {}", report.staged_repositories);
            println!("  Directories pruned: {}", report.pruned_directories);
            println!("  Warnings: {}", report.warning_count);
        }

        for failure in &report.failures {
            println!("  {}", format!("{}: {}", failure.context, failure.message).red());
        }
    }
}
