use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::infrastructure::filesystem::PlanFormat;
use crate::infrastructure::PlanStore;

/// Handler for the show-plan command
pub struct ShowPlanCommand {
    pub plan_path: PathBuf,
    pub format: PlanFormat,
}

impl ShowPlanCommand {
    pub fn new(plan_path: PathBuf, format: PlanFormat) -> Self {
        Self { plan_path, format }
    }

    pub fn execute(&self) -> Result<()> {
        let plan = PlanStore::load(&self.plan_path)
            .with_context(|| format!("Failed to load plan {}", self.plan_path.display()))?;

        for path in plan.changes.overlapping() {
            tracing::warn!("{} is classified in more than one change set", path);
        }

        let rendered = PlanStore::render(&plan, self.format).context("Failed to render plan")?;
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
