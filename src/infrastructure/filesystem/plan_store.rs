use std::path::{Path, PathBuf};
use thiserror::Error;

use super::asset_files::absolute_path;
use crate::domain::entities::SyncPlan;

/// Plan store related errors
#[derive(Debug, Error)]
pub enum PlanStoreError {
    #[error("Plan file not found at path: {0}")]
    PlanFileNotFound(String),

    #[error("Plan file read failed: {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing failed: {0}")]
    YamlParsingFailed(#[from] serde_yaml::Error),

    #[error("JSON parsing failed: {0}")]
    JsonParsingFailed(#[from] serde_json::Error),
}

/// On-disk format of a plan file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Yaml,
    Json,
}

impl PlanFormat {
    /// `.json` files are JSON, everything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PlanFormat::Json,
            _ => PlanFormat::Yaml,
        }
    }
}

/// Reads and renders sync plan files
pub struct PlanStore;

impl PlanStore {
    /// Load a plan and resolve its relative roots against the plan's directory
    pub fn load(plan_path: &Path) -> Result<SyncPlan, PlanStoreError> {
        if !plan_path.exists() {
            return Err(PlanStoreError::PlanFileNotFound(
                plan_path.display().to_string(),
            ));
        }

        let content =
            std::fs::read_to_string(plan_path).map_err(|source| PlanStoreError::ReadFailed {
                path: plan_path.display().to_string(),
                source,
            })?;

        let plan = Self::parse(&content, PlanFormat::from_path(plan_path))?;
        let base = plan_directory(plan_path);
        tracing::debug!(plan = %plan_path.display(), base = %base.display(), "plan loaded");

        Ok(plan.resolved_against(&base))
    }

    /// Parse plan content without resolving paths
    pub fn parse(content: &str, format: PlanFormat) -> Result<SyncPlan, PlanStoreError> {
        let plan = match format {
            PlanFormat::Yaml => serde_yaml::from_str(content)?,
            PlanFormat::Json => serde_json::from_str(content)?,
        };
        Ok(plan)
    }

    /// Render a plan in the requested format
    pub fn render(plan: &SyncPlan, format: PlanFormat) -> Result<String, PlanStoreError> {
        let rendered = match format {
            PlanFormat::Yaml => serde_yaml::to_string(plan)?,
            PlanFormat::Json => serde_json::to_string_pretty(plan)?,
        };
        Ok(rendered)
    }
}

fn plan_directory(plan_path: &Path) -> PathBuf {
    match plan_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => absolute_path(parent),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
