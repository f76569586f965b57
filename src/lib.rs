//! # assetsync - Asset Reconciliation Engine
//!
//! `assetsync` brings a "target" file tree, made of one or more git working
//! copies holding shared binary assets, in line with a "source of truth" tree.
//! The caller supplies an already classified change set (added, modified,
//! removed); this crate performs the file copies, deletes and staging calls
//! needed to apply it.
//!
//! ## Features
//!
//! - **Addition**: copy new assets into the target tree and stage them, one
//!   staging call per owning repository
//! - **Modification**: overwrite tracked assets in place
//! - **Removal**: delete obsolete assets and prune a directory left empty
//! - **Failure isolation**: a failing item is reported and skipped, never fatal
//!   to the rest of the run
//! - **Plan files**: describe trees, repositories and changes in YAML or JSON
//!
//! ## Quick Start
//!
//! 1. Write a plan (`plan.yaml`):
//!
//! ```yaml
//! source:
//!   root: ../design-assets
//! target:
//!   root: ./product
//!   repositories: [./product, ./product/community]
//! changes:
//!   added: [icons/a.svg]
//!   modified: [icons/c.svg]
//!   removed: [icons/b.svg]
//! ```
//!
//! 2. Apply it:
//!
//! ```bash
//! assetsync sync --plan plan.yaml
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: asset paths, locators, change sets and plans
//! - [`application`]: the three synchronizers, the orchestrating use case and
//!   failure isolation
//! - [`infrastructure`]: git staging, repository resolution, file operations,
//!   tree scanning and plan files
//! - [`presentation`]: CLI interface
//! - [`common`]: shared error handling
//!
//! ## Error Handling
//!
//! - [`common::error::AssetSyncError`]: error of a single unit of work
//! - [`common::result::AssetSyncResult`]: type alias for `Result<T, AssetSyncError>`
//!
//! Per-item errors never escape a sync run; they are passed to a
//! [`application::services::DiagnosticSink`] and collected in the
//! [`application::use_cases::SyncReport`].
//!
//! ## Examples
//!
//! ```rust,no_run
//! use assetsync::application::services::TracingSink;
//! use assetsync::application::use_cases::SyncAssetsUseCase;
//! use assetsync::common::error::TreeKind;
//! use assetsync::infrastructure::{PlanStore, ScmFactory, TreeScanner};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let plan = PlanStore::load(Path::new("plan.yaml"))?;
//!
//! let source_resolver = ScmFactory::create_resolver(&plan.source);
//! let target_resolver = ScmFactory::create_resolver(&plan.target);
//! let source = TreeScanner::new(source_resolver.as_ref()).scan(&plan.source.root, TreeKind::Source)?;
//! let target = TreeScanner::new(target_resolver.as_ref()).scan(&plan.target.root, TreeKind::Target)?;
//!
//! let stager = ScmFactory::create_stager(plan.stager);
//! let report = SyncAssetsUseCase::new(target_resolver.as_ref(), stager.as_ref(), &TracingSink)
//!     .execute(&plan.changes, &source, &target, &plan.target.root);
//!
//! println!("{} failures", report.failures.len());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::AssetSyncError;
pub use crate::common::result::AssetSyncResult as Result;
