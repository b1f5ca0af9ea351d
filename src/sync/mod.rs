//! The synchronization pass for `env.d.ts`.
//!
//! One pass checks whether the file exists, evaluates every contributor, then
//! either merges missing references into the existing file or writes a fresh
//! one. There are no retries. Read, write and mkdir failures abort the pass.

use crate::config::{load_context, ConfigError};
use crate::context::SourceRootContext;
use crate::contributor::evaluate_all;
use crate::merge::{build_fresh, merge_references};
use crate::paths::{env_dts_display_path, env_dts_path, reference_line, PathError};
use crate::storage::{Storage, TokioStorage};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] PathError),

    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
}

/// Whether the pass created the file or updated an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Created,
    Updated,
}

/// Result of a synchronization pass
#[derive(Debug, Clone)]
pub struct SyncResult {
    /// Absolute path of `env.d.ts`
    pub path: PathBuf,
    /// Path relative to the project root
    pub display_path: String,
    pub outcome: SyncOutcome,
    /// Filenames of active contributors, in registration order
    pub active: Vec<String>,
    /// Reference lines written by this pass
    pub added: Vec<String>,
}

/// Run one synchronization pass for `ctx`
pub async fn sync_env_dts(
    ctx: &SourceRootContext,
    storage: &dyn Storage,
) -> Result<SyncResult, SyncError> {
    let path = env_dts_path(ctx);
    let display_path = env_dts_display_path(ctx)?;

    let (outcome, merged, active) = if storage.exists(&path).await? {
        let existing = storage.read_to_string(&path).await?;
        let (active, expected) = expected_references(ctx).await?;
        let merged = merge_references(&existing, &expected);

        storage.write(&path, &merged.content).await?;
        (SyncOutcome::Updated, merged, active)
    } else {
        let (active, expected) = expected_references(ctx).await?;
        let fresh = build_fresh(&ctx.client_types, &expected);

        storage.create_dir_all(&ctx.source_root).await?;
        storage.write(&path, &fresh.content).await?;
        (SyncOutcome::Created, fresh, active)
    };

    info!("Added {} type declarations", display_path);

    Ok(SyncResult {
        path,
        display_path,
        outcome,
        active,
        added: merged.added,
    })
}

/// Load the project's config and run a pass against the local file system
pub async fn sync_project(project_root: &Path) -> Result<SyncResult, SyncError> {
    let ctx = load_context(project_root).await?;
    sync_env_dts(&ctx, &TokioStorage).await
}

/// Active contributor filenames and their reference lines, in registration order
async fn expected_references(
    ctx: &SourceRootContext,
) -> Result<(Vec<String>, Vec<String>), PathError> {
    let verdicts = evaluate_all(&ctx.contributors).await;

    let mut active = Vec::new();
    let mut expected = Vec::new();

    for (contributor, is_active) in ctx.contributors.iter().zip(verdicts) {
        if is_active {
            expected.push(reference_line(ctx, &contributor.filename)?);
            active.push(contributor.filename.clone());
        }
    }

    Ok((active, expected))
}
