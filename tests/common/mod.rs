#![allow(dead_code)]

use env_dts_sync::{ConditionError, ContributorDescriptor, FnCondition, SourceRootContext};
use std::path::Path;
use tempfile::TempDir;
use tokio::fs;

/// Create a temporary project directory
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Context with the default `src/` and `.astro/` layout under `project_path`
pub fn project_context(project_path: &Path) -> SourceRootContext {
    SourceRootContext::new(project_path)
}

/// Contributor whose predicate resolves to `active`
pub fn gated(filename: &str, active: bool) -> ContributorDescriptor {
    ContributorDescriptor::when(
        filename,
        FnCondition::new(format!("fixed({})", active), move || async move {
            Ok::<_, ConditionError>(active)
        }),
    )
}

/// Expected reference line for a file in the default `.astro/` directory
pub fn astro_reference(filename: &str) -> String {
    format!("/// <reference path=\"../.astro/{}\" />", filename)
}

pub async fn write_env_dts(project_path: &Path, content: &str) {
    let src = project_path.join("src");
    fs::create_dir_all(&src).await.expect("Should create src dir");
    fs::write(src.join("env.d.ts"), content)
        .await
        .expect("Should write env.d.ts");
}

pub async fn read_env_dts(project_path: &Path) -> String {
    fs::read_to_string(project_path.join("src/env.d.ts"))
        .await
        .expect("Should read env.d.ts")
}
