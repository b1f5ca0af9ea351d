//! Locations of the generated declaration file and of contributor references.
//!
//! Reference paths end up verbatim inside a triple-slash directive, so they are
//! always rendered with forward slashes no matter the host convention.

use crate::context::SourceRootContext;
use crate::utils::{normalize_lexically, ENV_DTS_FILE};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("Path must be absolute: {0}")]
    NotAbsolute(PathBuf),

    #[error("No relative path from {from} to {to}")]
    NoRelativePath { from: PathBuf, to: PathBuf },
}

/// Get the absolute path of `env.d.ts` inside the source root
pub fn env_dts_path(ctx: &SourceRootContext) -> PathBuf {
    ctx.source_root.join(ENV_DTS_FILE)
}

/// Get the path of `env.d.ts` relative to the project root, for log output
pub fn env_dts_display_path(ctx: &SourceRootContext) -> Result<String, PathError> {
    relative_slash_path(&ctx.project_root, &env_dts_path(ctx))
}

/// Get the path of a contributor's declaration file relative to the source root
pub fn reference_path(ctx: &SourceRootContext, filename: &str) -> Result<String, PathError> {
    relative_slash_path(&ctx.source_root, &ctx.generated_types_dir.join(filename))
}

/// Build the `/// <reference path="..." />` line for a contributor
pub fn reference_line(ctx: &SourceRootContext, filename: &str) -> Result<String, PathError> {
    let path = reference_path(ctx, filename)?;
    // JSON quoting escapes any quote or backslash left in a file name
    let quoted = serde_json::Value::String(path).to_string();
    Ok(format!("/// <reference path={} />", quoted))
}

/// Build the `/// <reference types="..." />` baseline line
pub fn baseline_line(client_types: &str) -> String {
    let quoted = serde_json::Value::String(client_types.to_string()).to_string();
    format!("/// <reference types={} />", quoted)
}

/// Relative path from directory `from` to `to`, joined with `/`.
///
/// Both paths must be absolute. They are normalized lexically, so symlinks are
/// not resolved.
pub fn relative_slash_path(from: &Path, to: &Path) -> Result<String, PathError> {
    if !from.is_absolute() {
        return Err(PathError::NotAbsolute(from.to_path_buf()));
    }
    if !to.is_absolute() {
        return Err(PathError::NotAbsolute(to.to_path_buf()));
    }

    let from_norm = normalize_lexically(from);
    let to_norm = normalize_lexically(to);

    let from_parts: Vec<Component> = from_norm.components().collect();
    let to_parts: Vec<Component> = to_norm.components().collect();

    // Different roots (e.g. two Windows drives) have no relative path
    if from_parts.first() != to_parts.first() {
        return Err(PathError::NoRelativePath {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat("..".to_string()).take(from_parts.len() - common));
    segments.extend(
        to_parts[common..]
            .iter()
            .map(|part| part.as_os_str().to_string_lossy().replace('\\', "/")),
    );

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SourceRootContext {
        SourceRootContext::new("/project")
    }

    #[test]
    fn test_env_dts_path() {
        assert_eq!(env_dts_path(&ctx()), PathBuf::from("/project/src/env.d.ts"));
    }

    #[test]
    fn test_env_dts_display_path() {
        assert_eq!(env_dts_display_path(&ctx()).unwrap(), "src/env.d.ts");
    }

    #[test]
    fn test_reference_path_sibling_dir() {
        assert_eq!(
            reference_path(&ctx(), "content.d.ts").unwrap(),
            "../.astro/content.d.ts"
        );
    }

    #[test]
    fn test_reference_path_nested_filename() {
        assert_eq!(
            reference_path(&ctx(), "integrations/db.d.ts").unwrap(),
            "../.astro/integrations/db.d.ts"
        );
    }

    #[test]
    fn test_reference_path_inside_source_root() {
        let ctx = ctx().with_generated_types_dir("/project/src/.generated");
        assert_eq!(
            reference_path(&ctx, "actions.d.ts").unwrap(),
            ".generated/actions.d.ts"
        );
    }

    #[test]
    fn test_reference_path_with_dot_segments() {
        let ctx = ctx().with_generated_types_dir("/project/./src/../.astro");
        assert_eq!(
            reference_path(&ctx, "content.d.ts").unwrap(),
            "../.astro/content.d.ts"
        );
    }

    #[test]
    fn test_reference_line_shape() {
        assert_eq!(
            reference_line(&ctx(), "content.d.ts").unwrap(),
            "/// <reference path=\"../.astro/content.d.ts\" />"
        );
    }

    #[test]
    fn test_baseline_line_shape() {
        assert_eq!(
            baseline_line("astro/client"),
            "/// <reference types=\"astro/client\" />"
        );
    }

    #[test]
    fn test_relative_source_root_is_rejected() {
        let ctx = SourceRootContext::new("project");
        assert_eq!(
            reference_path(&ctx, "content.d.ts"),
            Err(PathError::NotAbsolute(PathBuf::from("project/src")))
        );
    }

    #[test]
    fn test_relative_slash_path_same_dir() {
        assert_eq!(
            relative_slash_path(Path::new("/a/b"), Path::new("/a/b")).unwrap(),
            ""
        );
    }
}
