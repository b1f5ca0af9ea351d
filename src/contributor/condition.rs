//! Activation predicates for contributors.

use async_trait::async_trait;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ConditionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Condition failed: {0}")]
    Failed(String),
}

/// An asynchronous predicate deciding whether a contributor is active.
#[async_trait]
pub trait Condition: Send + Sync {
    /// Evaluate the predicate.
    async fn evaluate(&self) -> Result<bool, ConditionError>;

    /// Short label used in logs.
    fn describe(&self) -> String;
}

/// Active when a file or directory exists at the path.
#[derive(Debug, Clone)]
pub struct PathExists(pub PathBuf);

#[async_trait]
impl Condition for PathExists {
    async fn evaluate(&self) -> Result<bool, ConditionError> {
        Ok(fs::try_exists(&self.0).await?)
    }

    fn describe(&self) -> String {
        format!("pathExists({})", self.0.display())
    }
}

/// Active when the directory contains at least one file with one of the extensions.
///
/// An empty extension list matches any file. A missing directory is inactive.
#[derive(Debug, Clone)]
pub struct HasFiles {
    pub dir: PathBuf,
    pub extensions: Vec<String>,
}

impl HasFiles {
    fn matches(&self, path: &std::path::Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.') == ext)
            })
            .unwrap_or(false)
    }
}

#[async_trait]
impl Condition for HasFiles {
    async fn evaluate(&self) -> Result<bool, ConditionError> {
        if !fs::try_exists(&self.dir).await? {
            return Ok(false);
        }

        let scan = self.clone();
        tokio::task::spawn_blocking(move || -> Result<bool, ConditionError> {
            for entry in WalkDir::new(&scan.dir).min_depth(1) {
                let entry = entry.map_err(|e| ConditionError::Failed(e.to_string()))?;
                if entry.file_type().is_file() && scan.matches(entry.path()) {
                    return Ok(true);
                }
            }
            Ok(false)
        })
        .await
        .map_err(|e| ConditionError::Failed(e.to_string()))?
    }

    fn describe(&self) -> String {
        format!("hasFiles({})", self.dir.display())
    }
}

/// Active when the environment variable is set to a non-empty value.
#[derive(Debug, Clone)]
pub struct EnvVarSet(pub String);

#[async_trait]
impl Condition for EnvVarSet {
    async fn evaluate(&self) -> Result<bool, ConditionError> {
        Ok(std::env::var(&self.0)
            .map(|value| !value.is_empty())
            .unwrap_or(false))
    }

    fn describe(&self) -> String {
        format!("envVarSet({})", self.0)
    }
}

/// Adapts an async closure into a [`Condition`].
pub struct FnCondition<F> {
    label: String,
    check: F,
}

impl<F> FnCondition<F> {
    pub fn new(label: impl Into<String>, check: F) -> Self {
        Self {
            label: label.into(),
            check,
        }
    }
}

#[async_trait]
impl<F, Fut> Condition for FnCondition<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool, ConditionError>> + Send + 'static,
{
    async fn evaluate(&self) -> Result<bool, ConditionError> {
        (self.check)().await
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
