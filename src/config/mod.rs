use crate::context::SourceRootContext;
use crate::contributor::{Activation, ContributorDescriptor, EnvVarSet, HasFiles, PathExists};
use crate::utils::{
    get_config_path, DEFAULT_CLIENT_TYPES, DEFAULT_GENERATED_TYPES_DIR, DEFAULT_SRC_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config already exists at {0}")]
    AlreadyExists(PathBuf),
}

/// Activation condition as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConditionConfig {
    Always,
    PathExists {
        path: String,
    },
    HasFiles {
        dir: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        extensions: Vec<String>,
    },
    EnvVarSet {
        name: String,
    },
}

impl ConditionConfig {
    /// Turn into an activation, resolving relative paths against `project_root`
    pub fn to_activation(&self, project_root: &Path) -> Activation {
        match self {
            ConditionConfig::Always => Activation::Always,
            ConditionConfig::PathExists { path } => {
                Activation::when(PathExists(project_root.join(path)))
            }
            ConditionConfig::HasFiles { dir, extensions } => Activation::when(HasFiles {
                dir: project_root.join(dir),
                extensions: extensions.clone(),
            }),
            ConditionConfig::EnvVarSet { name } => Activation::when(EnvVarSet(name.clone())),
        }
    }
}

/// One injected type reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InjectedTypeConfig {
    pub filename: String,
    /// Omitted means no predicate, which leaves the contributor inactive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionConfig>,
}

fn default_src_dir() -> String {
    DEFAULT_SRC_DIR.to_string()
}

fn default_generated_types_dir() -> String {
    DEFAULT_GENERATED_TYPES_DIR.to_string()
}

fn default_client_types() -> String {
    DEFAULT_CLIENT_TYPES.to_string()
}

/// Project configuration stored in `env-dts.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvDtsConfig {
    /// Source directory, relative to the project root
    #[serde(default = "default_src_dir")]
    pub src_dir: String,
    /// Directory holding injected declaration files, relative to the project root
    #[serde(default = "default_generated_types_dir")]
    pub generated_types_dir: String,
    /// Module referenced by the baseline line
    #[serde(default = "default_client_types")]
    pub client_types: String,
    #[serde(default)]
    pub injected_types: Vec<InjectedTypeConfig>,
}

impl Default for EnvDtsConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            generated_types_dir: default_generated_types_dir(),
            client_types: default_client_types(),
            injected_types: Vec::new(),
        }
    }
}

impl EnvDtsConfig {
    /// Build the synchronization context for a project rooted at `project_root`
    pub fn into_context(self, project_root: &Path) -> SourceRootContext {
        let contributors: Vec<ContributorDescriptor> = self
            .injected_types
            .iter()
            .map(|injected| ContributorDescriptor {
                filename: injected.filename.clone(),
                activation: injected
                    .condition
                    .as_ref()
                    .map(|c| c.to_activation(project_root))
                    .unwrap_or_default(),
            })
            .collect();

        let mut ctx = SourceRootContext::new(project_root)
            .with_source_root(project_root.join(&self.src_dir))
            .with_generated_types_dir(project_root.join(&self.generated_types_dir))
            .with_client_types(self.client_types);
        ctx.inject_types(contributors);
        ctx
    }
}

/// Read the configuration file
pub async fn read_config(project_root: &Path) -> Result<Option<EnvDtsConfig>, ConfigError> {
    let config_path = get_config_path(project_root);

    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).await?;
    let config: EnvDtsConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Write the configuration file
pub async fn write_config(project_root: &Path, config: &EnvDtsConfig) -> Result<(), ConfigError> {
    let config_path = get_config_path(project_root);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, content).await?;
    Ok(())
}

/// Write a default configuration file, refusing to overwrite unless `force` is set
pub async fn init_config(project_root: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let config_path = get_config_path(project_root);

    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists(config_path));
    }

    write_config(project_root, &EnvDtsConfig::default()).await?;
    Ok(config_path)
}

/// Load the project's context, falling back to defaults without a config file
pub async fn load_context(project_root: &Path) -> Result<SourceRootContext, ConfigError> {
    let config = read_config(project_root).await?.unwrap_or_default();
    Ok(config.into_context(project_root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: EnvDtsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EnvDtsConfig::default());
    }

    #[test]
    fn test_condition_tags() {
        let json = r#"{
            "injectedTypes": [
                { "filename": "a.d.ts", "condition": { "type": "always" } },
                { "filename": "b.d.ts", "condition": { "type": "pathExists", "path": "src/content" } },
                { "filename": "c.d.ts", "condition": { "type": "hasFiles", "dir": "src/content", "extensions": ["md"] } },
                { "filename": "d.d.ts", "condition": { "type": "envVarSet", "name": "DB_URL" } },
                { "filename": "e.d.ts" }
            ]
        }"#;
        let config: EnvDtsConfig = serde_json::from_str(json).unwrap();
        let conditions: Vec<Option<ConditionConfig>> = config
            .injected_types
            .into_iter()
            .map(|t| t.condition)
            .collect();

        assert_eq!(
            conditions,
            vec![
                Some(ConditionConfig::Always),
                Some(ConditionConfig::PathExists {
                    path: "src/content".to_string()
                }),
                Some(ConditionConfig::HasFiles {
                    dir: "src/content".to_string(),
                    extensions: vec!["md".to_string()]
                }),
                Some(ConditionConfig::EnvVarSet {
                    name: "DB_URL".to_string()
                }),
                None,
            ]
        );
    }

    #[test]
    fn test_into_context_resolves_paths() {
        let config = EnvDtsConfig {
            src_dir: "app".to_string(),
            generated_types_dir: ".generated".to_string(),
            injected_types: vec![
                InjectedTypeConfig {
                    filename: "a.d.ts".to_string(),
                    condition: Some(ConditionConfig::Always),
                },
                InjectedTypeConfig {
                    filename: "b.d.ts".to_string(),
                    condition: None,
                },
            ],
            ..Default::default()
        };

        let ctx = config.into_context(Path::new("/project"));
        assert_eq!(ctx.source_root, PathBuf::from("/project/app"));
        assert_eq!(ctx.generated_types_dir, PathBuf::from("/project/.generated"));
        assert!(matches!(ctx.contributors[0].activation, Activation::Always));
        assert!(matches!(ctx.contributors[1].activation, Activation::Unspecified));
    }
}
