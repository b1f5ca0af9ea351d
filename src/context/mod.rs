use crate::contributor::ContributorDescriptor;
use crate::utils::{DEFAULT_CLIENT_TYPES, DEFAULT_GENERATED_TYPES_DIR, DEFAULT_SRC_DIR};
use std::path::PathBuf;

/// Everything one synchronization pass needs to know about a project.
///
/// Passed explicitly into the pass so independent projects never share state.
#[derive(Debug, Clone)]
pub struct SourceRootContext {
    /// Absolute path of the project's source directory
    pub source_root: PathBuf,
    /// Absolute path of the project root, used for display paths
    pub project_root: PathBuf,
    /// Absolute path of the directory holding contributor declaration files
    pub generated_types_dir: PathBuf,
    /// Module named by the baseline `types` reference
    pub client_types: String,
    /// Contributors in registration order
    pub contributors: Vec<ContributorDescriptor>,
}

impl SourceRootContext {
    /// Context with the default `src/` and `.astro/` layout under `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            source_root: project_root.join(DEFAULT_SRC_DIR),
            generated_types_dir: project_root.join(DEFAULT_GENERATED_TYPES_DIR),
            project_root,
            client_types: DEFAULT_CLIENT_TYPES.to_string(),
            contributors: Vec::new(),
        }
    }

    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = source_root.into();
        self
    }

    pub fn with_generated_types_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.generated_types_dir = dir.into();
        self
    }

    pub fn with_client_types(mut self, client_types: impl Into<String>) -> Self {
        self.client_types = client_types.into();
        self
    }

    /// Register a contributor after all previously registered ones
    pub fn with_contributor(mut self, contributor: ContributorDescriptor) -> Self {
        self.contributors.push(contributor);
        self
    }

    /// Register several contributors, keeping their order
    pub fn inject_types(&mut self, contributors: impl IntoIterator<Item = ContributorDescriptor>) {
        self.contributors.extend(contributors);
    }
}
