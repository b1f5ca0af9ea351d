use std::path::{Component, Path, PathBuf};

/// The name of the generated declaration file inside the source root
pub const ENV_DTS_FILE: &str = "env.d.ts";

/// The name of the project config file
pub const CONFIG_FILE: &str = "env-dts.json";

/// Module referenced by the baseline line of a freshly created file
pub const DEFAULT_CLIENT_TYPES: &str = "astro/client";

/// Default source directory, relative to the project root
pub const DEFAULT_SRC_DIR: &str = "src";

/// Default generated-types directory, relative to the project root
pub const DEFAULT_GENERATED_TYPES_DIR: &str = ".astro";

/// Get the path to the project config file
pub fn get_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// Resolve `.` and `..` components without touching the file system
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if normalized.file_name().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lexically_resolves_dots() {
        let path = Path::new("/project/src/./../.astro/types.d.ts");
        assert_eq!(
            normalize_lexically(path),
            PathBuf::from("/project/.astro/types.d.ts")
        );
    }

    #[test]
    fn test_normalize_lexically_parent_of_root() {
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_lexically_keeps_leading_parents() {
        assert_eq!(
            normalize_lexically(Path::new("../../a/./b")),
            PathBuf::from("../../a/b")
        );
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path(Path::new("/project"));
        assert!(path.ends_with("env-dts.json"));
    }
}
