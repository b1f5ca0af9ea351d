pub mod config;
pub mod context;
pub mod contributor;
pub mod merge;
pub mod paths;
pub mod storage;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use config::{
    init_config, load_context, read_config, write_config, ConditionConfig, ConfigError,
    EnvDtsConfig, InjectedTypeConfig,
};
pub use context::SourceRootContext;
pub use contributor::{
    evaluate_all, is_active, Activation, Condition, ConditionError, ContributorDescriptor,
    EnvVarSet, FnCondition, HasFiles, PathExists,
};
pub use merge::{build_fresh, merge_references, MergeOutcome};
pub use paths::{
    baseline_line, env_dts_display_path, env_dts_path, reference_line, reference_path, PathError,
};
pub use storage::{Storage, TokioStorage};
pub use sync::{sync_env_dts, sync_project, SyncError, SyncOutcome, SyncResult};
