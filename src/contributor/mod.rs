//! Contributors: feature modules that ask for a type reference in `env.d.ts`.
//!
//! A contributor names a declaration file inside the generated-types directory
//! and carries an [`Activation`] deciding whether it is currently included.

mod condition;
mod evaluate;
mod types;

pub use condition::{Condition, ConditionError, EnvVarSet, FnCondition, HasFiles, PathExists};
pub use evaluate::{evaluate_all, is_active};
pub use types::{Activation, ContributorDescriptor};
