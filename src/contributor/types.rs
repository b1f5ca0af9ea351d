use super::condition::Condition;
use std::fmt;
use std::sync::Arc;

/// How a contributor decides whether its reference belongs in `env.d.ts`
#[derive(Clone, Default)]
pub enum Activation {
    /// Always included
    Always,
    /// Included when the predicate resolves to `true`
    When(Arc<dyn Condition>),
    /// No predicate was supplied. Treated as inactive.
    #[default]
    Unspecified,
}

impl Activation {
    pub fn when(condition: impl Condition + 'static) -> Self {
        Activation::When(Arc::new(condition))
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Always => f.write_str("Always"),
            Activation::When(condition) => write!(f, "When({})", condition.describe()),
            Activation::Unspecified => f.write_str("Unspecified"),
        }
    }
}

/// A feature module's request to have a type reference in `env.d.ts`
#[derive(Debug, Clone)]
pub struct ContributorDescriptor {
    /// Declaration file name, relative to the generated-types directory
    pub filename: String,
    pub activation: Activation,
}

impl ContributorDescriptor {
    /// Create a contributor without a predicate
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            activation: Activation::Unspecified,
        }
    }

    /// Create a contributor that is always active
    pub fn always(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            activation: Activation::Always,
        }
    }

    /// Create a contributor gated on a predicate
    pub fn when(filename: impl Into<String>, condition: impl Condition + 'static) -> Self {
        Self {
            filename: filename.into(),
            activation: Activation::when(condition),
        }
    }
}
