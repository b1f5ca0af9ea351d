use super::types::{Activation, ContributorDescriptor};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Decide whether a single contributor is active.
///
/// A failing predicate counts as inactive and is only logged.
pub async fn is_active(contributor: &ContributorDescriptor) -> bool {
    match &contributor.activation {
        Activation::Always => true,
        Activation::Unspecified => {
            debug!(
                filename = %contributor.filename,
                "No activation condition given, skipping contributor"
            );
            false
        }
        Activation::When(condition) => match condition.evaluate().await {
            Ok(active) => active,
            Err(e) => {
                warn!(
                    filename = %contributor.filename,
                    condition = %condition.describe(),
                    "Activation condition failed, treating contributor as inactive: {}",
                    e
                );
                false
            }
        },
    }
}

/// Evaluate every contributor concurrently.
///
/// The returned verdicts line up with `contributors` by index.
pub async fn evaluate_all(contributors: &[ContributorDescriptor]) -> Vec<bool> {
    let mut verdicts = vec![false; contributors.len()];
    let mut tasks = JoinSet::new();

    for (index, contributor) in contributors.iter().enumerate() {
        let contributor = contributor.clone();
        tasks.spawn(async move { (index, is_active(&contributor).await) });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, active)) => {
                debug!(
                    filename = %contributors[index].filename,
                    active,
                    "Evaluated contributor"
                );
                verdicts[index] = active;
            }
            // The slot keeps its `false` default
            Err(e) => warn!("Activation condition panicked: {}", e),
        }
    }

    verdicts
}
