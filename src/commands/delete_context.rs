use crate::{
    config::RegistrySettings,
    registry::{RegistryClient, SchemaRegistryApi},
    subject::filter_by_context,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of deleting every subject of a context
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    /// `(subject, reason)` for each delete that did not succeed
    pub failed: Vec<(String, String)>,
}

pub async fn run(context: String) -> Result<()> {
    let settings = RegistrySettings::from_env()?;
    let client = RegistryClient::new(&settings)?;
    delete_context(Arc::new(client), &context).await?;
    Ok(())
}

/// Delete every subject that belongs to `context`
///
/// Listing and filtering errors abort before any delete is issued. Once the
/// deletes are launched they all run to completion; individual failures are
/// logged and collected in the report rather than returned as an error.
pub async fn delete_context<R>(registry: Arc<R>, context: &str) -> Result<DeleteReport>
where
    R: SchemaRegistryApi + 'static,
{
    info!("Deleting context {}", context);

    let subjects = registry
        .list_subjects()
        .await
        .context("listing subjects")?;
    let matched = filter_by_context(context, &subjects)
        .with_context(|| format!("filtering subjects for context '{}'", context))?;
    info!("Found {} subjects for context {}", matched.len(), context);

    // one task per subject, no limit on how many are in flight
    let handles: Vec<_> = matched
        .into_iter()
        .map(|subject| {
            let registry = Arc::clone(&registry);
            let task_subject = subject.clone();
            let handle =
                tokio::spawn(async move { registry.delete_subject(&task_subject).await });
            (subject, handle)
        })
        .collect();

    let mut report = DeleteReport::default();
    for (subject, handle) in handles {
        match handle.await {
            Ok(Ok(())) => {
                info!("Deleted subject {}", subject);
                report.deleted.push(subject);
            }
            Ok(Err(e)) => {
                warn!("Failed to delete subject {}: {}", subject, e);
                report.failed.push((subject, e.to_string()));
            }
            Err(e) => {
                warn!("Delete task for subject {} did not finish: {}", subject, e);
                report.failed.push((subject, e.to_string()));
            }
        }
    }

    info!(
        deleted = report.deleted.len(),
        failed = report.failed.len(),
        "Context {} processed",
        context
    );
    Ok(report)
}
