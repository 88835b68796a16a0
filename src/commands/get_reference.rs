use crate::{
    config::RegistrySettings,
    registry::{RegistryClient, SchemaRegistryApi},
};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::info;

pub async fn run(subject: String, version: String, context: String) -> Result<()> {
    let settings = RegistrySettings::from_env()?;
    let client = RegistryClient::new(&settings)?;
    let references = resolve_references(&client, &context, &subject, &version).await?;
    println!("{}", render(&references)?);
    Ok(())
}

/// Map every schema referencing `subject`@`version` to its `subject-version-N` label
///
/// Lookups run one after another and the first failure aborts the whole
/// resolution, so a partial map is never returned.
pub async fn resolve_references<R>(
    registry: &R,
    context: &str,
    subject: &str,
    version: &str,
) -> Result<BTreeMap<String, String>>
where
    R: SchemaRegistryApi + ?Sized,
{
    info!(
        "Resolving references to {} version {} in context {}",
        subject, version, context
    );

    let ids = registry
        .referenced_by(context, subject, version)
        .await
        .with_context(|| format!("fetching schemas referencing {}@{}", subject, version))?;

    let mut references = BTreeMap::new();
    for id in ids {
        let record = registry
            .versions_by_id(context, id)
            .await
            .with_context(|| format!("resolving schema id {}", id))?;
        references.insert(id.to_string(), record.label());
    }
    Ok(references)
}

/// Pretty JSON with two-space indentation
pub fn render(references: &BTreeMap<String, String>) -> Result<String> {
    Ok(serde_json::to_string_pretty(references)?)
}
