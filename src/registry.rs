use crate::config::RegistrySettings;
use crate::constants::DEFAULT_CONTEXT;
use crate::error::{RegistryError, Result};
use crate::subject::escape_path_segment;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One `(subject, version)` pair registered for a schema id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VersionRecord {
    pub subject: String,
    pub version: i64,
}

impl VersionRecord {
    /// Human-readable label, e.g. `orders-value-version-3`
    pub fn label(&self) -> String {
        format!("{}-version-{}", self.subject, self.version)
    }
}

/// The slice of the registry REST API the commands rely on
#[async_trait]
pub trait SchemaRegistryApi: Send + Sync {
    /// `GET /subjects`
    async fn list_subjects(&self) -> Result<Vec<String>>;

    /// `DELETE /subjects/{subject}`, subject used verbatim
    async fn delete_subject(&self, subject: &str) -> Result<()>;

    /// Ids of the schemas referencing `subject` at `version`
    async fn referenced_by(&self, context: &str, subject: &str, version: &str) -> Result<Vec<i64>>;

    /// First `(subject, version)` registered for schema `id`
    async fn versions_by_id(&self, context: &str, id: i64) -> Result<VersionRecord>;
}

/// HTTP client for a Confluent-compatible schema registry
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Clone)]
pub struct RegistryClient {
    pub base_url: String,
    pub client: Client,
}

impl RegistryClient {
    pub fn new(settings: &RegistrySettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let token = base64::encode_config(
            format!("{}:{}", settings.api_key, settings.api_secret),
            base64::STANDARD,
        );
        let mut hv = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|_| RegistryError::InvalidCredentials)?;
        hv.set_sensitive(true);
        headers.insert(AUTHORIZATION, hv);

        let client = Client::builder().default_headers(headers).build()?;
        Ok(RegistryClient {
            base_url: settings.url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn subjects_url(&self) -> String {
        format!("{}/subjects", self.base_url)
    }

    pub fn subject_url(&self, subject: &str) -> String {
        format!("{}/subjects/{}", self.base_url, subject)
    }

    pub fn referenced_by_url(&self, context: &str, subject: &str, version: &str) -> String {
        format!(
            "{}/subjects/{}/versions/{}/referencedby",
            self.context_root(context),
            escape_path_segment(subject),
            version
        )
    }

    pub fn versions_by_id_url(&self, context: &str, id: i64) -> String {
        format!("{}/schemas/ids/{}/versions", self.context_root(context), id)
    }

    /// Base URL, prefixed with `/contexts/{context}` unless it is the default context
    fn context_root(&self, context: &str) -> String {
        if context == DEFAULT_CONTEXT {
            self.base_url.clone()
        } else {
            format!("{}/contexts/{}", self.base_url, context)
        }
    }

    /// Send a request and return the body of a 200 response
    async fn send(&self, method: Method, url: &str) -> Result<String> {
        debug!(%method, url, "registry request");
        let resp = self.client.request(method, url).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RegistryError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.send(Method::GET, url).await?;
        serde_json::from_str(&body).map_err(|source| RegistryError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl SchemaRegistryApi for RegistryClient {
    async fn list_subjects(&self) -> Result<Vec<String>> {
        self.get_json(&self.subjects_url()).await
    }

    async fn delete_subject(&self, subject: &str) -> Result<()> {
        self.send(Method::DELETE, &self.subject_url(subject)).await?;
        Ok(())
    }

    async fn referenced_by(&self, context: &str, subject: &str, version: &str) -> Result<Vec<i64>> {
        self.get_json(&self.referenced_by_url(context, subject, version))
            .await
    }

    async fn versions_by_id(&self, context: &str, id: i64) -> Result<VersionRecord> {
        let records: Vec<VersionRecord> = self.get_json(&self.versions_by_id_url(context, id)).await?;
        // the registry may list several subjects for one id; the first one wins
        records
            .into_iter()
            .next()
            .ok_or(RegistryError::NoVersions { id })
    }
}
