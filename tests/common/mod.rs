#![allow(dead_code)]

use async_trait::async_trait;
use schema_registry_cli::{
    config::RegistrySettings, error::Result, RegistryClient, RegistryError, SchemaRegistryApi,
    VersionRecord,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// In-memory registry that records every call made against it
#[derive(Default)]
pub struct FakeRegistry {
    pub subjects: Vec<String>,
    /// Status returned by `list_subjects` instead of the subjects
    pub list_status: Option<u16>,
    /// Subjects whose delete answers with a 404
    pub failing_deletes: HashSet<String>,
    pub references: Vec<i64>,
    pub versions: HashMap<i64, Vec<VersionRecord>>,
    pub delete_calls: Mutex<Vec<String>>,
    pub reference_calls: Mutex<Vec<(String, String, String)>>,
    pub version_calls: Mutex<Vec<(String, i64)>>,
}

impl FakeRegistry {
    pub fn with_subjects(subjects: &[&str]) -> Self {
        FakeRegistry {
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, id: i64, subject: &str, version: i64) -> Self {
        self.versions.entry(id).or_default().push(VersionRecord {
            subject: subject.to_string(),
            version,
        });
        self
    }

    pub fn deleted(&self) -> Vec<String> {
        let mut calls = self.delete_calls.lock().unwrap().clone();
        calls.sort();
        calls
    }
}

#[async_trait]
impl SchemaRegistryApi for FakeRegistry {
    async fn list_subjects(&self) -> Result<Vec<String>> {
        if let Some(status) = self.list_status {
            return Err(RegistryError::Status {
                status,
                url: "fake/subjects".to_string(),
            });
        }
        Ok(self.subjects.clone())
    }

    async fn delete_subject(&self, subject: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(subject.to_string());
        if self.failing_deletes.contains(subject) {
            return Err(RegistryError::Status {
                status: 404,
                url: format!("fake/subjects/{}", subject),
            });
        }
        Ok(())
    }

    async fn referenced_by(&self, context: &str, subject: &str, version: &str) -> Result<Vec<i64>> {
        self.reference_calls.lock().unwrap().push((
            context.to_string(),
            subject.to_string(),
            version.to_string(),
        ));
        Ok(self.references.clone())
    }

    async fn versions_by_id(&self, context: &str, id: i64) -> Result<VersionRecord> {
        self.version_calls
            .lock()
            .unwrap()
            .push((context.to_string(), id));
        match self.versions.get(&id) {
            Some(records) => records
                .first()
                .cloned()
                .ok_or(RegistryError::NoVersions { id }),
            None => Err(RegistryError::Status {
                status: 404,
                url: format!("fake/schemas/ids/{}/versions", id),
            }),
        }
    }
}

/// A request as seen by [`StubServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

/// Minimal HTTP/1.1 server on a loopback port answering canned responses
///
/// Routes are keyed by `(method, path)`; anything else gets a 404.
pub struct StubServer {
    pub url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, &str, u16, &str)>) -> Self {
        let routes: HashMap<(String, String), (u16, String)> = routes
            .into_iter()
            .map(|(method, path, status, body)| {
                (
                    (method.to_string(), path.to_string()),
                    (status, body.to_string()),
                )
            })
            .collect();
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&buf).to_string();
                    let mut lines = head.lines();
                    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
                    let method = request_line.next().unwrap_or_default().to_string();
                    let path = request_line.next().unwrap_or_default().to_string();
                    let authorization = lines.find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("authorization")
                            .then(|| value.trim().to_string())
                    });
                    recorded.lock().unwrap().push(RecordedRequest {
                        method: method.clone(),
                        path: path.clone(),
                        authorization,
                    });

                    let (status, body) = routes
                        .get(&(method, path))
                        .cloned()
                        .unwrap_or((404, r#"{"error_code":40401}"#.to_string()));
                    let response = format!(
                        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        StubServer {
            url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn client(&self) -> RegistryClient {
        RegistryClient::new(&RegistrySettings::new(&self.url, "key", "secret")).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }
}
