#![allow(dead_code)]

use async_trait::async_trait;
use obsidian_remote_client::*;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory vault that records every call it receives.
#[derive(Default)]
pub struct MockVaultClient {
    files: BTreeMap<String, String>,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockVaultClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Every call sleeps first so concurrent requests interleave.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    async fn record(&self, entry: String) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(entry);
    }

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            code: 40400,
            message: "File does not exist".to_string(),
        }
    }
}

#[async_trait]
impl VaultClient for MockVaultClient {
    async fn list_files_in_vault(&self) -> Result<Vec<String>, ClientError> {
        self.record("list_vault".into()).await;
        Ok(self.files.keys().cloned().collect())
    }

    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>, ClientError> {
        self.record(format!("list_dir:{}", dirpath)).await;
        let prefix = format!("{}/", dirpath.trim_end_matches('/'));
        let entries: Vec<String> = self
            .files
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix).map(str::to_string))
            .collect();
        if entries.is_empty() {
            return Err(Self::not_found());
        }
        Ok(entries)
    }

    async fn get_file_contents(&self, filepath: &str) -> Result<String, ClientError> {
        self.record(format!("get:{}", filepath)).await;
        if filepath == "panic.md" {
            panic!("vault client blew up");
        }
        self.files.get(filepath).cloned().ok_or_else(Self::not_found)
    }

    async fn search(
        &self,
        query: &str,
        context_length: u64,
    ) -> Result<Vec<SearchHit>, ClientError> {
        self.record(format!("search:{}:{}", query, context_length)).await;
        Ok(self
            .files
            .iter()
            .filter_map(|(name, body)| {
                let start = body.find(query)? as u64;
                Some(SearchHit {
                    filename: name.clone(),
                    score: 1.0,
                    matches: vec![SearchMatch {
                        context: body.clone(),
                        span: SearchSpan {
                            start,
                            end: start + query.len() as u64,
                        },
                    }],
                })
            })
            .collect())
    }

    async fn search_json(
        &self,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        self.record(format!("search_json:{}", query)).await;
        Ok(json!(self
            .files
            .keys()
            .map(|k| json!({"filename": k, "result": true}))
            .collect::<Vec<_>>()))
    }

    async fn append_content(&self, filepath: &str, content: &str) -> Result<(), ClientError> {
        self.record(format!("append:{}:{}", filepath, content)).await;
        Ok(())
    }

    async fn patch_content(&self, filepath: &str, patch: &PatchSpec) -> Result<(), ClientError> {
        self.record(format!(
            "patch:{}:{}:{}:{}:{}",
            filepath,
            patch.operation.as_str(),
            patch.target_type.as_str(),
            patch.target,
            patch.content
        ))
        .await;
        if !self.files.contains_key(filepath) {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn delete_file(&self, filepath: &str) -> Result<(), ClientError> {
        self.record(format!("delete:{}", filepath)).await;
        Ok(())
    }

    async fn get_periodic_note(
        &self,
        period: Period,
        format: NoteFormat,
    ) -> Result<String, ClientError> {
        self.record(format!("periodic:{}:{}", period, format.as_str()))
            .await;
        Ok(format!("{} note ({})", period, format.as_str()))
    }

    async fn get_recent_periodic_notes(
        &self,
        period: Period,
        limit: u64,
        include_content: bool,
    ) -> Result<serde_json::Value, ClientError> {
        self.record(format!("recent_periodic:{}:{}:{}", period, limit, include_content))
            .await;
        Ok(json!([{"period": period.as_str(), "limit": limit, "include_content": include_content}]))
    }

    async fn get_recent_changes(
        &self,
        limit: u64,
        days: u64,
    ) -> Result<serde_json::Value, ClientError> {
        self.record(format!("recent_changes:{}:{}", limit, days)).await;
        Ok(json!({"limit": limit, "days": days}))
    }
}
