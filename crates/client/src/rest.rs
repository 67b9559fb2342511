use crate::config::VaultConfig;
use crate::traits::{ClientError, VaultClient};
use crate::types::{NoteFormat, PatchSpec, Period, SearchHit};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

const MARKDOWN: &str = "text/markdown";
const JSONLOGIC: &str = "application/vnd.olrapi.jsonlogic+json";
const DATAVIEW_DQL: &str = "application/vnd.olrapi.dataview.dql+txt";
const NOTE_JSON: &str = "application/vnd.olrapi.note+json";

#[derive(Deserialize)]
struct FileList {
    files: Vec<String>,
}

#[derive(Deserialize, Default)]
struct ApiErrorBody {
    #[serde(rename = "errorCode")]
    error_code: Option<i64>,
    message: Option<String>,
}

/// [`VaultClient`] over the Local REST API plugin.
#[derive(Clone)]
pub struct RestVaultClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestVaultClient {
    pub fn new(config: &VaultConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!config.verify_ssl);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let parsed: ApiErrorBody = serde_json::from_slice(&body).unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            code: parsed.error_code.unwrap_or(-1),
            message: parsed.message.unwrap_or_else(|| "<unknown>".to_string()),
        })
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn send_text(&self, request: RequestBuilder) -> Result<String, ClientError> {
        self.send(request)
            .await?
            .text()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Percent-encodes each segment of a vault path, keeping `/` separators.
pub(crate) fn encode_vault_path(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub(crate) fn recent_changes_query(limit: u64, days: u64) -> String {
    [
        "TABLE file.mtime".to_string(),
        format!("WHERE file.mtime >= date(today) - dur({} days)", days),
        "SORT file.mtime DESC".to_string(),
        format!("LIMIT {}", limit),
    ]
    .join("\n")
}

#[async_trait]
impl VaultClient for RestVaultClient {
    async fn list_files_in_vault(&self) -> Result<Vec<String>, ClientError> {
        debug!("Listing vault root");
        let list: FileList = self
            .send_json(self.client.get(self.url("/vault/")))
            .await?;
        Ok(list.files)
    }

    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>, ClientError> {
        debug!("Listing directory: {}", dirpath);
        let url = self.url(&format!("/vault/{}/", encode_vault_path(dirpath)));
        let list: FileList = self.send_json(self.client.get(url)).await?;
        Ok(list.files)
    }

    async fn get_file_contents(&self, filepath: &str) -> Result<String, ClientError> {
        debug!("Reading file: {}", filepath);
        let url = self.url(&format!("/vault/{}", encode_vault_path(filepath)));
        self.send_text(self.client.get(url)).await
    }

    async fn search(
        &self,
        query: &str,
        context_length: u64,
    ) -> Result<Vec<SearchHit>, ClientError> {
        debug!("Simple search: {}", query);
        let context_length = context_length.to_string();
        let request = self
            .client
            .post(self.url("/search/simple/"))
            .query(&[("query", query), ("contextLength", context_length.as_str())]);
        self.send_json(request).await
    }

    async fn search_json(
        &self,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let body = serde_json::to_vec(query).map_err(|e| ClientError::Parse(e.to_string()))?;
        let request = self
            .client
            .post(self.url("/search/"))
            .header(CONTENT_TYPE, JSONLOGIC)
            .body(body);
        self.send_json(request).await
    }

    async fn append_content(&self, filepath: &str, content: &str) -> Result<(), ClientError> {
        let url = self.url(&format!("/vault/{}", encode_vault_path(filepath)));
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, MARKDOWN)
            .body(content.to_string());
        self.send(request).await?;
        Ok(())
    }

    async fn patch_content(&self, filepath: &str, patch: &PatchSpec) -> Result<(), ClientError> {
        let url = self.url(&format!("/vault/{}", encode_vault_path(filepath)));
        let request = self
            .client
            .patch(url)
            .header(CONTENT_TYPE, MARKDOWN)
            .header("Operation", patch.operation.as_str())
            .header("Target-Type", patch.target_type.as_str())
            .header("Target", urlencoding::encode(&patch.target).into_owned())
            .body(patch.content.clone());
        self.send(request).await?;
        Ok(())
    }

    async fn delete_file(&self, filepath: &str) -> Result<(), ClientError> {
        let url = self.url(&format!("/vault/{}", encode_vault_path(filepath)));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn get_periodic_note(
        &self,
        period: Period,
        format: NoteFormat,
    ) -> Result<String, ClientError> {
        let mut request = self
            .client
            .get(self.url(&format!("/periodic/{}/", period)));
        if format == NoteFormat::Metadata {
            request = request.header(ACCEPT, NOTE_JSON);
        }
        self.send_text(request).await
    }

    async fn get_recent_periodic_notes(
        &self,
        period: Period,
        limit: u64,
        include_content: bool,
    ) -> Result<serde_json::Value, ClientError> {
        let limit = limit.to_string();
        let include_content = include_content.to_string();
        let request = self
            .client
            .get(self.url(&format!("/periodic/{}/recent", period)))
            .query(&[
                ("limit", limit.as_str()),
                ("includeContent", include_content.as_str()),
            ]);
        self.send_json(request).await
    }

    async fn get_recent_changes(
        &self,
        limit: u64,
        days: u64,
    ) -> Result<serde_json::Value, ClientError> {
        let request = self
            .client
            .post(self.url("/search/"))
            .header(CONTENT_TYPE, DATAVIEW_DQL)
            .body(recent_changes_query(limit, days));
        self.send_json(request).await
    }
}
