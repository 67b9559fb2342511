use crate::types::{NoteFormat, PatchSpec, Period, SearchHit};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The vault answered with a non-success status.
    #[error("Error {code}: {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },
    #[error("Request failed: {0}")]
    Http(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Operations the tool layer can perform against a vault.
///
/// Every method is a single remote call. Nothing here retries or caches.
#[async_trait]
pub trait VaultClient: Send + Sync {
    /// Entries in the vault root. Directories end with `/`.
    async fn list_files_in_vault(&self) -> Result<Vec<String>, ClientError>;

    /// Entries in `dirpath`. Empty directories are not reported by the vault.
    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>, ClientError>;

    async fn get_file_contents(&self, filepath: &str) -> Result<String, ClientError>;

    async fn search(
        &self,
        query: &str,
        context_length: u64,
    ) -> Result<Vec<SearchHit>, ClientError>;

    /// JsonLogic search. The result shape is owned by the vault.
    async fn search_json(
        &self,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError>;

    /// Appends to `filepath`, creating the file when it does not exist.
    async fn append_content(&self, filepath: &str, content: &str) -> Result<(), ClientError>;

    async fn patch_content(&self, filepath: &str, patch: &PatchSpec) -> Result<(), ClientError>;

    async fn delete_file(&self, filepath: &str) -> Result<(), ClientError>;

    async fn get_periodic_note(
        &self,
        period: Period,
        format: NoteFormat,
    ) -> Result<String, ClientError>;

    async fn get_recent_periodic_notes(
        &self,
        period: Period,
        limit: u64,
        include_content: bool,
    ) -> Result<serde_json::Value, ClientError>;

    async fn get_recent_changes(
        &self,
        limit: u64,
        days: u64,
    ) -> Result<serde_json::Value, ClientError>;
}
