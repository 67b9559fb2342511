use crate::args::Args;
use crate::content::{Content, ToolDescriptor};
use crate::error::ToolError;
use crate::traits::ToolHandler;
use async_trait::async_trait;
use obsidian_remote_client::VaultClient;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::warn;

pub struct ListFilesInVaultTool {
    client: Arc<dyn VaultClient>,
}

impl ListFilesInVaultTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for ListFilesInVaultTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_list_files_in_vault",
            "Lists all files and directories in the root directory of your Obsidian vault.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        )
    }

    async fn execute(&self, _arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let files = self.client.list_files_in_vault().await?;
        Ok(vec![Content::json(&files)?])
    }
}

pub struct ListFilesInDirTool {
    client: Arc<dyn VaultClient>,
}

impl ListFilesInDirTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for ListFilesInDirTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_list_files_in_dir",
            "Lists all files and directories that exist in a specific Obsidian directory.",
            json!({
                "type": "object",
                "properties": {
                    "dirpath": {
                        "type": "string",
                        "description": "Path to list files from (relative to your vault root). Note that empty directories will not be returned."
                    }
                },
                "required": ["dirpath"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let dirpath = Args::new(&arguments).required_str("dirpath")?;
        let files = self.client.list_files_in_dir(dirpath).await?;
        Ok(vec![Content::json(&files)?])
    }
}

pub struct GetFileContentsTool {
    client: Arc<dyn VaultClient>,
}

impl GetFileContentsTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for GetFileContentsTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_get_file_contents",
            "Return the content of a single file in your vault.",
            json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the relevant file (relative to your vault root).",
                        "format": "path"
                    }
                },
                "required": ["filepath"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let filepath = Args::new(&arguments).required_str("filepath")?;
        let text = self.client.get_file_contents(filepath).await?;
        Ok(vec![Content::text(text)])
    }
}

/// Reads several files into one text item, one section per file.
///
/// A file that cannot be read produces an error section instead of failing
/// the call; only bad arguments fail the whole batch.
pub struct BatchGetFileContentsTool {
    client: Arc<dyn VaultClient>,
}

impl BatchGetFileContentsTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for BatchGetFileContentsTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_batch_get_file_contents",
            "Return the contents of multiple files in your vault, concatenated with headers.",
            json!({
                "type": "object",
                "properties": {
                    "filepaths": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "description": "Path to a file (relative to your vault root)",
                            "format": "path"
                        },
                        "description": "List of file paths to read"
                    }
                },
                "required": ["filepaths"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let filepaths = Args::new(&arguments).required_str_list("filepaths")?;
        if filepaths.is_empty() {
            return Err(ToolError::InvalidArguments(
                "filepaths must contain at least one path".into(),
            ));
        }

        let mut out = String::new();
        for filepath in filepaths {
            match self.client.get_file_contents(filepath).await {
                Ok(content) => {
                    out.push_str(&format!("# {}\n\n{}\n\n---\n\n", filepath, content));
                }
                Err(e) => {
                    warn!("Batch read of {} failed: {}", filepath, e);
                    out.push_str(&format!(
                        "# {}\n\nError reading file: {}\n\n---\n\n",
                        filepath, e
                    ));
                }
            }
        }

        Ok(vec![Content::text(out)])
    }
}
