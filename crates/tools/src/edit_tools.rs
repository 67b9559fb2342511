//! Tools that mutate the vault. Each call reaches the vault at most once.

use crate::args::Args;
use crate::content::{Content, ToolDescriptor};
use crate::error::ToolError;
use crate::traits::ToolHandler;
use async_trait::async_trait;
use obsidian_remote_client::{PatchSpec, VaultClient};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

pub struct AppendContentTool {
    client: Arc<dyn VaultClient>,
}

impl AppendContentTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for AppendContentTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_append_content",
            "Append content to a new or existing file in the vault.",
            json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the file (relative to vault root)",
                        "format": "path"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to append to the file"
                    }
                },
                "required": ["filepath", "content"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let filepath = args.required_str("filepath")?;
        let content = args.required_str("content")?;

        self.client.append_content(filepath, content).await?;
        info!("Appended {} bytes to {}", content.len(), filepath);

        Ok(vec![Content::text(format!(
            "Successfully appended content to {}",
            filepath
        ))])
    }
}

pub struct PatchContentTool {
    client: Arc<dyn VaultClient>,
}

impl PatchContentTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for PatchContentTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_patch_content",
            "Insert content into an existing note relative to a heading, block reference, or frontmatter field.",
            json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the file (relative to vault root)",
                        "format": "path"
                    },
                    "operation": {
                        "type": "string",
                        "description": "Operation to perform (append, prepend, or replace)",
                        "enum": ["append", "prepend", "replace"]
                    },
                    "target_type": {
                        "type": "string",
                        "description": "Type of target to patch",
                        "enum": ["heading", "block", "frontmatter"]
                    },
                    "target": {
                        "type": "string",
                        "description": "Target identifier (heading path, block reference, or frontmatter field)"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to insert"
                    }
                },
                "required": ["filepath", "operation", "target_type", "target", "content"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let filepath = args.required_str("filepath")?;
        let patch = PatchSpec {
            operation: args.required_enum("operation")?,
            target_type: args.required_enum("target_type")?,
            target: args.required_str("target")?.to_string(),
            content: args.required_str("content")?.to_string(),
        };

        self.client.patch_content(filepath, &patch).await?;
        info!(
            "Patched {} ({} {} '{}')",
            filepath,
            patch.operation.as_str(),
            patch.target_type.as_str(),
            patch.target
        );

        Ok(vec![Content::text(format!(
            "Successfully patched content in {}",
            filepath
        ))])
    }
}

pub struct DeleteFileTool {
    client: Arc<dyn VaultClient>,
}

impl DeleteFileTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for DeleteFileTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_delete_file",
            "Delete a file or directory from the vault.",
            json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "Path to the file or directory to delete (relative to vault root)",
                        "format": "path"
                    },
                    "confirm": {
                        "type": "boolean",
                        "description": "Confirmation to delete the file (must be true)",
                        "default": false
                    }
                },
                "required": ["filepath", "confirm"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let filepath = args.required_str("filepath")?;
        if !args.required_bool("confirm")? {
            return Err(ToolError::InvalidArguments(
                "confirm must be set to true to delete a file".into(),
            ));
        }

        self.client.delete_file(filepath).await?;
        info!("Deleted {}", filepath);

        Ok(vec![Content::text(format!("Successfully deleted {}", filepath))])
    }
}
