use crate::args::Args;
use crate::content::{Content, ToolDescriptor};
use crate::error::ToolError;
use crate::traits::ToolHandler;
use async_trait::async_trait;
use obsidian_remote_client::{NoteFormat, Period, VaultClient};
use serde_json::{json, Map, Value};
use std::sync::Arc;

const PERIODS: [&str; 5] = ["daily", "weekly", "monthly", "quarterly", "yearly"];

pub struct PeriodicNoteTool {
    client: Arc<dyn VaultClient>,
}

impl PeriodicNoteTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for PeriodicNoteTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_get_periodic_note",
            "Get current periodic note for the specified period.",
            json!({
                "type": "object",
                "properties": {
                    "period": {
                        "type": "string",
                        "description": "The period type (daily, weekly, monthly, quarterly, yearly)",
                        "enum": PERIODS
                    },
                    "type": {
                        "type": "string",
                        "description": "The type of data to get ('content' or 'metadata'). 'content' returns just the content in Markdown format. 'metadata' includes note metadata (including paths, tags, etc.) and the content.",
                        "default": "content",
                        "enum": ["content", "metadata"]
                    }
                },
                "required": ["period"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let period: Period = args.required_enum("period")?;
        let format: NoteFormat = args.optional_enum("type")?.unwrap_or_default();

        let note = self.client.get_periodic_note(period, format).await?;
        Ok(vec![Content::text(note)])
    }
}

pub struct RecentPeriodicNotesTool {
    client: Arc<dyn VaultClient>,
}

impl RecentPeriodicNotesTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for RecentPeriodicNotesTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_get_recent_periodic_notes",
            "Get most recent periodic notes for the specified period type.",
            json!({
                "type": "object",
                "properties": {
                    "period": {
                        "type": "string",
                        "description": "The period type (daily, weekly, monthly, quarterly, yearly)",
                        "enum": PERIODS
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of notes to return (default: 5)",
                        "default": 5,
                        "minimum": 1,
                        "maximum": 50
                    },
                    "include_content": {
                        "type": "boolean",
                        "description": "Whether to include note content (default: false)",
                        "default": false
                    }
                },
                "required": ["period"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let period: Period = args.required_enum("period")?;
        let limit = args.optional_int("limit", 5, 1, Some(50))?;
        let include_content = args.optional_bool("include_content", false)?;

        let notes = self
            .client
            .get_recent_periodic_notes(period, limit, include_content)
            .await?;
        Ok(vec![Content::json(&notes)?])
    }
}

pub struct RecentChangesTool {
    client: Arc<dyn VaultClient>,
}

impl RecentChangesTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for RecentChangesTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_get_recent_changes",
            "Get recently modified files in the vault.",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of files to return (default: 10)",
                        "default": 10,
                        "minimum": 1,
                        "maximum": 100
                    },
                    "days": {
                        "type": "integer",
                        "description": "Only include files modified within this many days (default: 90)",
                        "minimum": 1,
                        "default": 90
                    }
                }
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let limit = args.optional_int("limit", 10, 1, Some(100))?;
        let days = args.optional_int("days", 90, 1, None)?;

        let changes = self.client.get_recent_changes(limit, days).await?;
        Ok(vec![Content::json(&changes)?])
    }
}
