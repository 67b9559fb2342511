use crate::args::Args;
use crate::content::{Content, ToolDescriptor};
use crate::error::ToolError;
use crate::traits::ToolHandler;
use async_trait::async_trait;
use obsidian_remote_client::{SearchHit, VaultClient};
use serde_json::{json, Map, Value};
use std::sync::Arc;

const DEFAULT_CONTEXT_LENGTH: u64 = 100;

pub struct SimpleSearchTool {
    client: Arc<dyn VaultClient>,
}

impl SimpleSearchTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

fn format_hits(hits: &[SearchHit]) -> Value {
    hits.iter()
        .map(|hit| {
            let matches: Vec<Value> = hit
                .matches
                .iter()
                .map(|m| {
                    json!({
                        "context": m.context,
                        "match_position": { "start": m.span.start, "end": m.span.end }
                    })
                })
                .collect();
            json!({
                "filename": hit.filename,
                "score": hit.score,
                "matches": matches
            })
        })
        .collect()
}

#[async_trait]
impl ToolHandler for SimpleSearchTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_simple_search",
            "Simple search for documents matching a specified text query across all files in the vault. \
             Use this tool when you want to do a simple text search",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to a simple search for in the vault."
                    },
                    "context_length": {
                        "type": "integer",
                        "description": "How much context to return around the matching string (default: 100)",
                        "default": DEFAULT_CONTEXT_LENGTH
                    }
                },
                "required": ["query"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let args = Args::new(&arguments);
        let query = args.required_str("query")?;
        let context_length = args.optional_int("context_length", DEFAULT_CONTEXT_LENGTH, 0, None)?;

        let hits = self.client.search(query, context_length).await?;
        Ok(vec![Content::json(&format_hits(&hits))?])
    }
}

pub struct ComplexSearchTool {
    client: Arc<dyn VaultClient>,
}

impl ComplexSearchTool {
    pub fn new(client: Arc<dyn VaultClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ToolHandler for ComplexSearchTool {
    fn describe(&self) -> ToolDescriptor {
        ToolDescriptor::new(
            "obsidian_complex_search",
            "Complex search for documents using a JsonLogic query. \n\
             Supports standard JsonLogic operators plus 'glob' and 'regexp' for pattern matching. Results must be non-falsy.\n\n\
             Use this tool when you want to do a complex search, e.g. for all documents with certain tags etc.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "object",
                        "description": "JsonLogic query object. ALWAYS follow query syntax in examples. \
                            Example 1: {\"glob\": [\"*.md\", {\"var\": \"path\"}]} matches all markdown files \
                            Example 2: {\"and\": [{\"glob\": [\"*.md\", {\"var\": \"path\"}]}, {\"regexp\": [\".*meeting.*\", {\"var\": \"path\"}]}]} matches markdown files containing 'meeting' in their path \
                            Example 3: {\"in\": [\"project\", {\"var\": \"tags\"}]} matches files tagged with 'project'"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError> {
        let query = Args::new(&arguments).required_object("query")?;
        let results = self.client.search_json(query).await?;
        Ok(vec![Content::json(&results)?])
    }
}
