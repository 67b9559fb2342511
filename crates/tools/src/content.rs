use crate::error::ToolError;
use serde::{Deserialize, Serialize};

/// Name, description and argument schema of a tool, as published by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// One item of a tool response. Serializes to the MCP content shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text {
        text: String,
    },
    Image {
        /// Base64 payload.
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    Resource {
        resource: EmbeddedResource,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedResource {
    pub uri: String,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub text: String,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }

    /// Text item holding `value` as two-space indented JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
        serde_json::to_string_pretty(value)
            .map(Content::text)
            .map_err(|e| ToolError::Internal(format!("Failed to serialize result: {}", e)))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_serializes_in_mcp_shape() {
        let value = serde_json::to_value(Content::text("abc")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "abc"}));
    }

    #[test]
    fn image_uses_camel_case_mime_type() {
        let value = serde_json::to_value(Content::Image {
            data: "aGk=".into(),
            mime_type: "image/png".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "image", "data": "aGk=", "mimeType": "image/png"})
        );
    }

    #[test]
    fn resource_omits_missing_mime_type() {
        let value = serde_json::to_value(Content::Resource {
            resource: EmbeddedResource {
                uri: "obsidian://a.md".into(),
                mime_type: None,
                text: "x".into(),
            },
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "resource", "resource": {"uri": "obsidian://a.md", "text": "x"}})
        );
    }

    #[test]
    fn json_content_is_pretty_printed() {
        let content = Content::json(&vec!["a.md"]).unwrap();
        assert_eq!(content.as_text(), Some("[\n  \"a.md\"\n]"));
    }

    #[test]
    fn descriptor_uses_input_schema_key() {
        let descriptor = ToolDescriptor::new("t", "d", json!({"type": "object"}));
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["inputSchema"], json!({"type": "object"}));
    }
}
