use crate::content::{Content, ToolDescriptor};
use crate::error::ToolError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// One callable tool.
///
/// `execute` validates its own arguments and must fail with
/// [`ToolError::InvalidArguments`] before touching the vault when they are wrong.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    fn describe(&self) -> ToolDescriptor;

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Vec<Content>, ToolError>;
}
