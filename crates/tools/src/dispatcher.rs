use crate::content::{Content, ToolDescriptor};
use crate::error::{DispatchError, FailureKind, ToolError};
use crate::registry::ToolRegistry;
use crate::traits::ToolHandler;
use serde_json::{Map, Value};
use std::any::Any;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const INTERNAL_MESSAGE: &str = "Internal error while running tool";

/// Aborts the handler task if the dispatch future is dropped first.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Resolves tool calls against a frozen registry.
///
/// Stateless between calls: clones share the registry and nothing else.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.list_descriptors()
    }

    pub async fn dispatch(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Result<Vec<Content>, DispatchError> {
        let request_id = Uuid::new_v4();

        // 1. Shape check before anything else
        let arguments = match arguments {
            Value::Object(map) => map,
            other => {
                warn!(
                    "Rejecting call to {} (request {}): arguments are {}",
                    tool_name,
                    request_id,
                    json_kind(&other)
                );
                return Err(DispatchError::MalformedRequest);
            }
        };

        // 2. Lookup
        let handler = self.registry.lookup(tool_name).ok_or_else(|| {
            warn!("Unknown tool: {} (request {})", tool_name, request_id);
            DispatchError::UnknownTool(tool_name.to_string())
        })?;

        info!("Dispatching tool: {} (request {})", tool_name, request_id);

        // 3. Execute
        match Self::execute_isolated(handler, arguments).await {
            Ok(content) => {
                debug!(
                    "Tool {} returned {} content item(s) (request {})",
                    tool_name,
                    content.len(),
                    request_id
                );
                Ok(content)
            }
            Err(err) => {
                error!("Tool {} failed (request {}): {}", tool_name, request_id, err);
                Err(normalize(tool_name, err))
            }
        }
    }

    async fn execute_isolated(
        handler: Arc<dyn ToolHandler>,
        arguments: Map<String, Value>,
    ) -> Result<Vec<Content>, ToolError> {
        // Spawned so a panicking handler cannot take the connection down with it.
        let mut task = AbortOnDrop(tokio::spawn(async move {
            handler.execute(arguments).await
        }));

        match (&mut task.0).await {
            Ok(result) => result,
            Err(join_err) if join_err.is_panic() => Err(ToolError::Internal(format!(
                "tool execution panicked: {}",
                panic_message(join_err.into_panic())
            ))),
            Err(_) => Err(ToolError::Internal("tool execution cancelled".into())),
        }
    }
}

fn normalize(tool_name: &str, err: ToolError) -> DispatchError {
    let kind = err.kind();
    let message = match kind {
        FailureKind::Internal => INTERNAL_MESSAGE.to_string(),
        _ => err.to_string(),
    };
    DispatchError::ToolExecutionFailed {
        tool: tool_name.to_string(),
        kind,
        message,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
