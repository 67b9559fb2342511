use obsidian_remote_client::ClientError;
use thiserror::Error;

/// Failure raised by a handler.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Capability(#[from] ClientError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ToolError::InvalidArguments(_) => FailureKind::InvalidArguments,
            ToolError::Capability(_) => FailureKind::CapabilityFailure,
            ToolError::Internal(_) => FailureKind::Internal,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidArguments,
    CapabilityFailure,
    Internal,
}

/// The only error type that leaves the dispatcher.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Arguments must be a JSON object")]
    MalformedRequest,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Error executing tool {tool}: {message}")]
    ToolExecutionFailed {
        tool: String,
        kind: FailureKind,
        message: String,
    },
}

impl DispatchError {
    /// Failure kind for execution failures, `None` for request-level errors.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            DispatchError::ToolExecutionFailed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
