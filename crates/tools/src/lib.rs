pub mod args;
pub mod builtin;
pub mod content;
pub mod dispatcher;
pub mod edit_tools;
pub mod error;
pub mod file_tools;
pub mod periodic_tools;
pub mod registry;
pub mod search_tools;
pub mod traits;

pub use builtin::default_registry;
pub use content::{Content, EmbeddedResource, ToolDescriptor};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, FailureKind, RegistryError, ToolError};
pub use registry::ToolRegistry;
pub use traits::ToolHandler;
