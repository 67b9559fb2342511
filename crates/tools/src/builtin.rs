use crate::edit_tools::{AppendContentTool, DeleteFileTool, PatchContentTool};
use crate::error::RegistryError;
use crate::file_tools::{
    BatchGetFileContentsTool, GetFileContentsTool, ListFilesInDirTool, ListFilesInVaultTool,
};
use crate::periodic_tools::{PeriodicNoteTool, RecentChangesTool, RecentPeriodicNotesTool};
use crate::registry::ToolRegistry;
use crate::search_tools::{ComplexSearchTool, SimpleSearchTool};
use obsidian_remote_client::VaultClient;
use std::sync::Arc;

/// Registry holding every vault tool, all sharing `client`.
pub fn default_registry(client: Arc<dyn VaultClient>) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry
        .register(Arc::new(ListFilesInDirTool::new(client.clone())))?
        .register(Arc::new(ListFilesInVaultTool::new(client.clone())))?
        .register(Arc::new(GetFileContentsTool::new(client.clone())))?
        .register(Arc::new(SimpleSearchTool::new(client.clone())))?
        .register(Arc::new(PatchContentTool::new(client.clone())))?
        .register(Arc::new(AppendContentTool::new(client.clone())))?
        .register(Arc::new(DeleteFileTool::new(client.clone())))?
        .register(Arc::new(ComplexSearchTool::new(client.clone())))?
        .register(Arc::new(BatchGetFileContentsTool::new(client.clone())))?
        .register(Arc::new(PeriodicNoteTool::new(client.clone())))?
        .register(Arc::new(RecentPeriodicNotesTool::new(client.clone())))?
        .register(Arc::new(RecentChangesTool::new(client)))?;
    Ok(registry)
}
