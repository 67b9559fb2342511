use crate::content::ToolDescriptor;
use crate::error::RegistryError;
use crate::traits::ToolHandler;
use std::collections::HashMap;
use std::sync::Arc;

struct Entry {
    descriptor: ToolDescriptor,
    handler: Arc<dyn ToolHandler>,
}

/// Name to handler table, filled at startup.
///
/// There is no removal. Once wrapped in an `Arc` and handed to the
/// dispatcher the registry is read-only.
pub struct ToolRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds `handler` under its descriptor's name. A taken name is rejected
    /// and the existing entry is left in place.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> Result<&mut Self, RegistryError> {
        let descriptor = handler.describe();
        if self.index.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateTool(descriptor.name));
        }
        self.index
            .insert(descriptor.name.clone(), self.entries.len());
        self.entries.push(Entry {
            descriptor,
            handler,
        });
        Ok(self)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].handler.clone())
    }

    /// Descriptors in registration order.
    pub fn list_descriptors(&self) -> Vec<ToolDescriptor> {
        self.entries.iter().map(|e| e.descriptor.clone()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.descriptor.name.as_str())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
