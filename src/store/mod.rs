use std::collections::HashMap;
use std::sync::Mutex;

use crate::engine::instance::WorkflowInstance;
use crate::errors::WorkflowError;

/// Persistence boundary. The engine assumes exclusive access to an
/// instance for the duration of a transition; implementations must
/// guarantee at-most-one-writer-per-instance (row lock, optimistic
/// version, or equivalent) around the caller's load-mutate-save cycle.
pub trait InstanceStore {
    fn load(&self, id: &str) -> Result<WorkflowInstance, WorkflowError>;
    fn save(&self, instance: &WorkflowInstance) -> Result<(), WorkflowError>;
}

/// Map-backed store for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    instances: Mutex<HashMap<String, WorkflowInstance>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl InstanceStore for MemoryStore {
    fn load(&self, id: &str) -> Result<WorkflowInstance, WorkflowError> {
        let map = self.instances.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        map.get(id).cloned().ok_or_else(|| WorkflowError::NotFound(id.to_string()))
    }

    fn save(&self, instance: &WorkflowInstance) -> Result<(), WorkflowError> {
        let mut map = self.instances.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        map.insert(instance.id.clone(), instance.clone());
        Ok(())
    }
}
