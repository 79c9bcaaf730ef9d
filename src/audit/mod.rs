use std::sync::Mutex;

use serde_json::Value;

use crate::engine::events::{TransitionEvent, TransitionOutcome, WorkflowObserver};

/// In-memory audit trail of every transition attempt, completed or
/// refused. Entries are JSON objects so callers can ship them to whatever
/// audit sink the surrounding system uses.
#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Mutex<Vec<Value>>,
}

impl AuditTrail {
    pub fn new() -> AuditTrail {
        AuditTrail::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Vec<Value> {
        self.lock().clone()
    }

    /// Entries recorded for one instance, oldest first.
    pub fn entries_for(&self, instance_id: &str) -> Vec<Value> {
        self.lock()
            .iter()
            .filter(|e| e.get("instance_id").and_then(Value::as_str) == Some(instance_id))
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Value>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WorkflowObserver for AuditTrail {
    fn on_transition(&self, event: &TransitionEvent) {
        let outcome = match event.outcome {
            TransitionOutcome::Completed => "completed",
            TransitionOutcome::Refused => "refused",
        };
        let entry = serde_json::json!({
            "instance_id": event.instance_id,
            "from": event.from.as_code(),
            "to": event.to.as_code(),
            "outcome": outcome,
            "actor_id": event.actor_id,
            "at": event.at.to_rfc3339(),
        });
        self.lock().push(entry);
    }
}
