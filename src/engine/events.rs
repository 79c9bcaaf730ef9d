use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::instance::{Actor, WorkflowInstance};
use crate::engine::status::WorkflowStatus;
use crate::errors::WorkflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionOutcome {
    Completed,
    Refused,
}

/// What happened when an operation ran against an instance. Emitted for
/// refusals too, so notification and audit code see every attempt.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionEvent {
    pub instance_id: String,
    pub from: WorkflowStatus,
    /// Reached status on completion; requested target on refusal. A
    /// refusal with no nameable target (failed correction) repeats `from`.
    pub to: WorkflowStatus,
    pub outcome: TransitionOutcome,
    pub actor_id: Option<String>,
    pub at: DateTime<Utc>,
}

/// Side-effect subscribers: toasts, audit trails. Observers run after the
/// instance mutation is committed; nothing they do can undo it.
pub trait WorkflowObserver {
    fn on_transition(&self, event: &TransitionEvent);
}

/// Controller wrapping every instance operation with event emission.
///
/// The engine itself holds no workflow state; instances are passed in and
/// the static tables do the validation. Callers that do not care about
/// observers can use the `WorkflowInstance` operations directly.
#[derive(Default)]
pub struct WorkflowEngine {
    observers: Vec<Arc<dyn WorkflowObserver>>,
}

impl WorkflowEngine {
    pub fn new() -> WorkflowEngine {
        WorkflowEngine { observers: Vec::new() }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn WorkflowObserver>) {
        self.observers.push(observer);
    }

    pub fn transmit_to_ministry_sg(
        &self,
        instance: &mut WorkflowInstance,
        actor: &Actor,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.transmit_to_ministry_sg(actor))
    }

    pub fn consolidate_at_ministry_sg(
        &self,
        instance: &mut WorkflowInstance,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.consolidate_at_ministry_sg())
    }

    pub fn transmit_to_government_sg(
        &self,
        instance: &mut WorkflowInstance,
        actor: &Actor,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.transmit_to_government_sg(actor))
    }

    pub fn consolidate_at_government_sg(
        &self,
        instance: &mut WorkflowInstance,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.consolidate_at_government_sg())
    }

    pub fn transmit_to_pm(
        &self,
        instance: &mut WorkflowInstance,
        actor: &Actor,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.transmit_to_pm(actor))
    }

    pub fn transmit_to_presidency_sg(
        &self,
        instance: &mut WorkflowInstance,
        actor: &Actor,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.transmit_to_presidency_sg(actor))
    }

    pub fn reject_to(
        &self,
        instance: &mut WorkflowInstance,
        reason: &str,
        target: WorkflowStatus,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.reject_to(reason, target))
    }

    pub fn correct_after_rejection(
        &self,
        instance: &mut WorkflowInstance,
    ) -> Result<(), WorkflowError> {
        self.run(instance, |i| i.correct_after_rejection())
    }

    pub fn reset(&self, instance: &mut WorkflowInstance, target: WorkflowStatus) {
        let event = instance.reset(target);
        self.emit(&event);
    }

    fn run(
        &self,
        instance: &mut WorkflowInstance,
        op: impl FnOnce(&mut WorkflowInstance) -> Result<TransitionEvent, WorkflowError>,
    ) -> Result<(), WorkflowError> {
        let instance_id = instance.id.clone();
        let from = instance.status;
        match op(instance) {
            Ok(event) => {
                self.emit(&event);
                Ok(())
            }
            Err(err) => {
                self.emit(&TransitionEvent {
                    instance_id,
                    from,
                    to: err.requested_target().unwrap_or(from),
                    outcome: TransitionOutcome::Refused,
                    actor_id: None,
                    at: Utc::now(),
                });
                Err(err)
            }
        }
    }

    fn emit(&self, event: &TransitionEvent) {
        for observer in &self.observers {
            observer.on_transition(event);
        }
    }
}
