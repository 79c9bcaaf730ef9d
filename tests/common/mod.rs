//! Shared test infrastructure for the circuit engine tests.
//!
//! No database here: fixtures are plain in-memory instances, plus
//! recording observers for event and toast assertions.

use std::sync::{Arc, Mutex};

use circuit::notify::Notifier;
use circuit::{Actor, TransitionEvent, WorkflowInstance, WorkflowObserver, WorkflowStatus};

pub const DOSSIER_ID: &str = "ptm-2026-03";

/// Route test log output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn alice() -> Actor {
    Actor::new("u1", "Alice")
}

pub fn bob() -> Actor {
    Actor::new("u2", "Bob")
}

/// A dossier advanced through the legal path up to `target`. Panics if
/// `target` is not on the happy path (tests construct rejections
/// themselves).
pub fn dossier_at(target: WorkflowStatus) -> WorkflowInstance {
    let mut inst = WorkflowInstance::new(DOSSIER_ID);
    let steps: [(WorkflowStatus, fn(&mut WorkflowInstance)); 6] = [
        (WorkflowStatus::SubmittedToMinistrySg, |i| {
            i.transmit_to_ministry_sg(&alice()).unwrap();
        }),
        (WorkflowStatus::ConsolidatedByMinistrySg, |i| {
            i.consolidate_at_ministry_sg().unwrap();
        }),
        (WorkflowStatus::SubmittedToGovernmentSg, |i| {
            i.transmit_to_government_sg(&bob()).unwrap();
        }),
        (WorkflowStatus::ConsolidatedByGovernmentSg, |i| {
            i.consolidate_at_government_sg().unwrap();
        }),
        (WorkflowStatus::SubmittedToPm, |i| {
            i.transmit_to_pm(&bob()).unwrap();
        }),
        (WorkflowStatus::SubmittedToPresidencySg, |i| {
            i.transmit_to_presidency_sg(&bob()).unwrap();
        }),
    ];
    if target == WorkflowStatus::Draft {
        return inst;
    }
    for (reached, step) in steps {
        step(&mut inst);
        if reached == target {
            return inst;
        }
    }
    panic!("{} is not on the happy path", target.as_code());
}

/// Observer that keeps every emitted event for assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TransitionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<RecordingObserver> {
        Arc::new(RecordingObserver::default())
    }

    pub fn events(&self) -> Vec<TransitionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl WorkflowObserver for RecordingObserver {
    fn on_transition(&self, event: &TransitionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Notifier that records messages instead of delivering them. Clones
/// share the same message list, so a clone can go into the observer
/// while the original stays available for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> RecordingNotifier {
        RecordingNotifier::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
