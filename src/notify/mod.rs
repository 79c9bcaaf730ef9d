use crate::engine::events::{TransitionEvent, WorkflowObserver};
use crate::engine::messages;

/// Delivery side of advisory messages. Implementations must not fail
/// loudly: a lost toast never affects workflow state.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Default notifier: advisory messages go to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Observer that renders each transition outcome into its advisory
/// message and hands it to a [`Notifier`].
pub struct ToastObserver<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> ToastObserver<N> {
    pub fn new(notifier: N) -> ToastObserver<N> {
        ToastObserver { notifier }
    }
}

impl<N: Notifier> WorkflowObserver for ToastObserver<N> {
    fn on_transition(&self, event: &TransitionEvent) {
        self.notifier.notify(&messages::advisory(event));
    }
}
