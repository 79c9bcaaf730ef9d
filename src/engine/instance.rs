use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::events::{TransitionEvent, TransitionOutcome};
use crate::engine::hierarchy::HierarchyLevel;
use crate::engine::status::WorkflowStatus;
use crate::errors::WorkflowError;

/// Identity of whoever performs a transmission. Both fields are required;
/// a transmission without an identified actor is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Actor {
        Actor { id: id.into(), name: name.into() }
    }
}

/// (action verb, destination level label) pair for the "send onward"
/// button of the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmissionLabel {
    pub verb: &'static str,
    pub destination: &'static str,
}

/// One dossier moving through the validation circuit.
///
/// All mutation goes through the operations below; each one checks the
/// transition table first and leaves every field untouched on refusal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInstance {
    pub id: String,
    pub status: WorkflowStatus,
    pub rejection_reason: Option<String>,
    pub transmitted_by_id: Option<String>,
    pub transmitted_by_name: Option<String>,
    pub transmitted_at: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

impl WorkflowInstance {
    pub fn new(id: impl Into<String>) -> WorkflowInstance {
        WorkflowInstance {
            id: id.into(),
            status: WorkflowStatus::Draft,
            rejection_reason: None,
            transmitted_by_id: None,
            transmitted_by_name: None,
            transmitted_at: None,
            comment: None,
        }
    }

    /// Draft -> SubmittedToMinistrySg.
    pub fn transmit_to_ministry_sg(&mut self, actor: &Actor) -> Result<TransitionEvent, WorkflowError> {
        self.transmit(WorkflowStatus::SubmittedToMinistrySg, actor)
    }

    /// SubmittedToMinistrySg -> ConsolidatedByMinistrySg. A level action:
    /// the transmission identity stays whoever sent the dossier up.
    pub fn consolidate_at_ministry_sg(&mut self) -> Result<TransitionEvent, WorkflowError> {
        self.consolidate(WorkflowStatus::ConsolidatedByMinistrySg)
    }

    /// ConsolidatedByMinistrySg -> SubmittedToGovernmentSg.
    pub fn transmit_to_government_sg(&mut self, actor: &Actor) -> Result<TransitionEvent, WorkflowError> {
        self.transmit(WorkflowStatus::SubmittedToGovernmentSg, actor)
    }

    /// SubmittedToGovernmentSg -> ConsolidatedByGovernmentSg.
    pub fn consolidate_at_government_sg(&mut self) -> Result<TransitionEvent, WorkflowError> {
        self.consolidate(WorkflowStatus::ConsolidatedByGovernmentSg)
    }

    /// ConsolidatedByGovernmentSg -> SubmittedToPm.
    pub fn transmit_to_pm(&mut self, actor: &Actor) -> Result<TransitionEvent, WorkflowError> {
        self.transmit(WorkflowStatus::SubmittedToPm, actor)
    }

    /// SubmittedToPm -> SubmittedToPresidencySg. Terminal: the dossier is
    /// locked afterwards.
    pub fn transmit_to_presidency_sg(&mut self, actor: &Actor) -> Result<TransitionEvent, WorkflowError> {
        self.transmit(WorkflowStatus::SubmittedToPresidencySg, actor)
    }

    /// Send the dossier back with a reason. `target` must be a rejection
    /// state reachable from the current status. Transmission identity and
    /// timestamp are kept: they say who last pushed the dossier up.
    pub fn reject_to(
        &mut self,
        reason: impl Into<String>,
        target: WorkflowStatus,
    ) -> Result<TransitionEvent, WorkflowError> {
        if !target.is_rejection() || !self.status.can_transition_to(target) {
            return Err(WorkflowError::InvalidRejectionTarget { from: self.status, target });
        }
        let from = self.status;
        self.status = target;
        self.rejection_reason = Some(reason.into());
        Ok(self.completed(from, target))
    }

    /// Deterministic un-reject: back to where the correction happens.
    /// Legacy `Rejected` dossiers have no correction path and exit through
    /// `reset` only.
    pub fn correct_after_rejection(&mut self) -> Result<TransitionEvent, WorkflowError> {
        let target = match self.status {
            WorkflowStatus::RejectedByMinistrySg => WorkflowStatus::Draft,
            WorkflowStatus::RejectedByGovernmentSg => WorkflowStatus::ConsolidatedByMinistrySg,
            _ => return Err(WorkflowError::NoCorrectionAvailable(self.status)),
        };
        let from = self.status;
        self.status = target;
        self.rejection_reason = None;
        Ok(self.completed(from, target))
    }

    /// Administrative escape hatch: clears every transient field and sets
    /// the status directly, bypassing the transition table. Not a normal
    /// transition; also the only way out of the legacy `Rejected` state.
    pub fn reset(&mut self, target: WorkflowStatus) -> TransitionEvent {
        let from = self.status;
        self.status = target;
        self.rejection_reason = None;
        self.transmitted_by_id = None;
        self.transmitted_by_name = None;
        self.transmitted_at = None;
        self.comment = None;
        self.completed(from, target)
    }

    /// Free-text annotation attached at validation steps.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    pub fn can_transition_to(&self, target: WorkflowStatus) -> bool {
        self.status.can_transition_to(target)
    }

    /// The level whose turn it is.
    pub fn current_level(&self) -> HierarchyLevel {
        HierarchyLevel::for_status(self.status)
    }

    pub fn is_locked(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the authoring Direction may still edit the content.
    pub fn is_editable(&self) -> bool {
        matches!(self.status, WorkflowStatus::Draft | WorkflowStatus::RejectedByMinistrySg)
    }

    /// Label for the next forward move, if any: the first non-rejection
    /// target of the current status, as (verb, destination level).
    pub fn next_transmission_label(&self) -> Option<TransmissionLabel> {
        let target = self
            .status
            .allowed_targets()
            .iter()
            .copied()
            .find(|t| !t.is_rejection())?;
        let verb = match target {
            WorkflowStatus::ConsolidatedByMinistrySg
            | WorkflowStatus::ConsolidatedByGovernmentSg => "Consolider",
            _ => "Transmettre",
        };
        Some(TransmissionLabel {
            verb,
            destination: HierarchyLevel::for_status(target).label(),
        })
    }

    fn transmit(
        &mut self,
        target: WorkflowStatus,
        actor: &Actor,
    ) -> Result<TransitionEvent, WorkflowError> {
        if !self.status.can_transition_to(target) {
            return Err(WorkflowError::IllegalTransition { from: self.status, to: target });
        }
        let from = self.status;
        self.status = target;
        self.rejection_reason = None;
        self.transmitted_by_id = Some(actor.id.clone());
        self.transmitted_by_name = Some(actor.name.clone());
        self.transmitted_at = Some(Utc::now());
        Ok(self.completed(from, target))
    }

    fn consolidate(&mut self, target: WorkflowStatus) -> Result<TransitionEvent, WorkflowError> {
        if !self.status.can_transition_to(target) {
            return Err(WorkflowError::IllegalTransition { from: self.status, to: target });
        }
        let from = self.status;
        self.status = target;
        self.rejection_reason = None;
        self.transmitted_at = Some(Utc::now());
        Ok(self.completed(from, target))
    }

    fn completed(&self, from: WorkflowStatus, to: WorkflowStatus) -> TransitionEvent {
        TransitionEvent {
            instance_id: self.id.clone(),
            from,
            to,
            outcome: TransitionOutcome::Completed,
            actor_id: self.transmitted_by_id.clone(),
            at: Utc::now(),
        }
    }
}
