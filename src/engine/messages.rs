use crate::engine::events::{TransitionEvent, TransitionOutcome};
use crate::engine::status::WorkflowStatus;

/// Advisory message for a transition outcome, as shown to the acting
/// user. Purely informational: delivery is an observer concern and never
/// feeds back into the state machine.
pub fn advisory(event: &TransitionEvent) -> String {
    if event.outcome == TransitionOutcome::Refused {
        return "Transition non autorisée".to_string();
    }
    if event.from.is_rejection() && !event.to.is_rejection() {
        return "Matrice corrigée et remise en circuit".to_string();
    }
    match event.to {
        WorkflowStatus::Draft => "Matrice réinitialisée".to_string(),
        WorkflowStatus::SubmittedToMinistrySg => {
            "Matrice transmise au Secrétaire Général du Ministère".to_string()
        }
        WorkflowStatus::ConsolidatedByMinistrySg => {
            "Matrice consolidée par le Secrétariat Général du Ministère".to_string()
        }
        WorkflowStatus::SubmittedToGovernmentSg => {
            "Matrice transmise au Secrétariat Général du Gouvernement".to_string()
        }
        WorkflowStatus::ConsolidatedByGovernmentSg => {
            "Matrice consolidée par le Secrétariat Général du Gouvernement".to_string()
        }
        WorkflowStatus::SubmittedToPm => "Matrice transmise au Premier Ministre".to_string(),
        WorkflowStatus::SubmittedToPresidencySg => {
            "Matrice transmise au Secrétariat Général de la Présidence".to_string()
        }
        WorkflowStatus::RejectedByMinistrySg
        | WorkflowStatus::RejectedByGovernmentSg
        | WorkflowStatus::Rejected => "Matrice rejetée".to_string(),
    }
}
