use serde::{Deserialize, Serialize};

/// Status of a reporting dossier in the validation circuit.
///
/// Wire codes are the French snake_case codes written by the historic
/// system, so records produced by it deserialize unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowStatus {
    #[serde(rename = "brouillon")]
    Draft,
    #[serde(rename = "transmis_sg_ministere")]
    SubmittedToMinistrySg,
    #[serde(rename = "consolide_sg_ministere")]
    ConsolidatedByMinistrySg,
    #[serde(rename = "transmis_sgg")]
    SubmittedToGovernmentSg,
    #[serde(rename = "consolide_sgg")]
    ConsolidatedByGovernmentSg,
    #[serde(rename = "transmis_pm")]
    SubmittedToPm,
    #[serde(rename = "transmis_sgpr")]
    SubmittedToPresidencySg,
    #[serde(rename = "rejete_sg_ministere")]
    RejectedByMinistrySg,
    #[serde(rename = "rejete_sgg")]
    RejectedByGovernmentSg,
    /// Legacy catch-all rejection code (`rejete`), written by records that
    /// predate the per-level rejection states. Kept so old dossiers still
    /// deserialize; new rejections always use a per-level state. A legacy
    /// dossier leaves this state through an administrative `reset` only.
    #[serde(rename = "rejete")]
    Rejected,
}

impl WorkflowStatus {
    pub const ALL: [WorkflowStatus; 10] = [
        WorkflowStatus::Draft,
        WorkflowStatus::SubmittedToMinistrySg,
        WorkflowStatus::ConsolidatedByMinistrySg,
        WorkflowStatus::SubmittedToGovernmentSg,
        WorkflowStatus::ConsolidatedByGovernmentSg,
        WorkflowStatus::SubmittedToPm,
        WorkflowStatus::SubmittedToPresidencySg,
        WorkflowStatus::RejectedByMinistrySg,
        WorkflowStatus::RejectedByGovernmentSg,
        WorkflowStatus::Rejected,
    ];

    /// Statuses this one may move to. The table is the single source of
    /// truth: every mutating operation checks it before touching anything.
    pub fn allowed_targets(self) -> &'static [WorkflowStatus] {
        match self {
            WorkflowStatus::Draft => &[WorkflowStatus::SubmittedToMinistrySg],
            WorkflowStatus::SubmittedToMinistrySg => &[
                WorkflowStatus::ConsolidatedByMinistrySg,
                WorkflowStatus::RejectedByMinistrySg,
            ],
            WorkflowStatus::ConsolidatedByMinistrySg => &[WorkflowStatus::SubmittedToGovernmentSg],
            WorkflowStatus::SubmittedToGovernmentSg => &[
                WorkflowStatus::ConsolidatedByGovernmentSg,
                WorkflowStatus::RejectedByGovernmentSg,
            ],
            WorkflowStatus::ConsolidatedByGovernmentSg => &[WorkflowStatus::SubmittedToPm],
            WorkflowStatus::SubmittedToPm => &[WorkflowStatus::SubmittedToPresidencySg],
            WorkflowStatus::SubmittedToPresidencySg => &[],
            WorkflowStatus::RejectedByMinistrySg => &[WorkflowStatus::Draft],
            WorkflowStatus::RejectedByGovernmentSg => &[WorkflowStatus::ConsolidatedByMinistrySg],
            WorkflowStatus::Rejected => &[WorkflowStatus::Draft],
        }
    }

    pub fn can_transition_to(self, target: WorkflowStatus) -> bool {
        self.allowed_targets().contains(&target)
    }

    pub fn is_rejection(self) -> bool {
        matches!(
            self,
            WorkflowStatus::RejectedByMinistrySg
                | WorkflowStatus::RejectedByGovernmentSg
                | WorkflowStatus::Rejected
        )
    }

    /// Terminal: no outgoing transitions, the dossier is locked.
    pub fn is_terminal(self) -> bool {
        self == WorkflowStatus::SubmittedToPresidencySg
    }

    pub fn as_code(self) -> &'static str {
        match self {
            WorkflowStatus::Draft => "brouillon",
            WorkflowStatus::SubmittedToMinistrySg => "transmis_sg_ministere",
            WorkflowStatus::ConsolidatedByMinistrySg => "consolide_sg_ministere",
            WorkflowStatus::SubmittedToGovernmentSg => "transmis_sgg",
            WorkflowStatus::ConsolidatedByGovernmentSg => "consolide_sgg",
            WorkflowStatus::SubmittedToPm => "transmis_pm",
            WorkflowStatus::SubmittedToPresidencySg => "transmis_sgpr",
            WorkflowStatus::RejectedByMinistrySg => "rejete_sg_ministere",
            WorkflowStatus::RejectedByGovernmentSg => "rejete_sgg",
            WorkflowStatus::Rejected => "rejete",
        }
    }

    pub fn from_code(code: &str) -> Option<WorkflowStatus> {
        WorkflowStatus::ALL.into_iter().find(|s| s.as_code() == code)
    }

    /// Display label for list views and toasts.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStatus::Draft => "Brouillon",
            WorkflowStatus::SubmittedToMinistrySg => "Transmise au SG du Ministère",
            WorkflowStatus::ConsolidatedByMinistrySg => "Consolidée par le SG du Ministère",
            WorkflowStatus::SubmittedToGovernmentSg => "Transmise au SGG",
            WorkflowStatus::ConsolidatedByGovernmentSg => "Consolidée par le SGG",
            WorkflowStatus::SubmittedToPm => "Transmise au Premier Ministre",
            WorkflowStatus::SubmittedToPresidencySg => "Transmise au SGPR",
            WorkflowStatus::RejectedByMinistrySg => "Rejetée par le SG du Ministère",
            WorkflowStatus::RejectedByGovernmentSg => "Rejetée par le SGG",
            WorkflowStatus::Rejected => "Rejetée",
        }
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_targets(s: WorkflowStatus) -> Vec<WorkflowStatus> {
        use WorkflowStatus::*;
        match s {
            Draft => vec![SubmittedToMinistrySg],
            SubmittedToMinistrySg => vec![ConsolidatedByMinistrySg, RejectedByMinistrySg],
            ConsolidatedByMinistrySg => vec![SubmittedToGovernmentSg],
            SubmittedToGovernmentSg => vec![ConsolidatedByGovernmentSg, RejectedByGovernmentSg],
            ConsolidatedByGovernmentSg => vec![SubmittedToPm],
            SubmittedToPm => vec![SubmittedToPresidencySg],
            SubmittedToPresidencySg => vec![],
            RejectedByMinistrySg => vec![Draft],
            RejectedByGovernmentSg => vec![ConsolidatedByMinistrySg],
            Rejected => vec![Draft],
        }
    }

    #[test]
    fn transition_table_is_exact() {
        for s in WorkflowStatus::ALL {
            let expected = expected_targets(s);
            for t in WorkflowStatus::ALL {
                assert_eq!(
                    s.can_transition_to(t),
                    expected.contains(&t),
                    "{} -> {}",
                    s.as_code(),
                    t.as_code()
                );
            }
        }
    }

    #[test]
    fn only_sgpr_submission_is_terminal() {
        for s in WorkflowStatus::ALL {
            assert_eq!(s.is_terminal(), s == WorkflowStatus::SubmittedToPresidencySg);
            assert_eq!(s.is_terminal(), s.allowed_targets().is_empty());
        }
    }

    #[test]
    fn codes_round_trip() {
        for s in WorkflowStatus::ALL {
            assert_eq!(WorkflowStatus::from_code(s.as_code()), Some(s));
        }
        assert_eq!(WorkflowStatus::from_code("inconnu"), None);
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&WorkflowStatus::SubmittedToGovernmentSg).unwrap();
        assert_eq!(json, "\"transmis_sgg\"");
        let legacy: WorkflowStatus = serde_json::from_str("\"rejete\"").unwrap();
        assert_eq!(legacy, WorkflowStatus::Rejected);
    }
}
