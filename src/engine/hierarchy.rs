use serde::{Deserialize, Serialize};

use crate::engine::status::WorkflowStatus;

/// A rung of the approval chain. `President` is the final recipient and
/// carries no dossier statuses of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyLevel {
    Direction,
    MinistrySg,
    GovernmentSg,
    PrimeMinister,
    PresidencySg,
    President,
}

impl HierarchyLevel {
    pub const ALL: [HierarchyLevel; 6] = [
        HierarchyLevel::Direction,
        HierarchyLevel::MinistrySg,
        HierarchyLevel::GovernmentSg,
        HierarchyLevel::PrimeMinister,
        HierarchyLevel::PresidencySg,
        HierarchyLevel::President,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HierarchyLevel::Direction => "Direction",
            HierarchyLevel::MinistrySg => "Secrétariat Général du Ministère",
            HierarchyLevel::GovernmentSg => "Secrétariat Général du Gouvernement",
            HierarchyLevel::PrimeMinister => "Premier Ministre",
            HierarchyLevel::PresidencySg => "Secrétariat Général de la Présidence",
            HierarchyLevel::President => "Président de la République",
        }
    }

    /// Default day-of-month by which this level must have passed the
    /// dossier on. Overridable per deployment, see `DeadlineCalendar`.
    pub fn default_deadline_day(self) -> u32 {
        match self {
            HierarchyLevel::Direction => 5,
            HierarchyLevel::MinistrySg => 10,
            HierarchyLevel::GovernmentSg => 15,
            HierarchyLevel::PrimeMinister => 20,
            HierarchyLevel::PresidencySg => 25,
            HierarchyLevel::President => 28,
        }
    }

    pub fn next(self) -> Option<HierarchyLevel> {
        match self {
            HierarchyLevel::Direction => Some(HierarchyLevel::MinistrySg),
            HierarchyLevel::MinistrySg => Some(HierarchyLevel::GovernmentSg),
            HierarchyLevel::GovernmentSg => Some(HierarchyLevel::PrimeMinister),
            HierarchyLevel::PrimeMinister => Some(HierarchyLevel::PresidencySg),
            HierarchyLevel::PresidencySg => Some(HierarchyLevel::President),
            HierarchyLevel::President => None,
        }
    }

    /// Whose turn it is: the level responsible for acting on a dossier in
    /// the given status. Rejected dossiers sit with the level that must
    /// correct them, not the one that rejected.
    pub fn for_status(status: WorkflowStatus) -> HierarchyLevel {
        match status {
            WorkflowStatus::Draft
            | WorkflowStatus::RejectedByMinistrySg
            | WorkflowStatus::Rejected => HierarchyLevel::Direction,
            WorkflowStatus::SubmittedToMinistrySg
            | WorkflowStatus::ConsolidatedByMinistrySg
            | WorkflowStatus::RejectedByGovernmentSg => HierarchyLevel::MinistrySg,
            WorkflowStatus::SubmittedToGovernmentSg
            | WorkflowStatus::ConsolidatedByGovernmentSg => HierarchyLevel::GovernmentSg,
            WorkflowStatus::SubmittedToPm => HierarchyLevel::PrimeMinister,
            WorkflowStatus::SubmittedToPresidencySg => HierarchyLevel::PresidencySg,
        }
    }
}

impl std::fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
