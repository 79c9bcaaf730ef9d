//! Role and permission model for the validation circuit.
//!
//! Two layers coexist:
//!
//! - `ActorRole` + `PermissionSet`: the fixed matrix over the four circuit
//!   actions (seizure, consolidation, transmission, validation). Roles are
//!   an exhaustive enum; an unknown role code resolves to the named
//!   `PermissionSet::READ_ONLY` default, never a silent lookup miss.
//! - `Permissions`: a plain set of string permission codes, used by the
//!   generic chain's `required_permission` gating.

use serde::{Deserialize, Serialize};

use crate::engine::hierarchy::HierarchyLevel;

/// Access level for one circuit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionLevel {
    #[serde(rename = "ecriture")]
    Write,
    #[serde(rename = "lecture")]
    Read,
    #[serde(rename = "validation")]
    Validate,
    #[serde(rename = "aucun")]
    None,
}

/// One role's access to the four circuit actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    pub seizure: PermissionLevel,
    pub consolidation: PermissionLevel,
    pub transmission: PermissionLevel,
    pub validation: PermissionLevel,
}

impl PermissionSet {
    /// What any unlisted role gets.
    pub const READ_ONLY: PermissionSet = PermissionSet {
        seizure: PermissionLevel::Read,
        consolidation: PermissionLevel::Read,
        transmission: PermissionLevel::Read,
        validation: PermissionLevel::Read,
    };

    /// Matrix entry for a role code; unknown codes get `READ_ONLY`.
    pub fn for_code(code: &str) -> PermissionSet {
        ActorRole::from_code(code)
            .map(ActorRole::permissions)
            .unwrap_or(PermissionSet::READ_ONLY)
    }

    pub fn can_seize(&self) -> bool {
        self.seizure == PermissionLevel::Write
    }

    pub fn can_consolidate(&self) -> bool {
        self.consolidation == PermissionLevel::Write
    }

    pub fn can_transmit(&self) -> bool {
        self.transmission == PermissionLevel::Write
    }

    pub fn can_validate(&self) -> bool {
        matches!(self.validation, PermissionLevel::Validate | PermissionLevel::Write)
    }

    /// Rejection rides on the validation grant.
    pub fn can_reject(&self) -> bool {
        self.can_validate()
    }

    pub fn is_read_only(&self) -> bool {
        [self.seizure, self.consolidation, self.transmission, self.validation]
            .iter()
            .all(|l| !matches!(l, PermissionLevel::Write | PermissionLevel::Validate))
    }
}

/// Roles known to the circuit. Each maps to exactly one hierarchy level
/// and one matrix row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActorRole {
    FocalPoint,
    Director,
    DeputyDirector,
    MinistrySecretary,
    GovernmentSecretary,
    PrimeMinister,
    PresidencySecretary,
    President,
}

impl ActorRole {
    pub const ALL: [ActorRole; 8] = [
        ActorRole::FocalPoint,
        ActorRole::Director,
        ActorRole::DeputyDirector,
        ActorRole::MinistrySecretary,
        ActorRole::GovernmentSecretary,
        ActorRole::PrimeMinister,
        ActorRole::PresidencySecretary,
        ActorRole::President,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ActorRole::FocalPoint => "focal-point",
            ActorRole::Director => "director",
            ActorRole::DeputyDirector => "deputy-director",
            ActorRole::MinistrySecretary => "ministry-secretary",
            ActorRole::GovernmentSecretary => "government-secretary",
            ActorRole::PrimeMinister => "prime-minister",
            ActorRole::PresidencySecretary => "presidency-secretary",
            ActorRole::President => "president",
        }
    }

    pub fn from_code(code: &str) -> Option<ActorRole> {
        ActorRole::ALL.into_iter().find(|r| r.code() == code)
    }

    pub fn level(self) -> HierarchyLevel {
        match self {
            ActorRole::FocalPoint | ActorRole::Director | ActorRole::DeputyDirector => {
                HierarchyLevel::Direction
            }
            ActorRole::MinistrySecretary => HierarchyLevel::MinistrySg,
            ActorRole::GovernmentSecretary => HierarchyLevel::GovernmentSg,
            ActorRole::PrimeMinister => HierarchyLevel::PrimeMinister,
            ActorRole::PresidencySecretary => HierarchyLevel::PresidencySg,
            ActorRole::President => HierarchyLevel::President,
        }
    }

    pub fn permissions(self) -> PermissionSet {
        use PermissionLevel::{None as Off, Read, Validate, Write};
        match self {
            ActorRole::FocalPoint => PermissionSet {
                seizure: Write,
                consolidation: Off,
                transmission: Read,
                validation: Off,
            },
            ActorRole::Director => PermissionSet {
                seizure: Write,
                consolidation: Write,
                transmission: Write,
                validation: Off,
            },
            ActorRole::DeputyDirector => PermissionSet {
                seizure: Write,
                consolidation: Read,
                transmission: Read,
                validation: Off,
            },
            ActorRole::MinistrySecretary => PermissionSet {
                seizure: Write,
                consolidation: Write,
                transmission: Write,
                validation: Validate,
            },
            ActorRole::GovernmentSecretary => PermissionSet {
                seizure: Read,
                consolidation: Write,
                transmission: Write,
                validation: Validate,
            },
            ActorRole::PrimeMinister => PermissionSet {
                seizure: Read,
                consolidation: Off,
                transmission: Write,
                validation: Validate,
            },
            ActorRole::PresidencySecretary => PermissionSet {
                seizure: Read,
                consolidation: Off,
                transmission: Off,
                validation: Validate,
            },
            ActorRole::President => PermissionSet::READ_ONLY,
        }
    }
}

/// Wrapper around permission codes with a `has()` method, for the generic
/// chain's `required_permission` checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions(pub Vec<String>);

impl Permissions {
    pub fn has(&self, code: &str) -> bool {
        self.0.iter().any(|p| p == code)
    }

    pub fn from_csv(csv: &str) -> Permissions {
        let codes = csv
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Permissions(codes)
    }

    pub fn from_codes(codes: &[&str]) -> Permissions {
        Permissions(codes.iter().map(|c| c.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes_round_trip() {
        for role in ActorRole::ALL {
            assert_eq!(ActorRole::from_code(role.code()), Some(role));
        }
        assert_eq!(ActorRole::from_code("intern"), None);
    }

    #[test]
    fn unknown_role_gets_the_named_default() {
        let set = PermissionSet::for_code("intern");
        assert_eq!(set, PermissionSet::READ_ONLY);
        assert!(set.is_read_only());
    }

    #[test]
    fn ministry_secretary_row() {
        let set = PermissionSet::for_code("ministry-secretary");
        assert!(set.can_seize());
        assert!(set.can_validate());
        assert!(set.can_reject());
        assert!(!set.is_read_only());
    }

    #[test]
    fn president_is_read_only() {
        let set = ActorRole::President.permissions();
        assert!(set.is_read_only());
        assert!(!set.can_seize());
        assert!(!set.can_consolidate());
        assert!(!set.can_transmit());
        assert!(!set.can_validate());
    }

    #[test]
    fn validation_write_also_grants_validate() {
        let set = PermissionSet {
            seizure: PermissionLevel::Read,
            consolidation: PermissionLevel::Read,
            transmission: PermissionLevel::Read,
            validation: PermissionLevel::Write,
        };
        assert!(set.can_validate());
    }

    #[test]
    fn every_role_has_one_level() {
        assert_eq!(ActorRole::FocalPoint.level(), HierarchyLevel::Direction);
        assert_eq!(ActorRole::DeputyDirector.level(), HierarchyLevel::Direction);
        assert_eq!(ActorRole::MinistrySecretary.level(), HierarchyLevel::MinistrySg);
        assert_eq!(ActorRole::President.level(), HierarchyLevel::President);
    }

    #[test]
    fn permissions_from_csv_trims_and_skips_empty() {
        let perms = Permissions::from_csv("matrice.soumettre, matrice.valider_sgg,,");
        assert!(perms.has("matrice.soumettre"));
        assert!(perms.has("matrice.valider_sgg"));
        assert!(!perms.has("matrice.valider_sgpr"));
    }
}
