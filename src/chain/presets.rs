use crate::chain::ChainDefinition;
use crate::engine::status::WorkflowStatus;

/// The legacy four-step validation chain used by generic documents:
/// brouillon -> soumis -> valide_sgg -> valide_sgpr, with rejection from
/// `soumis` back through `rejete`.
pub fn generic_validation() -> ChainDefinition {
    let mut def = ChainDefinition::new("matrice");
    def.add_status("brouillon", "Brouillon", true, false)
        .add_status("soumis", "Soumise", false, false)
        .add_status("valide_sgg", "Validée par le SGG", false, false)
        .add_status("valide_sgpr", "Validée par le SGPR", false, true)
        .add_status("rejete", "Rejetée", false, false)
        .add_transition("brouillon", "soumis", "Soumettre", Some("matrice.soumettre"))
        .add_transition("soumis", "valide_sgg", "Valider (SGG)", Some("matrice.valider_sgg"))
        .add_transition("valide_sgg", "valide_sgpr", "Valider (SGPR)", Some("matrice.valider_sgpr"))
        .add_transition("soumis", "rejete", "Rejeter", Some("matrice.valider_sgg"))
        .add_transition("rejete", "brouillon", "Corriger", Some("matrice.soumettre"));
    def
}

/// The six-level ministerial circuit expressed as a chain. Built from the
/// typed transition table, so the two can never disagree.
pub fn ministerial_circuit() -> ChainDefinition {
    let mut def = ChainDefinition::new("ptm");
    for status in WorkflowStatus::ALL {
        def.add_status(
            status.as_code(),
            status.label(),
            status == WorkflowStatus::Draft,
            status.is_terminal(),
        );
    }
    for status in WorkflowStatus::ALL {
        for target in status.allowed_targets() {
            let (label, permission) = if target.is_rejection() {
                ("Rejeter", "circuit.rejeter")
            } else if status.is_rejection() {
                ("Corriger", "circuit.corriger")
            } else if matches!(
                target,
                WorkflowStatus::ConsolidatedByMinistrySg | WorkflowStatus::ConsolidatedByGovernmentSg
            ) {
                ("Consolider", "circuit.consolider")
            } else {
                ("Transmettre", "circuit.transmettre")
            };
            def.add_transition(status.as_code(), target.as_code(), label, Some(permission));
        }
    }
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_chain_shape() {
        let def = generic_validation();
        assert_eq!(def.initial_status().unwrap().code, "brouillon");
        assert!(def.is_terminal("valide_sgpr"));
        assert!(def.can_transition("rejete", "brouillon"));
        assert!(!def.can_transition("valide_sgpr", "brouillon"));
    }

    #[test]
    fn circuit_preset_matches_typed_table() {
        let def = ministerial_circuit();
        for s in WorkflowStatus::ALL {
            for t in WorkflowStatus::ALL {
                assert_eq!(
                    def.can_transition(s.as_code(), t.as_code()),
                    s.can_transition_to(t),
                    "{} -> {}",
                    s.as_code(),
                    t.as_code()
                );
            }
        }
    }
}
