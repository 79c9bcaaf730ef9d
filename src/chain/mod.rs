//! Generic parameterized validation chain.
//!
//! The rich ministerial circuit (`engine`) is a fixed, fully typed state
//! machine. Other document types go through simpler chains that differ
//! only in their status list and edges, so those are data: a
//! `ChainDefinition` holds statuses and transitions for one entity scope,
//! and answers the same questions the typed engine answers: what is the
//! initial status, which moves are available, is this move legal for this
//! caller.
//!
//! Transitions may carry a `required_permission` code (checked against a
//! [`Permissions`] set) and a `condition` of the form `key=value` (checked
//! against the entity's property map), both optional.

pub mod presets;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::WorkflowError;
use crate::permissions::Permissions;

/// A workflow status (state) for a given entity scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainStatus {
    pub code: String,
    pub label: String,
    pub is_initial: bool,
    pub is_terminal: bool,
}

/// A valid transition between two statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainTransition {
    pub from: String,
    pub to: String,
    pub label: String,
    pub required_permission: Option<String>,
    pub condition: Option<String>,
}

/// Statuses and transitions for one entity scope (e.g. "matrice").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainDefinition {
    pub scope: String,
    pub statuses: Vec<ChainStatus>,
    pub transitions: Vec<ChainTransition>,
}

impl ChainDefinition {
    pub fn new(scope: impl Into<String>) -> ChainDefinition {
        ChainDefinition { scope: scope.into(), statuses: Vec::new(), transitions: Vec::new() }
    }

    pub fn add_status(
        &mut self,
        code: &str,
        label: &str,
        is_initial: bool,
        is_terminal: bool,
    ) -> &mut ChainDefinition {
        self.statuses.push(ChainStatus {
            code: code.to_string(),
            label: label.to_string(),
            is_initial,
            is_terminal,
        });
        self
    }

    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        label: &str,
        required_permission: Option<&str>,
    ) -> &mut ChainDefinition {
        self.transitions.push(ChainTransition {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
            required_permission: required_permission.map(String::from),
            condition: None,
        });
        self
    }

    pub fn status(&self, code: &str) -> Option<&ChainStatus> {
        self.statuses.iter().find(|s| s.code == code)
    }

    /// The initial status code for this scope.
    pub fn initial_status(&self) -> Result<&ChainStatus, WorkflowError> {
        self.statuses
            .iter()
            .find(|s| s.is_initial)
            .ok_or_else(|| WorkflowError::UnknownStatus(format!("no initial status for {}", self.scope)))
    }

    /// The label for a status code.
    pub fn label_of(&self, code: &str) -> Result<&str, WorkflowError> {
        self.status(code)
            .map(|s| s.label.as_str())
            .ok_or_else(|| WorkflowError::UnknownStatus(code.to_string()))
    }

    pub fn is_terminal(&self, code: &str) -> bool {
        self.status(code).map(|s| s.is_terminal).unwrap_or(false)
    }

    /// Edge lookup only; ignores permissions and conditions.
    pub fn can_transition(&self, from: &str, to: &str) -> bool {
        self.transitions.iter().any(|t| t.from == from && t.to == to)
    }

    /// All transitions from the current status the caller may take,
    /// filtered by permission codes and entity property conditions.
    pub fn available_transitions(
        &self,
        current_status: &str,
        user_permissions: &Permissions,
        entity_properties: &HashMap<String, String>,
    ) -> Vec<&ChainTransition> {
        self.transitions
            .iter()
            .filter(|t| t.from == current_status)
            .filter(|t| match &t.required_permission {
                Some(code) => user_permissions.has(code),
                None => true,
            })
            .filter(|t| match &t.condition {
                // Condition format: "key=value" against the property map.
                Some(cond) => match cond.split_once('=') {
                    Some((key, value)) => {
                        entity_properties.get(key).map(|v| v.as_str()).unwrap_or("") == value
                    }
                    None => true,
                },
                None => true,
            })
            .collect()
    }

    /// Validate a specific transition and return its info. Distinguishes
    /// a missing edge from a present edge the caller may not take.
    pub fn validate_transition(
        &self,
        current_status: &str,
        new_status: &str,
        user_permissions: &Permissions,
        entity_properties: &HashMap<String, String>,
    ) -> Result<&ChainTransition, WorkflowError> {
        if self.status(current_status).is_none() {
            return Err(WorkflowError::UnknownStatus(current_status.to_string()));
        }
        if self.status(new_status).is_none() {
            return Err(WorkflowError::UnknownStatus(new_status.to_string()));
        }
        if !self.can_transition(current_status, new_status) {
            return Err(WorkflowError::IllegalChainTransition {
                scope: self.scope.clone(),
                from: current_status.to_string(),
                to: new_status.to_string(),
            });
        }
        self.available_transitions(current_status, user_permissions, entity_properties)
            .into_iter()
            .find(|t| t.to == new_status)
            .ok_or_else(|| {
                let required = self
                    .transitions
                    .iter()
                    .find(|t| t.from == current_status && t.to == new_status)
                    .and_then(|t| t.required_permission.clone())
                    .unwrap_or_else(|| format!("{}.{}", self.scope, new_status));
                WorkflowError::PermissionDenied(required)
            })
    }
}
