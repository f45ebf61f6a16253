//! Design-token (variable) bindings.

use serde::{Deserialize, Serialize};

/// Reference from a node property to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    /// Variable identifier
    pub id: String,
}

impl VariableAlias {
    /// Create an alias to the given variable id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A property binding: a single alias, or a list for per-layer properties
/// such as fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableBinding {
    /// One bound variable
    Single(VariableAlias),
    /// One alias per layer
    List(Vec<VariableAlias>),
}

impl VariableBinding {
    /// The alias that represents this binding. Lists only report their first entry.
    pub fn first(&self) -> Option<&VariableAlias> {
        match self {
            VariableBinding::Single(alias) => Some(alias),
            VariableBinding::List(aliases) => aliases.first(),
        }
    }
}

/// A variable as known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Variable identifier
    pub id: String,
    /// Human-readable name (e.g., "color/primary")
    pub name: String,
    /// Value type (COLOR, FLOAT, STRING, BOOLEAN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_type: Option<String>,
}

impl Variable {
    /// Create a variable.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resolved_type: None,
        }
    }
}
