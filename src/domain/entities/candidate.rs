//! Global candidate directory entity.

use serde_json::Value;

use crate::domain::serde_utils::id_from_value;

/// Candidate registered in the global directory, independent of any session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalCandidate {
    /// Directory identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl GlobalCandidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Reads the candidate echoed back by a registration response.
    #[must_use]
    pub fn from_registration(value: &Value) -> Option<Self> {
        let id = value.get("id_candidato").and_then(id_from_value)?;
        let name = value
            .get("nombre")
            .or_else(|| value.get("nombre_candidato"))
            .and_then(Value::as_str)?;
        Some(Self::new(id, name))
    }
}
