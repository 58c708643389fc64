//! Voting action DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /votacion/iniciar`.
#[derive(Debug, Clone, Serialize)]
pub struct StartVotingRequest {
    pub tema: String,
}

/// Body of `POST /votacion/candidato` and `POST /candidatos`.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRequest {
    pub nombre: String,
}

/// Body of `POST /votacion/votar`.
#[derive(Debug, Clone, Serialize)]
pub struct CastVoteRequest {
    pub id_votante: String,
    pub id_candidato: String,
}

/// Acknowledgement returned by every action endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    /// Server-supplied confirmation text.
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl ActionResponse {
    /// Decodes the acknowledgement; unexpected shapes carry no message.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Server message when non-empty, otherwise the given default.
    #[must_use]
    pub fn message_or(self, default: impl Into<String>) -> String {
        self.mensaje
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default.into())
    }
}
