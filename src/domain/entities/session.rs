//! Active voting session entity.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::serde_utils::lenient_count;

/// Snapshot of the voting round the backend currently has open.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActiveVotingSession {
    /// Session topic; a session without a topic is not active.
    #[serde(rename = "tema_activo", default)]
    pub topic: Option<String>,

    /// Votes received so far (still pending finalization).
    #[serde(
        rename = "numero_votos_recibidos",
        default,
        deserialize_with = "lenient_count::deserialize"
    )]
    pub received_vote_count: u64,

    /// Distinct voters that took part.
    #[serde(
        rename = "numero_votantes_participantes",
        default,
        deserialize_with = "lenient_count::deserialize"
    )]
    pub participant_voter_count: u64,

    /// Candidates of this session, id to name, kept raw for the renderers.
    #[serde(rename = "candidatos", default)]
    pub candidates: Value,
}

impl ActiveVotingSession {
    /// Decodes a session payload, tolerating shape drift.
    ///
    /// Returns `None` when the payload cannot be read at all.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match Self::deserialize(value) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "Unreadable active session payload");
                None
            }
        }
    }

    /// Returns the topic when the session is active.
    #[must_use]
    pub fn active_topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns whether the session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_topic().is_some()
    }

    /// Returns the candidate mapping, or an empty mapping when absent.
    #[must_use]
    pub fn candidates_or_empty(&self) -> Value {
        if self.candidates.is_null() {
            Value::Object(Map::new())
        } else {
            self.candidates.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_session() {
        let value = json!({
            "tema_activo": "Best Pet",
            "numero_votos_recibidos": 3,
            "numero_votantes_participantes": "2",
            "candidatos": {"1": "Cat", "2": "Dog"}
        });

        let session = ActiveVotingSession::from_value(&value).unwrap();
        assert_eq!(session.active_topic(), Some("Best Pet"));
        assert_eq!(session.received_vote_count, 3);
        assert_eq!(session.participant_voter_count, 2);
        assert_eq!(session.candidates_or_empty().as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let session = ActiveVotingSession::from_value(&json!({"tema_activo": "X"})).unwrap();
        assert_eq!(session.received_vote_count, 0);
        assert_eq!(session.participant_voter_count, 0);
        assert!(session.candidates_or_empty().as_object().unwrap().is_empty());
    }

    #[test]
    fn test_empty_topic_is_inactive() {
        let session = ActiveVotingSession::from_value(&json!({"tema_activo": ""})).unwrap();
        assert!(!session.is_active());

        let session = ActiveVotingSession::from_value(&json!({"mensaje": "nada"})).unwrap();
        assert!(!session.is_active());
    }

    #[test]
    fn test_non_object_payload() {
        assert!(ActiveVotingSession::from_value(&json!("text")).is_none());
    }
}
