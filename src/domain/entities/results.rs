//! Vote tally entities.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::serde_utils::{count_from_value, lenient_count};

/// One line of the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    /// Candidate display name.
    pub candidate_name: String,
    /// Votes counted for the candidate.
    pub vote_count: u64,
}

impl ResultEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(candidate_name: impl Into<String>, vote_count: u64) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            vote_count,
        }
    }
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} votos", self.candidate_name, self.vote_count)
    }
}

/// Pending votes of the open session that the tally already includes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingVotes {
    /// Topic of the open session.
    #[serde(rename = "tema", default)]
    pub topic: String,
    /// Votes not yet sealed into a block.
    #[serde(
        rename = "votos_pendientes_incluidos",
        default,
        deserialize_with = "lenient_count::deserialize"
    )]
    pub count: u64,
}

impl fmt::Display for PendingVotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(Incluye {} votos pendientes de la votación activa '{}')",
            self.count, self.topic
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct ResultsInfo {
    #[serde(rename = "votacion_activa", default)]
    active_session: Option<PendingVotes>,
}

/// Decoded `/resultados` response, entries sorted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsReport {
    /// Entries by descending vote count.
    pub entries: Vec<ResultEntry>,
    /// Provisional votes disclosure, when a session is open.
    pub pending: Option<PendingVotes>,
}

impl ResultsReport {
    /// Decodes a results payload. Unexpected shapes yield an empty report.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut entries: Vec<ResultEntry> = value
            .get("resultados")
            .and_then(Value::as_object)
            .map(|tally| {
                tally
                    .iter()
                    .map(|(name, votes)| ResultEntry::new(name.clone(), count_from_value(votes)))
                    .collect()
            })
            .unwrap_or_default();

        sort_by_votes(&mut entries);

        let pending = value
            .get("info")
            .and_then(|info| ResultsInfo::deserialize(info).ok())
            .and_then(|info| info.active_session);

        Self { entries, pending }
    }

    /// Returns whether the tally has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts by descending vote count, ties by name.
fn sort_by_votes(entries: &mut [ResultEntry]) {
    entries.sort_by(|a, b| {
        b.vote_count
            .cmp(&a.vote_count)
            .then_with(|| a.candidate_name.cmp(&b.candidate_name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_descending() {
        let report = ResultsReport::from_value(&json!({
            "resultados": {"Cat": 5, "Dog": 9},
            "info": {}
        }));

        let lines: Vec<String> = report.entries.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Dog: 9 votos", "Cat: 5 votos"]);
        assert!(report.pending.is_none());
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let report = ResultsReport::from_value(&json!({
            "resultados": {"Zoe": 2, "Ana": 2, "Luis": 3}
        }));
        let names: Vec<&str> = report
            .entries
            .iter()
            .map(|e| e.candidate_name.as_str())
            .collect();
        assert_eq!(names, vec!["Luis", "Ana", "Zoe"]);
    }

    #[test]
    fn test_pending_info() {
        let report = ResultsReport::from_value(&json!({
            "resultados": {"Cat": 1},
            "info": {"votacion_activa": {"tema": "Best Pet", "votos_pendientes_incluidos": 1}}
        }));

        let pending = report.pending.unwrap();
        assert_eq!(
            pending.to_string(),
            "(Incluye 1 votos pendientes de la votación activa 'Best Pet')"
        );
    }

    #[test]
    fn test_malformed_payload() {
        let report = ResultsReport::from_value(&json!({"resultados": [1, 2]}));
        assert!(report.is_empty());

        let report = ResultsReport::from_value(&json!("oops"));
        assert!(report.is_empty());
        assert!(report.pending.is_none());
    }
}
