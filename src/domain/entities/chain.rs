//! Ledger views: opaque blocks and the integrity verdict.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend ledger block, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainBlock(pub Value);

/// Decodes the `/cadena` payload. Anything but an array is an empty chain.
#[must_use]
pub fn blocks_from_value(value: &Value) -> Vec<ChainBlock> {
    value
        .as_array()
        .map(|blocks| blocks.iter().cloned().map(ChainBlock).collect())
        .unwrap_or_default()
}

/// Pretty-prints the chain, or `None` when there is nothing to show.
#[must_use]
pub fn render_chain(blocks: &[ChainBlock]) -> Option<String> {
    if blocks.is_empty() {
        return None;
    }
    serde_json::to_string_pretty(blocks).ok()
}

/// Verdict of `/verificar`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct IntegrityResult {
    /// Whether every block links to its predecessor.
    #[serde(rename = "integridad_valida", default)]
    pub valid: bool,
}

impl IntegrityResult {
    /// Decodes the verdict; anything unreadable counts as invalid.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_chain_verbatim() {
        let value = json!([{"index": 0, "hash_actual": "abc", "votos": []}]);
        let blocks = blocks_from_value(&value);
        let rendered = render_chain(&blocks).unwrap();

        assert_eq!(rendered, serde_json::to_string_pretty(&value).unwrap());
        assert!(rendered.contains("\"hash_actual\": \"abc\""));
    }

    #[test]
    fn test_empty_chain() {
        assert!(render_chain(&blocks_from_value(&json!([]))).is_none());
        assert!(render_chain(&blocks_from_value(&json!({"x": 1}))).is_none());
    }

    #[test]
    fn test_integrity_verdict() {
        assert!(IntegrityResult::from_value(&json!({"integridad_valida": true})).valid);
        assert!(!IntegrityResult::from_value(&json!({"integridad_valida": false})).valid);
        assert!(!IntegrityResult::from_value(&json!({"integridad_valida": "yes"})).valid);
        assert!(!IntegrityResult::from_value(&json!({})).valid);
    }
}
