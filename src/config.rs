use serde::Deserialize;

use crate::errors::AggregationError;

/// What to do when a withdrawal-style event would push a non-negative
/// balance below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvariantPolicy {
    /// Store zero and log the overdraft amount.
    #[default]
    Clamp,
    /// Return an error to the caller without writing.
    Fault,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub invariant_policy: InvariantPolicy,
    /// Swap fee share for stable pools, in basis points.
    pub stable_fee_bps: u64,
    /// Swap fee share for volatile pools, in basis points.
    pub volatile_fee_bps: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { invariant_policy: InvariantPolicy::default(), stable_fee_bps: 5, volatile_fee_bps: 30 }
    }
}

impl EngineSettings {
    pub fn from_json(raw: &str) -> Result<Self, AggregationError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_fields() {
        let settings = EngineSettings::from_json("{}").unwrap();
        assert_eq!(settings.invariant_policy, InvariantPolicy::Clamp);
        assert_eq!(settings.stable_fee_bps, 5);
        assert_eq!(settings.volatile_fee_bps, 30);
    }

    #[test]
    fn policy_parses_snake_case() {
        let settings = EngineSettings::from_json(r#"{"invariant_policy":"fault"}"#).unwrap();
        assert_eq!(settings.invariant_policy, InvariantPolicy::Fault);
    }

    #[test]
    fn malformed_settings_are_rejected() {
        assert!(EngineSettings::from_json(r#"{"invariant_policy":"panic"}"#).is_err());
    }
}
