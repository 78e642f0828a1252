//! Reward shaping coefficients passed through to the trainer

use serde::{Deserialize, Serialize};

/// Reward shaping coefficients for the multi-aircraft environment.
///
/// Each field is a weight the trainer applies to one reward event; the
/// launcher never interprets them, it only serializes them onto the
/// trainer command line (`--rew_*` flags).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardTerms {
    /// Bonus for an aircraft reaching its destination
    pub arrival: f64,
    /// Shaping term for closing distance toward the destination
    pub closing: f64,
    /// Penalty for a near mid-air collision
    pub nmac: f64,
    /// Penalty for commanding a large turn rate
    pub large_turnrate: f64,
    /// Penalty for commanding a large acceleration
    pub large_acc: f64,
}

impl Default for RewardTerms {
    fn default() -> Self {
        Self {
            arrival: 15.0,
            closing: 2.5,
            nmac: -15.0,
            large_turnrate: -0.1,
            large_acc: -0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_terms_default() {
        let terms = RewardTerms::default();
        assert!(terms.arrival > 0.0);
        assert!(terms.nmac < 0.0);
    }

    #[test]
    fn test_reward_terms_serde_round_trip() {
        let terms = RewardTerms::default();
        let json = serde_json::to_string(&terms).expect("serialization failed");
        let back: RewardTerms = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(terms, back);
    }
}
