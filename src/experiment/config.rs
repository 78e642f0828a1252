//! Experiment configuration - the immutable record handed to the trainer

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::RewardTerms;

/// Policy optimization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algo {
    /// Trust-region policy optimization
    Trpo,
    /// Vanilla policy gradient
    Vpg,
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trpo => write!(f, "trpo"),
            Self::Vpg => write!(f, "vpg"),
        }
    }
}

/// Agent control topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Each agent runs its own copy of the shared policy
    Decentralized,
    /// One policy controls all agents jointly
    Centralized,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decentralized => write!(f, "decentralized"),
            Self::Centralized => write!(f, "centralized"),
        }
    }
}

/// Trajectory sampling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampler {
    /// Single-process rollout sampling
    Simple,
    /// Multi-process rollout sampling
    Parallel,
}

impl fmt::Display for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Experiment configuration for one trainer invocation.
///
/// All fields are set once at construction and passed through to the
/// external trainer unmodified; the launcher never mutates or
/// reinterprets them. Construct via [`ExperimentConfig::default`] (the
/// shipped literal configuration), [`ExperimentConfig::builder`], or
/// [`ExperimentConfig::from_json_file`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    exp_name: String,
    algo: Algo,
    step_size: f64,
    discount: f64,
    control_mode: ControlMode,
    sampler: Sampler,
    policy_hidden_sizes: Vec<usize>,
    n_iter: u32,
    batch_size: u32,
    max_path_length: u32,
    reward_terms: RewardTerms,
    curriculum_path: PathBuf,
}

impl Default for ExperimentConfig {
    /// The fixed literal configuration the shipped binary launches.
    ///
    /// `max_path_length` matches the environment's episode cap of 2000
    /// steps; the curriculum stages the annulus scenario from 10 up to
    /// 60 aircraft.
    fn default() -> Self {
        Self {
            exp_name: "multiaircraft_trpo".to_string(),
            algo: Algo::Trpo,
            step_size: 0.01,
            discount: 0.99,
            control_mode: ControlMode::Decentralized,
            sampler: Sampler::Simple,
            policy_hidden_sizes: vec![100, 50, 25],
            n_iter: 500,
            batch_size: 30000,
            max_path_length: 2000,
            reward_terms: RewardTerms::default(),
            curriculum_path: PathBuf::from("curriculum/annulus_10_60.yaml"),
        }
    }
}

impl ExperimentConfig {
    /// Create a builder seeded with the default literal configuration.
    #[must_use]
    pub fn builder(exp_name: impl Into<String>) -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::new(exp_name)
    }

    /// Load a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFile`] if the file cannot be read or
    /// parsed, or [`Error::InvalidConfig`] if a field violates its
    /// invariant.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric invariants of the record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending
    /// field: `discount` must lie in (0, 1], the iteration/batch/path
    /// counts must be at least 1, and the policy must have at least one
    /// hidden layer.
    pub fn validate(&self) -> Result<()> {
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return Err(Error::InvalidConfig {
                field: "discount",
                reason: format!("must lie in (0, 1], got {}", self.discount),
            });
        }
        if self.n_iter == 0 {
            return Err(Error::InvalidConfig {
                field: "n_iter",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig {
                field: "batch_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_path_length == 0 {
            return Err(Error::InvalidConfig {
                field: "max_path_length",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.policy_hidden_sizes.is_empty() {
            return Err(Error::InvalidConfig {
                field: "policy_hidden_sizes",
                reason: "must name at least one hidden layer".to_string(),
            });
        }
        Ok(())
    }

    /// Get the experiment name.
    #[must_use]
    pub fn exp_name(&self) -> &str {
        &self.exp_name
    }

    /// Get the algorithm selector.
    #[must_use]
    pub const fn algo(&self) -> Algo {
        self.algo
    }

    /// Get the optimizer trust-region constraint.
    #[must_use]
    pub const fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Get the reward discount factor.
    #[must_use]
    pub const fn discount(&self) -> f64 {
        self.discount
    }

    /// Get the agent control topology.
    #[must_use]
    pub const fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    /// Get the trajectory sampling strategy.
    #[must_use]
    pub const fn sampler(&self) -> Sampler {
        self.sampler
    }

    /// Get the policy hidden-layer widths.
    #[must_use]
    pub fn policy_hidden_sizes(&self) -> &[usize] {
        &self.policy_hidden_sizes
    }

    /// Get the training iteration count.
    #[must_use]
    pub const fn n_iter(&self) -> u32 {
        self.n_iter
    }

    /// Get the samples per training batch.
    #[must_use]
    pub const fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Get the episode truncation length.
    #[must_use]
    pub const fn max_path_length(&self) -> u32 {
        self.max_path_length
    }

    /// Get the reward shaping coefficients.
    #[must_use]
    pub const fn reward_terms(&self) -> &RewardTerms {
        &self.reward_terms
    }

    /// Get the curriculum definition path.
    #[must_use]
    pub fn curriculum_path(&self) -> &Path {
        &self.curriculum_path
    }
}

/// Builder for `ExperimentConfig`.
///
/// Starts from the default literal configuration; every setter replaces
/// one field. `build` validates the assembled record.
#[derive(Debug)]
pub struct ExperimentConfigBuilder {
    config: ExperimentConfig,
}

impl ExperimentConfigBuilder {
    /// Create a new builder with the given experiment name.
    #[must_use]
    pub fn new(exp_name: impl Into<String>) -> Self {
        let mut config = ExperimentConfig::default();
        config.exp_name = exp_name.into();
        Self { config }
    }

    /// Set the algorithm selector.
    #[must_use]
    pub const fn algo(mut self, algo: Algo) -> Self {
        self.config.algo = algo;
        self
    }

    /// Set the optimizer trust-region constraint.
    #[must_use]
    pub const fn step_size(mut self, step_size: f64) -> Self {
        self.config.step_size = step_size;
        self
    }

    /// Set the reward discount factor.
    #[must_use]
    pub const fn discount(mut self, discount: f64) -> Self {
        self.config.discount = discount;
        self
    }

    /// Set the agent control topology.
    #[must_use]
    pub const fn control_mode(mut self, control_mode: ControlMode) -> Self {
        self.config.control_mode = control_mode;
        self
    }

    /// Set the trajectory sampling strategy.
    #[must_use]
    pub const fn sampler(mut self, sampler: Sampler) -> Self {
        self.config.sampler = sampler;
        self
    }

    /// Set the policy hidden-layer widths.
    #[must_use]
    pub fn policy_hidden_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.config.policy_hidden_sizes = sizes.into();
        self
    }

    /// Set the training iteration count.
    #[must_use]
    pub const fn n_iter(mut self, n_iter: u32) -> Self {
        self.config.n_iter = n_iter;
        self
    }

    /// Set the samples per training batch.
    #[must_use]
    pub const fn batch_size(mut self, batch_size: u32) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Set the episode truncation length.
    #[must_use]
    pub const fn max_path_length(mut self, max_path_length: u32) -> Self {
        self.config.max_path_length = max_path_length;
        self
    }

    /// Set the reward shaping coefficients.
    #[must_use]
    pub const fn reward_terms(mut self, reward_terms: RewardTerms) -> Self {
        self.config.reward_terms = reward_terms;
        self
    }

    /// Set the curriculum definition path.
    #[must_use]
    pub fn curriculum_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.curriculum_path = path.into();
        self
    }

    /// Validate and build the `ExperimentConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a field violates its
    /// invariant.
    pub fn build(self) -> Result<ExperimentConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.exp_name(), "multiaircraft_trpo");
        assert_eq!(config.algo(), Algo::Trpo);
        assert_eq!(config.max_path_length(), 2000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExperimentConfig::builder("curriculum_sweep")
            .algo(Algo::Vpg)
            .discount(0.95)
            .policy_hidden_sizes(vec![64, 64])
            .curriculum_path("curriculum/circle_10_40.yaml")
            .build()
            .expect("config should be valid");

        assert_eq!(config.exp_name(), "curriculum_sweep");
        assert_eq!(config.algo(), Algo::Vpg);
        assert_eq!(config.policy_hidden_sizes(), &[64, 64]);
        // Untouched fields keep the literal defaults
        assert_eq!(config.batch_size(), 30000);
    }

    #[test]
    fn test_builder_rejects_bad_discount() {
        let err = ExperimentConfig::builder("bad")
            .discount(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig { field: "discount", .. }
        ));
    }

    #[test]
    fn test_builder_rejects_zero_counts() {
        for (field, builder) in [
            ("n_iter", ExperimentConfig::builder("bad").n_iter(0)),
            ("batch_size", ExperimentConfig::builder("bad").batch_size(0)),
            (
                "max_path_length",
                ExperimentConfig::builder("bad").max_path_length(0),
            ),
        ] {
            let err = builder.build().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { field: f, .. } if f == field));
        }
    }

    #[test]
    fn test_builder_rejects_empty_hidden_sizes() {
        let err = ExperimentConfig::builder("bad")
            .policy_hidden_sizes(Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfig { field: "policy_hidden_sizes", .. }
        ));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ExperimentConfig::default();
        let json = serde_json::to_string(&config).expect("serialization failed");
        let back: ExperimentConfig = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(config, back);
    }

    #[test]
    fn test_enum_tokens() {
        assert_eq!(Algo::Trpo.to_string(), "trpo");
        assert_eq!(Algo::Vpg.to_string(), "vpg");
        assert_eq!(ControlMode::Decentralized.to_string(), "decentralized");
        assert_eq!(ControlMode::Centralized.to_string(), "centralized");
        assert_eq!(Sampler::Simple.to_string(), "simple");
        assert_eq!(Sampler::Parallel.to_string(), "parallel");
    }
}
