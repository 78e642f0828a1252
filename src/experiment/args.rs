//! Trainer command-line serialization
//!
//! The external trainer consumes the experiment configuration as a flat
//! flag/value argument list. Serialization is pure: equal configs
//! always produce byte-identical argument vectors, and every flag
//! appears exactly once.

use super::ExperimentConfig;

/// Names of the trainer flags, in the order they are emitted.
pub const TRAINER_FLAGS: [&str; 16] = [
    "--exp_name",
    "--algo",
    "--step_size",
    "--discount",
    "--control",
    "--sampler",
    "--policy_hidden",
    "--n_iter",
    "--batch_size",
    "--max_path_length",
    "--rew_arrival",
    "--rew_closing",
    "--rew_nmac",
    "--rew_large_turnrate",
    "--rew_large_acc",
    "--curriculum",
];

impl ExperimentConfig {
    /// Serialize the configuration to the trainer's argument list.
    ///
    /// Produces one `--flag value` pair per field of the record, with
    /// `policy_hidden` rendered as comma-separated layer widths. The
    /// launcher passes these through verbatim; it does not interpret
    /// them.
    #[must_use]
    pub fn trainer_args(&self) -> Vec<String> {
        let hidden = self
            .policy_hidden_sizes()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let rew = self.reward_terms();

        let values = [
            self.exp_name().to_string(),
            self.algo().to_string(),
            self.step_size().to_string(),
            self.discount().to_string(),
            self.control_mode().to_string(),
            self.sampler().to_string(),
            hidden,
            self.n_iter().to_string(),
            self.batch_size().to_string(),
            self.max_path_length().to_string(),
            rew.arrival.to_string(),
            rew.closing.to_string(),
            rew.nmac.to_string(),
            rew.large_turnrate.to_string(),
            rew.large_acc.to_string(),
            self.curriculum_path().display().to_string(),
        ];

        TRAINER_FLAGS
            .iter()
            .zip(values)
            .flat_map(|(flag, value)| [(*flag).to_string(), value])
            .collect()
    }
}
