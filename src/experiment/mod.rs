//! Experiment configuration schema
//!
//! One trainer invocation is described by a single immutable
//! [`ExperimentConfig`] record:
//!
//! ```text
//! ExperimentConfig ──┬── algorithm selection (algo, step_size, discount)
//!                    ├── topology (control_mode, sampler, policy_hidden_sizes)
//!                    ├── sizing (n_iter, batch_size, max_path_length)
//!                    ├── RewardTerms  [shaping coefficients]
//!                    └── curriculum_path
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use aircas_launch::experiment::{Algo, ExperimentConfig};
//!
//! let config = ExperimentConfig::builder("annulus_sweep")
//!     .algo(Algo::Trpo)
//!     .discount(0.99)
//!     .build()?;
//!
//! // The trainer consumes the record as a flat argument list
//! let args = config.trainer_args();
//! assert!(args.contains(&"--discount".to_string()));
//! # Ok::<(), aircas_launch::Error>(())
//! ```

mod args;
mod config;
mod reward;

pub use args::TRAINER_FLAGS;
pub use config::{Algo, ControlMode, ExperimentConfig, ExperimentConfigBuilder, Sampler};
pub use reward::RewardTerms;
