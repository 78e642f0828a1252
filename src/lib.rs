//! # aircas-launch: Multi-Aircraft RL Experiment Launcher
//!
//! Declares an immutable experiment configuration for the external
//! multi-aircraft collision-avoidance trainer and launches that trainer
//! exactly once, blocking until it exits and propagating its exit
//! status verbatim.
//!
//! The trainer itself (policy optimization, simulation dynamics,
//! curriculum semantics) is an opaque collaborator: this crate only
//! serializes the configuration onto its command line and extends the
//! module search path its libraries are resolved through.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aircas_launch::experiment::ExperimentConfig;
//! use aircas_launch::launch::Launcher;
//!
//! let config = ExperimentConfig::default();
//! let report = Launcher::new(".").launch(&config)?;
//! println!("trainer ran for {:?}", report.duration());
//! # Ok::<(), aircas_launch::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;
pub mod launch;

pub use error::{Error, Result};
