//! Experiment Launcher - one blocking trainer invocation
//!
//! The launcher owns the mechanics the trainer does not: resolving the
//! module search path, assembling the command line from an
//! [`ExperimentConfig`], spawning the trainer exactly once, and
//! propagating its exit status verbatim. It never interprets trainer
//! output, never retries, and carries no timeout; termination is the
//! trainer's business.

mod search_path;

pub use search_path::{extended_search_path, SEARCH_PATH_VAR, SIBLING_LIBS};

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::experiment::ExperimentConfig;

/// Default trainer interpreter.
const DEFAULT_INTERPRETER: &str = "python";

/// Default trainer entry point, relative to the base directory.
const DEFAULT_SCRIPT: &str = "runners/run_multiaircraft.py";

/// Launches the external trainer with a serialized experiment config.
///
/// A `Launcher` is reusable: each [`launch`](Self::launch) call builds
/// a fresh argument list and spawns an independent child process, so
/// launching the same config twice yields two identical invocations.
#[derive(Debug, Clone)]
pub struct Launcher {
    base_dir: PathBuf,
    interpreter: PathBuf,
    script: PathBuf,
}

impl Launcher {
    /// Create a launcher rooted at `base_dir`, the directory holding
    /// the trainer entry point and its sibling libraries.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script: PathBuf::from(DEFAULT_SCRIPT),
        }
    }

    /// Override the interpreter the trainer is started with.
    #[must_use]
    pub fn interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Override the trainer entry point, relative to the base directory.
    #[must_use]
    pub fn script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }

    /// Get the directory the launcher is rooted at.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Assemble the trainer command for `config` without spawning it.
    ///
    /// The command carries the full argument list (entry point plus the
    /// flag/value pairs of [`ExperimentConfig::trainer_args`]) and the
    /// extended module search path in its environment. Exposed so the
    /// invocation can be inspected or printed before launch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchPath`] if the search path cannot be
    /// assembled from the base directory and the inherited value.
    pub fn command(&self, config: &ExperimentConfig) -> Result<Command> {
        let inherited = std::env::var_os(SEARCH_PATH_VAR);
        let search_path = extended_search_path(&self.base_dir, inherited.as_deref())?;

        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(self.base_dir.join(&self.script))
            .args(config.trainer_args())
            .env(SEARCH_PATH_VAR, search_path);
        Ok(cmd)
    }

    /// Launch the trainer with `config` and block until it exits.
    ///
    /// Exactly one child process is spawned per call; the parent
    /// environment is never mutated.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidConfig`] if the config violates an invariant
    /// * [`Error::ProcessLaunch`] if the trainer cannot be started
    ///   (missing entry point, or the interpreter fails to spawn)
    /// * [`Error::ExternalProcess`] carrying the trainer's exit code
    ///   verbatim on any nonzero exit
    /// * [`Error::Terminated`] if the trainer died without an exit code
    pub fn launch(&self, config: &ExperimentConfig) -> Result<LaunchReport> {
        config.validate()?;

        // The interpreter would start and exit nonzero on a missing
        // script; surface that as a launch failure, not a trainer one.
        let entry_point = self.base_dir.join(&self.script);
        if !entry_point.is_file() {
            return Err(Error::ProcessLaunch {
                program: entry_point.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "trainer entry point does not exist",
                ),
            });
        }

        let mut cmd = self.command(config)?;

        debug!(args = ?cmd.get_args().collect::<Vec<_>>(), "trainer argv");
        info!(
            exp_name = config.exp_name(),
            interpreter = %self.interpreter.display(),
            script = %self.script.display(),
            "launching trainer"
        );

        let started_at = Utc::now();
        let clock = Instant::now();
        let status = cmd.status().map_err(|e| Error::ProcessLaunch {
            program: self.interpreter.display().to_string(),
            source: e,
        })?;
        let duration = clock.elapsed();

        match status.code() {
            Some(0) => {
                info!(elapsed_s = duration.as_secs(), "trainer finished");
                Ok(LaunchReport {
                    started_at,
                    duration,
                    exit_code: 0,
                })
            }
            Some(code) => Err(Error::ExternalProcess { code }),
            None => Err(Error::Terminated),
        }
    }
}

/// Outcome of one successful trainer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchReport {
    started_at: DateTime<Utc>,
    duration: Duration,
    exit_code: i32,
}

impl LaunchReport {
    /// When the trainer process was started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Wall-clock time the trainer ran for.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Exit code the trainer reported (always 0 on the success path).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_command_carries_entry_point_and_flags() {
        let launcher = Launcher::new("/opt/cas");
        let config = ExperimentConfig::default();
        let cmd = launcher.command(&config).expect("command assembles");

        assert_eq!(cmd.get_program(), OsStr::new("python"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args[0], OsStr::new("/opt/cas/runners/run_multiaircraft.py"));
        assert!(args.contains(&OsStr::new("--curriculum")));
    }

    #[test]
    fn test_command_sets_search_path_only() {
        let launcher = Launcher::new("/opt/cas");
        let cmd = launcher
            .command(&ExperimentConfig::default())
            .expect("command assembles");

        let overrides: Vec<_> = cmd.get_envs().collect();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].0, OsStr::new(SEARCH_PATH_VAR));
        assert!(overrides[0].1.is_some());
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let launcher = Launcher::new(".")
            .interpreter("/usr/bin/python3")
            .script("train.py");
        let cmd = launcher
            .command(&ExperimentConfig::default())
            .expect("command assembles");

        assert_eq!(cmd.get_program(), OsStr::new("/usr/bin/python3"));
        assert_eq!(cmd.get_args().next(), Some(OsStr::new("./train.py")));
    }

    #[test]
    fn test_launch_rejects_invalid_config_before_spawn() {
        // The builder refuses invalid fields, so smuggle one in through
        // deserialization to exercise the launch-time check.
        let mut raw = serde_json::to_value(ExperimentConfig::default()).expect("serializable");
        raw["discount"] = serde_json::json!(0.0);
        let config: ExperimentConfig = serde_json::from_value(raw).expect("deserializable");

        let err = Launcher::new(".").launch(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { field: "discount", .. }));
    }
}
