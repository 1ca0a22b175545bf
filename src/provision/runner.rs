//! Process spawning behind a trait so provisioning can be driven by a fake.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::debug;

use super::env::IsolatedEnv;
use crate::Result;

/// One synchronous process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Extra variables layered over the inherited environment.
    pub envs: Vec<(String, OsString)>,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, current_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn envs(mut self, envs: Vec<(String, OsString)>) -> Self {
        self.envs.extend(envs);
        self
    }

    /// Arguments as display strings, for messages and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Exit status of a finished process. `code` is `None` when it was killed by
/// a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Everything provisioning needs from the operating system.
pub trait CommandRunner {
    /// Resolve `program` on `PATH`.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run to completion with inherited stdio.
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit>;

    /// Called once when an activated environment goes out of scope.
    fn release(&self, _env: &IsolatedEnv) {}
}

/// Real processes via `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, invocation: &Invocation) -> Result<ProcessExit> {
        debug!(
            program = %invocation.program.display(),
            args = ?invocation.args_lossy(),
            "spawning"
        );
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.envs.iter().map(|(k, v)| (k, v)))
            .current_dir(&invocation.current_dir)
            .status()?;
        Ok(ProcessExit {
            code: status.code(),
        })
    }

    fn release(&self, env: &IsolatedEnv) {
        // Activation only ever touched child environments
        debug!(env = %env.root().display(), "environment deactivated");
    }
}
