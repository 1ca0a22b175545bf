//! The isolated interpreter environment and its activation guard.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use super::runner::{CommandRunner, Invocation};

pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";
pub const PATH_VAR: &str = "PATH";

/// A virtual environment directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatedEnv {
    root: PathBuf,
}

impl IsolatedEnv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// The environment's own interpreter.
    pub fn python(&self) -> PathBuf {
        if cfg!(windows) {
            self.bin_dir().join("python.exe")
        } else {
            self.bin_dir().join("python")
        }
    }

    /// `VIRTUAL_ENV` plus a `PATH` with the environment's bin directory first.
    pub fn activation_vars(&self) -> Vec<(String, OsString)> {
        let bin = self.bin_dir();
        let inherited = env::var_os(PATH_VAR).unwrap_or_default();
        let path = env::join_paths(std::iter::once(bin.clone()).chain(env::split_paths(&inherited)))
            .unwrap_or_else(|_| bin.into_os_string());

        vec![
            (VIRTUAL_ENV_VAR.to_string(), self.root.clone().into_os_string()),
            (PATH_VAR.to_string(), path),
        ]
    }
}

/// An activated environment. Commands built through it run inside the
/// environment; dropping it releases the environment through the runner.
pub struct ActiveEnv<'r, R: CommandRunner + ?Sized> {
    env: IsolatedEnv,
    vars: Vec<(String, OsString)>,
    runner: &'r R,
}

impl<'r, R: CommandRunner + ?Sized> ActiveEnv<'r, R> {
    pub fn activate(env: IsolatedEnv, runner: &'r R) -> Self {
        let vars = env.activation_vars();
        Self { env, vars, runner }
    }

    pub fn env(&self) -> &IsolatedEnv {
        &self.env
    }

    /// `program` run in `current_dir` with the activation variables set.
    pub fn command(&self, program: impl Into<PathBuf>, current_dir: &Path) -> Invocation {
        Invocation::new(program, current_dir).envs(self.vars.clone())
    }
}

impl<R: CommandRunner + ?Sized> Drop for ActiveEnv<'_, R> {
    fn drop(&mut self) {
        self.runner.release(&self.env);
    }
}
