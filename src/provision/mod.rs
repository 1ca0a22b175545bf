//! Run an external fetcher script inside an isolated Python environment
//!
//! - `env`: The environment directory and its activation guard
//! - `runner`: Process spawning behind the `CommandRunner` trait
//!
//! [`run`] performs the whole sequence: find the interpreter, create the
//! environment if it is missing, install packages, run the entry point and
//! report which of the known output files exist afterwards. Progress goes to
//! stdout; [`run_with_output`] takes any writer instead.

pub mod env;
pub mod runner;


use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    core::outputs::{existing_outputs, write_generated_files},
    error::EspnError,
    Result,
};

pub use env::{ActiveEnv, IsolatedEnv};
pub use runner::{CommandRunner, Invocation, ProcessExit, SystemRunner};

pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_ENV_DIR: &str = "venv";
pub const DEFAULT_ENTRY_POINT: &str = "espn_fantasy_fetcher.py";
pub const DEFAULT_PACKAGES: [&str; 2] = ["requests", "pandas"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub interpreter: String,
    /// Relative paths resolve against `work_dir`.
    pub env_dir: PathBuf,
    pub packages: Vec<String>,
    /// Relative paths resolve against `work_dir`.
    pub entry_point: PathBuf,
    pub work_dir: PathBuf,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            env_dir: PathBuf::from(DEFAULT_ENV_DIR),
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            entry_point: PathBuf::from(DEFAULT_ENTRY_POINT),
            work_dir: PathBuf::from("."),
        }
    }
}

/// How the entry point finished. Both variants are a completed run; setup
/// problems come back as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Exit status zero, with the known outputs present afterwards.
    Succeeded { generated: Vec<PathBuf> },
    Failed { code: Option<i32> },
}

fn create_env<R: CommandRunner + ?Sized, W: Write>(
    runner: &R,
    out: &mut W,
    interpreter: &Path,
    env: &IsolatedEnv,
    work_dir: &Path,
) -> Result<()> {
    writeln!(out, "Creating virtual environment in {}...", env.root().display())?;

    let invocation = Invocation::new(interpreter, work_dir)
        .args(["-m", "venv"])
        .arg(env.root());
    let setup_error = |message: String| EspnError::EnvironmentSetup {
        path: env.root().to_path_buf(),
        message,
    };

    match runner.run(&invocation) {
        Ok(exit) if exit.success() => Ok(()),
        Ok(exit) => Err(setup_error(format!(
            "venv creation exited with code {}",
            exit_code_label(exit.code)
        ))),
        Err(e) => Err(setup_error(e.to_string())),
    }
}

fn install_packages<R: CommandRunner + ?Sized, W: Write>(
    active: &ActiveEnv<'_, R>,
    runner: &R,
    out: &mut W,
    config: &ProvisionConfig,
    work_dir: &Path,
) -> io::Result<()> {
    if config.packages.is_empty() {
        debug!("no packages requested, skipping install");
        return Ok(());
    }
    writeln!(out, "Installing dependencies: {}", config.packages.join(" "))?;

    let invocation = active
        .command(active.env().python(), work_dir)
        .args(["-m", "pip", "install"])
        .args(config.packages.iter().map(String::as_str));

    match runner.run(&invocation) {
        Ok(exit) if exit.success() => writeln!(out, "✓ Dependencies installed"),
        Ok(exit) => {
            warn!(code = ?exit.code, "pip install failed");
            writeln!(
                out,
                "⚠ Dependency installation failed (exit code {}), continuing",
                exit_code_label(exit.code)
            )
        }
        Err(e) => {
            warn!("pip install could not start: {e}");
            writeln!(out, "⚠ Dependency installation failed ({e}), continuing")
        }
    }
}

fn exit_code_label(code: Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Provision the environment and run the entry point once, reporting to stdout.
///
/// Errors are the hard stops: no interpreter on `PATH` (checked before
/// anything else), a failed environment creation, or a missing entry point.
/// An entry point that exits non-zero or cannot be started at all is
/// [`RunOutcome::Failed`], not an error.
/// Once activated, the environment is released on every return path.
pub fn run<R: CommandRunner + ?Sized>(config: &ProvisionConfig, runner: &R) -> Result<RunOutcome> {
    run_with_output(config, runner, &mut io::stdout())
}

/// [`run`], with progress and the final report written to `out`.
pub fn run_with_output<R: CommandRunner + ?Sized, W: Write>(
    config: &ProvisionConfig,
    runner: &R,
    out: &mut W,
) -> Result<RunOutcome> {
    let interpreter = runner
        .locate(&config.interpreter)
        .ok_or_else(|| EspnError::InterpreterNotFound {
            interpreter: config.interpreter.clone(),
        })?;
    debug!(interpreter = %interpreter.display(), "interpreter found");

    let work_dir = config.work_dir.canonicalize()?;
    let env = IsolatedEnv::new(work_dir.join(&config.env_dir));

    if env.exists() {
        writeln!(out, "Using existing virtual environment at {}", env.root().display())?;
    } else {
        create_env(runner, out, &interpreter, &env, &work_dir)?;
        writeln!(out, "✓ Virtual environment created")?;
    }

    let active = ActiveEnv::activate(env, runner);
    install_packages(&active, runner, out, config, &work_dir)?;

    let entry_point = work_dir.join(&config.entry_point);
    if !entry_point.is_file() {
        return Err(EspnError::EntryPointMissing { path: entry_point });
    }

    writeln!(out, "Running {}...", config.entry_point.display())?;
    let python = active.env().python();
    let invocation = active.command(&python, &work_dir).arg(&entry_point);
    let exit = match runner.run(&invocation) {
        Ok(exit) => exit,
        Err(e) => {
            warn!(python = %python.display(), "entry point could not start: {e}");
            ProcessExit { code: None }
        }
    };

    if exit.success() {
        writeln!(out, "✓ Data fetch completed successfully")?;
        let generated = existing_outputs(&work_dir);
        write_generated_files(out, &generated)?;
        Ok(RunOutcome::Succeeded { generated })
    } else {
        writeln!(
            out,
            "✗ Data fetch failed (exit code {})",
            exit_code_label(exit.code)
        )?;
        Ok(RunOutcome::Failed { code: exit.code })
    }
}
