//! Running a resolved action as a child process

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command as ProcessCommand, ExitStatus, Stdio};

use log::{debug, warn};
use tempfile::TempPath;
use thiserror::Error;

use crate::actions::pack::ResolvedAction;
use crate::messages;
use crate::settings::Settings;

/// Exit code reported when the interpreter could not be started
pub const LAUNCH_FAILED: i32 = 127;

/// Failures that prevent an action from being run at all
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("unable to stage script: {0}")]
    Staging(#[from] std::io::Error),
}

/// Everything needed to start an action, short of the staged script itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub name: String,
    pub shell: String,
    /// Variables applied on top of the inherited environment, in order
    pub env: Vec<(OsString, OsString)>,
}

impl Launch {
    #[must_use]
    pub fn new(resolved: ResolvedAction<'_>, settings: &Settings) -> Self {
        let mut env: Vec<(OsString, OsString)> = resolved
            .env()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect();
        match std::env::current_exe() {
            Ok(exe) => env.push((
                OsString::from(&settings.self_env_key),
                exe.into_os_string(),
            )),
            Err(e) => warn!("Unable to resolve launcher executable: {e}"),
        }
        Launch {
            name: resolved.action.name.clone(),
            shell: resolved.shell(&settings.default_shell).to_string(),
            env,
        }
    }

    /// Build the process: `<shell> <script>` with inherited stdio.
    #[must_use]
    pub fn command(&self, script: &Path) -> ProcessCommand {
        let mut command = ProcessCommand::new(&self.shell);
        command
            .arg(script)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

/// Write `script` to a fresh temporary file that is removed when the returned path drops.
///
/// # Errors
///
/// Returns `ExecError::Staging` if the file cannot be created or written.
pub fn stage_script(script: &str, dir: Option<&Path>) -> Result<TempPath, ExecError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("launchpack-");
    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    file.write_all(script.as_bytes())?;
    file.flush()?;
    Ok(file.into_temp_path())
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    LAUNCH_FAILED
}

/// Run a resolved action to completion and return its exit code.
///
/// A failing or unlaunchable child is reported on stderr and folded into the
/// returned code; only staging the script can fail.
///
/// # Errors
///
/// Returns `ExecError::Staging` if the script cannot be written to disk.
pub fn run(resolved: ResolvedAction<'_>, settings: &Settings) -> Result<i32, ExecError> {
    let launch = Launch::new(resolved, settings);
    let script = stage_script(&resolved.action.script, settings.staging_dir.as_deref())?;
    debug!(
        "Running '{}' with {} {}",
        launch.name,
        launch.shell,
        script.display()
    );

    let color = messages::stderr_color();
    let code = match launch.command(&script).status() {
        Ok(status) => {
            let code = exit_code(status);
            if code != 0 {
                eprintln!("{}", messages::format_failure_message(&launch.name, code, color));
            }
            code
        }
        Err(e) => {
            eprintln!(
                "{}",
                messages::format_spawn_error(&launch.name, &launch.shell, &e, color)
            );
            LAUNCH_FAILED
        }
    };

    if let Err(e) = script.close() {
        warn!("Unable to remove staged script: {e}");
    }
    Ok(code)
}
