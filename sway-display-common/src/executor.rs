use std::process::{Command, Output};
use crate::error::ProcessError;

/// Runs a prepared command to completion and collects its output.
pub trait CommandRunner {
    fn output(&self, command: &mut Command) -> std::io::Result<Output>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, command: &mut Command) -> std::io::Result<Output> {
        command.output()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor<R = SystemRunner> {
    runner: R,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl<R: CommandRunner> ProcessExecutor<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs `cmd` once. A non-zero exit status is an error carrying stderr.
    pub fn execute(&self, mut cmd: Command) -> Result<Output, ProcessError> {
        log::debug!("Executing: {:?}", cmd);

        let output = self.runner.output(&mut cmd)
            .map_err(|e| ProcessError::Execution {
                command: format!("{:?}", cmd),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code().unwrap_or(-1);
            log::error!("Command {:?} failed with exit code {}: {}", cmd, code, stderr);
            return Err(ProcessError::NonZeroExit {
                code,
                stderr: stderr.to_string(),
            });
        }

        Ok(output)
    }
}
