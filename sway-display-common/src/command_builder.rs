use std::path::PathBuf;
use std::process::Command;
use crate::error::ProcessError;
use crate::mode::{DisplayLayout, OutputLayout};

#[derive(Debug, Clone)]
enum Swaymsg {
    Path(PathBuf),
    // Resolved on PATH each time a command is built.
    Lookup(String),
}

#[derive(Debug, Clone)]
pub struct CommandBuilder {
    swaymsg: Swaymsg,
}

impl CommandBuilder {
    pub fn new(swaymsg_path: PathBuf) -> Self {
        Self { swaymsg: Swaymsg::Path(swaymsg_path) }
    }

    /// Defers the `which` lookup of `program` until a command is built.
    pub fn lookup(program: &str) -> Self {
        Self { swaymsg: Swaymsg::Lookup(program.to_string()) }
    }

    /// The configured binary, as given (not resolved).
    pub fn program(&self) -> String {
        match &self.swaymsg {
            Swaymsg::Path(path) => path.display().to_string(),
            Swaymsg::Lookup(program) => program.clone(),
        }
    }

    pub fn resolve(&self) -> Result<PathBuf, ProcessError> {
        match &self.swaymsg {
            Swaymsg::Path(path) => Ok(path.clone()),
            Swaymsg::Lookup(program) => {
                let path = which::which(program).map_err(|_| ProcessError::NotFound {
                    program: program.clone(),
                })?;
                log::debug!("Using swaymsg at {:?}", path);
                Ok(path)
            }
        }
    }

    pub fn build_get_outputs_command(&self) -> Result<Command, ProcessError> {
        let mut cmd = Command::new(self.resolve()?);
        cmd.args(["-t", "get_outputs"]);
        Ok(cmd)
    }

    /// `swaymsg -q` with both output directives in one multi-line argument.
    pub fn build_output_command(
        &self,
        display: &DisplayLayout,
        layout: &OutputLayout,
    ) -> Result<Command, ProcessError> {
        let mut cmd = Command::new(self.resolve()?);
        cmd.arg("-q");
        cmd.arg(display.output_command(layout));
        Ok(cmd)
    }
}
