use serde::Deserialize;
use crate::command_builder::CommandBuilder;
use crate::error::SwayError;
use crate::executor::{CommandRunner, ProcessExecutor, SystemRunner};
use crate::mode::{DisplayLayout, OutputLayout};
use crate::Result;

/// One entry of `swaymsg -t get_outputs`. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SwayOutput {
    pub name: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl SwayOutput {
    pub fn description(&self) -> Option<String> {
        match (self.make.as_deref(), self.model.as_deref()) {
            (Some(make), Some(model)) => Some(format!("{} {}", make, model)),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }
}

pub fn parse_outputs(json: &[u8]) -> std::result::Result<Vec<SwayOutput>, SwayError> {
    serde_json::from_slice(json).map_err(|source| SwayError::MalformedResponse { source })
}

/// Talks to sway through the `swaymsg` binary.
#[derive(Debug, Clone)]
pub struct SwayClient<R = SystemRunner> {
    builder: CommandBuilder,
    executor: ProcessExecutor<R>,
}

impl SwayClient {
    pub fn new(builder: CommandBuilder) -> Self {
        Self::with_executor(builder, ProcessExecutor::new())
    }
}

impl<R: CommandRunner> SwayClient<R> {
    pub fn with_executor(builder: CommandBuilder, executor: ProcessExecutor<R>) -> Self {
        Self { builder, executor }
    }

    pub fn builder(&self) -> &CommandBuilder {
        &self.builder
    }

    pub fn executor(&self) -> &ProcessExecutor<R> {
        &self.executor
    }

    pub fn get_outputs(&self) -> Result<Vec<SwayOutput>> {
        let output = self.executor.execute(self.builder.build_get_outputs_command()?)?;
        let outputs = parse_outputs(&output.stdout)?;

        log::debug!(
            "sway reports outputs: {:?}",
            outputs.iter().map(|o| o.name.as_str()).collect::<Vec<_>>()
        );
        Ok(outputs)
    }

    /// Every output except `laptop_output`, in the order sway reports them.
    pub fn list_external_outputs(&self, laptop_output: &str) -> Result<Vec<SwayOutput>> {
        Ok(self
            .get_outputs()?
            .into_iter()
            .filter(|output| output.name != laptop_output)
            .collect())
    }

    pub fn apply_layout(&self, display: &DisplayLayout, layout: &OutputLayout) -> Result<()> {
        self.executor.execute(self.builder.build_output_command(display, layout)?)?;
        Ok(())
    }
}
