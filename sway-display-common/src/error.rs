use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sway-display operations
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mode error: {0}")]
    Mode(#[from] ModeError),

    #[error("State persistence error: {0}")]
    State(#[from] StateError),

    #[error("Process execution error: {0}")]
    Process(#[from] ProcessError),

    #[error("swaymsg error: {0}")]
    Sway(#[from] SwayError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {path:?}")]
    FileRead { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse TOML configuration: {message}")]
    TomlParse { message: String },

    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Mode token errors
#[derive(Error, Debug)]
pub enum ModeError {
    #[error("Unknown mode: {token}")]
    Unknown { token: String },
}

/// State persistence errors
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read state file: {path:?}")]
    FileRead { path: PathBuf, source: std::io::Error },

    #[error("Failed to write state file: {path:?}")]
    FileWrite { path: PathBuf, source: std::io::Error },

    #[error("Could not determine cache directory (XDG_CACHE_HOME and home are unset)")]
    NoCacheDir,
}

/// Process execution errors
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Program not found in PATH: {program}")]
    NotFound { program: String },

    #[error("Command execution failed: {command:?}")]
    Execution { command: String, source: std::io::Error },

    #[error("Command returned non-zero exit code: {code}")]
    NonZeroExit { code: i32, stderr: String },
}

/// Errors decoding swaymsg replies
#[derive(Error, Debug)]
pub enum SwayError {
    #[error("Malformed get_outputs response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, DisplayError>;

// Error reporting utilities
pub trait ErrorReporting {
    fn user_friendly_message(&self) -> String;
}

impl ErrorReporting for DisplayError {
    fn user_friendly_message(&self) -> String {
        match self {
            DisplayError::Mode(ModeError::Unknown { token }) => {
                format!("Unknown mode: {}", token)
            }
            DisplayError::Process(ProcessError::NotFound { program }) => {
                format!("{} not found in PATH. Is sway installed?", program)
            }
            DisplayError::Process(ProcessError::NonZeroExit { code, stderr }) => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    format!("swaymsg exited with code {}", code)
                } else {
                    format!("swaymsg exited with code {}: {}", code, stderr)
                }
            }
            DisplayError::State(StateError::FileWrite { path, source }) => {
                format!("Failed to write state file {:?}: {}", path, source)
            }
            DisplayError::Config(ConfigError::TomlParse { message }) => {
                format!("Invalid configuration format: {}", message)
            }
            _ => self.to_string(),
        }
    }
}
