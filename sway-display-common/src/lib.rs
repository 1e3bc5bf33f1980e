pub mod mode;
pub mod state;
pub mod command_builder;
pub mod executor;
pub mod sway;
pub mod switcher;
pub mod error;

pub use mode::{Mode, Directive, Resolution, OutputLayout, DisplayLayout};
pub use state::ModeStore;
pub use command_builder::CommandBuilder;
pub use executor::{CommandRunner, ProcessExecutor, SystemRunner};
pub use sway::{SwayClient, SwayOutput};
pub use switcher::DisplaySwitcher;
pub use error::{DisplayError, Result, ErrorReporting};
