use clap::{Parser, ValueEnum};
use sway_display_common::error::ModeError;
use sway_display_common::{DisplayError, DisplaySwitcher, ErrorReporting, SwayClient};
use sway_display_config::Config;

#[derive(Parser)]
#[command(name = "sway-display")]
#[command(about = "sway-display (toggle laptop/external monitor arrangement)")]
#[command(version)]
struct Cli {
    /// What to do with the saved display mode
    #[arg(value_enum, default_value_t = Action::Apply)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Action {
    /// Re-apply the saved mode
    Apply,

    /// Switch to the next mode (mirror, extend, external, laptop) and apply it
    Cycle,

    /// List connected outputs other than the laptop panel
    Outputs,

    /// Show the saved mode and the output commands it maps to
    Status,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.action) {
        log::debug!("{:?}", e);
        eprintln!("{}", report(&e));
        std::process::exit(1);
    }
}

/// Diagnostic printed to stderr before exiting with status 1.
fn report(e: &anyhow::Error) -> String {
    match e.downcast_ref::<DisplayError>() {
        Some(DisplayError::Mode(ModeError::Unknown { token })) => format!("Unknown mode: {}", token),
        Some(err) => format!("Error: {}", err.user_friendly_message()),
        None => format!("Error: {:#}", e),
    }
}

fn run(action: Action) -> anyhow::Result<()> {
    let config = Config::load()?;
    let display = config.display_layout()?;
    let store = config.mode_store()?;
    let switcher = DisplaySwitcher::new(store, display, SwayClient::new(config.command_builder()));

    match action {
        Action::Apply => {
            switcher.apply()?;
        }
        Action::Cycle => {
            let mode = switcher.cycle()?;
            log::debug!("Saved display mode {}", mode);
        }
        Action::Outputs => {
            let outputs = switcher.external_outputs()?;
            if outputs.is_empty() {
                println!("No external outputs found");
            }
            for output in outputs {
                let state = if output.active { "active" } else { "inactive" };
                match output.description() {
                    Some(description) => println!("{}: {} ({})", output.name, description, state),
                    None => println!("{} ({})", output.name, state),
                }
            }
        }
        Action::Status => print_status(&switcher)?,
    }

    Ok(())
}

fn print_status(switcher: &DisplaySwitcher) -> anyhow::Result<()> {
    let (mode, layout) = switcher.status()?;
    let display = switcher.display();

    println!("Mode: {}", mode);
    println!("State file: {}", switcher.store().path().display());
    println!("swaymsg: {}", switcher.sway().builder().program());
    println!("  {}: {}", display.laptop_output, layout.laptop);
    println!("  {}: {}", display.external_output, layout.external);
    Ok(())
}
