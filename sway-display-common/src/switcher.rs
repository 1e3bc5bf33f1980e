use crate::executor::{CommandRunner, SystemRunner};
use crate::mode::{DisplayLayout, Mode, OutputLayout};
use crate::state::ModeStore;
use crate::sway::{SwayClient, SwayOutput};
use crate::Result;

/// Reads the persisted mode, optionally advances it, and applies it to sway.
#[derive(Debug, Clone)]
pub struct DisplaySwitcher<R = SystemRunner> {
    store: ModeStore,
    display: DisplayLayout,
    sway: SwayClient<R>,
}

impl<R: CommandRunner> DisplaySwitcher<R> {
    pub fn new(store: ModeStore, display: DisplayLayout, sway: SwayClient<R>) -> Self {
        Self { store, display, sway }
    }

    pub fn store(&self) -> &ModeStore {
        &self.store
    }

    pub fn display(&self) -> &DisplayLayout {
        &self.display
    }

    pub fn sway(&self) -> &SwayClient<R> {
        &self.sway
    }

    /// Persisted mode, `mirror` when nothing has been stored yet.
    pub fn current_mode(&self) -> Result<Mode> {
        let token = self.store.read_mode(Mode::default())?;
        Ok(token.parse::<Mode>()?)
    }

    /// Applies the persisted mode without changing it.
    pub fn apply(&self) -> Result<Mode> {
        let mode = self.current_mode()?;
        self.apply_mode(mode)?;
        Ok(mode)
    }

    /// Advances to the next mode in cycle order, saves it, then applies it.
    pub fn cycle(&self) -> Result<Mode> {
        let current = self.current_mode()?;
        let next = current.next();

        log::debug!("Cycling display mode {} -> {}", current, next);
        self.store.write_mode(next)?;
        self.apply_mode(next)?;
        Ok(next)
    }

    pub fn status(&self) -> Result<(Mode, OutputLayout)> {
        let mode = self.current_mode()?;
        Ok((mode, mode.layout(&self.display)))
    }

    pub fn external_outputs(&self) -> Result<Vec<SwayOutput>> {
        self.sway.list_external_outputs(&self.display.laptop_output)
    }

    fn apply_mode(&self, mode: Mode) -> Result<()> {
        let layout = mode.layout(&self.display);
        self.sway.apply_layout(&self.display, &layout)?;
        log::info!("Applied display mode {}", mode);
        Ok(())
    }
}
