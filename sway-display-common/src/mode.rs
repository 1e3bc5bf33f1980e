use std::fmt;
use std::str::FromStr;
use crate::error::ModeError;

pub const LAPTOP_OUTPUT: &str = "eDP-1";
pub const EXTERNAL_OUTPUT: &str = "DP-1";
pub const LAPTOP_WIDTH: u32 = 1920;

/// Display arrangement applied to the laptop panel and the external monitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Mirror,
    Extend,
    External,
    Laptop,
}

impl Mode {
    /// Order used by `cycle`, wrapping from the last entry back to the first.
    pub const CYCLE: [Mode; 4] = [Mode::Mirror, Mode::Extend, Mode::External, Mode::Laptop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mirror => "mirror",
            Mode::Extend => "extend",
            Mode::External => "external",
            Mode::Laptop => "laptop",
        }
    }

    pub fn next(self) -> Mode {
        let index = Self::CYCLE
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    /// Directives for both outputs in this mode.
    pub fn layout(&self, display: &DisplayLayout) -> OutputLayout {
        let origin = Directive::enable(display.resolution, 0, 0);

        let (laptop, external) = match self {
            Mode::Mirror => (origin, origin),
            Mode::Extend => (
                origin,
                Directive::enable(display.resolution, display.laptop_width, 0),
            ),
            Mode::External => (Directive::Disable, origin),
            Mode::Laptop => (origin, Directive::Disable),
        };

        OutputLayout { laptop, external }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .ok_or_else(|| ModeError::Unknown {
                token: token.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    // Accepts "1920x1080"; both dimensions must be positive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .trim()
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", value))?;

        let width: u32 = width
            .parse()
            .map_err(|_| format!("invalid width in {:?}", value))?;
        let height: u32 = height
            .parse()
            .map_err(|_| format!("invalid height in {:?}", value))?;

        if width == 0 || height == 0 {
            return Err(format!("resolution must be non-zero, got {:?}", value));
        }

        Ok(Self::new(width, height))
    }
}

/// A single sway `output` configuration fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Enable { resolution: Resolution, x: u32, y: u32 },
    Disable,
}

impl Directive {
    pub fn enable(resolution: Resolution, x: u32, y: u32) -> Self {
        Directive::Enable { resolution, x, y }
    }

    pub fn is_disable(&self) -> bool {
        matches!(self, Directive::Disable)
    }

    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Directive::Enable { x, y, .. } => Some((*x, *y)),
            Directive::Disable => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Enable { resolution, x, y } => {
                write!(f, "enable mode {} position {} {}", resolution, x, y)
            }
            Directive::Disable => f.write_str("disable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    pub laptop: Directive,
    pub external: Directive,
}

/// Fixed parameters of the two-output setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLayout {
    pub laptop_output: String,
    pub external_output: String,
    pub resolution: Resolution,
    pub laptop_width: u32,
}

impl DisplayLayout {
    /// The multi-line command passed to `swaymsg -q`.
    pub fn output_command(&self, layout: &OutputLayout) -> String {
        format!(
            "output {} {}\noutput {} {}\n",
            self.laptop_output, layout.laptop, self.external_output, layout.external
        )
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            laptop_output: LAPTOP_OUTPUT.to_string(),
            external_output: EXTERNAL_OUTPUT.to_string(),
            resolution: Resolution::default(),
            laptop_width: LAPTOP_WIDTH,
        }
    }
}
