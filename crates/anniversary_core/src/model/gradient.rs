//! Decorative background gradients.
//!
//! # Responsibility
//! - Hold the light and dark palettes shown behind the day counter.
//! - Pick one gradient per scheme from a caller-supplied seed.
//!
//! # Invariants
//! - `pick_gradient` is pure: the same scheme and seed give the same gradient.
//! - The chosen gradient always belongs to the requested scheme's palette.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DIMMED: f32 = 0.6;

/// Appearance mode reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!(
                "unsupported color scheme `{other}`; expected light|dark"
            )),
        }
    }
}

/// Named system color used by the palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swatch {
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Pink,
    Gray,
    Black,
    White,
}

impl Swatch {
    /// sRGB components matching the platform's standard system colors.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 59, 48),
            Self::Orange => (255, 149, 0),
            Self::Yellow => (255, 204, 0),
            Self::Green => (52, 199, 89),
            Self::Teal => (48, 176, 199),
            Self::Cyan => (50, 173, 230),
            Self::Blue => (0, 122, 255),
            Self::Indigo => (88, 86, 214),
            Self::Purple => (175, 82, 222),
            Self::Pink => (255, 45, 85),
            Self::Gray => (142, 142, 147),
            Self::Black => (0, 0, 0),
            Self::White => (255, 255, 255),
        }
    }

    /// `#RRGGBB` form for hosts that take hex strings.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// One end of a vertical gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub swatch: Swatch,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
}

impl ColorStop {
    const fn solid(swatch: Swatch) -> Self {
        Self {
            swatch,
            opacity: 1.0,
        }
    }

    const fn dimmed(swatch: Swatch) -> Self {
        Self {
            swatch,
            opacity: DIMMED,
        }
    }
}

/// Top-to-bottom background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub top: ColorStop,
    pub bottom: ColorStop,
}

impl Gradient {
    const fn new(top: ColorStop, bottom: ColorStop) -> Self {
        Self { top, bottom }
    }
}

const LIGHT_PALETTE: &[Gradient] = &[
    Gradient::new(ColorStop::solid(Swatch::Red), ColorStop::solid(Swatch::Orange)),
    Gradient::new(ColorStop::solid(Swatch::Blue), ColorStop::solid(Swatch::Purple)),
    Gradient::new(ColorStop::solid(Swatch::Green), ColorStop::solid(Swatch::Yellow)),
    Gradient::new(ColorStop::solid(Swatch::Pink), ColorStop::solid(Swatch::Teal)),
    Gradient::new(ColorStop::solid(Swatch::Indigo), ColorStop::solid(Swatch::Cyan)),
];

const DARK_PALETTE: &[Gradient] = &[
    Gradient::new(ColorStop::solid(Swatch::Black), ColorStop::solid(Swatch::Gray)),
    Gradient::new(ColorStop::dimmed(Swatch::Blue), ColorStop::dimmed(Swatch::Purple)),
    Gradient::new(ColorStop::dimmed(Swatch::Green), ColorStop::dimmed(Swatch::Teal)),
    Gradient::new(ColorStop::dimmed(Swatch::Orange), ColorStop::dimmed(Swatch::Red)),
    Gradient::new(ColorStop::dimmed(Swatch::Indigo), ColorStop::solid(Swatch::Black)),
];

/// Returns every gradient available for `scheme`.
pub fn palette(scheme: ColorScheme) -> &'static [Gradient] {
    match scheme {
        ColorScheme::Light => LIGHT_PALETTE,
        ColorScheme::Dark => DARK_PALETTE,
    }
}

/// Picks a background gradient for `scheme` from `seed`.
pub fn pick_gradient(scheme: ColorScheme, seed: u64) -> Gradient {
    let choices = palette(scheme);
    let mut rng = StdRng::seed_from_u64(seed);
    choices[rng.random_range(0..choices.len())]
}
