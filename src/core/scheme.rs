//! Tile colour schemes.
//!
//! The scheme is session state that renderers read; the game rules never
//! look at it.
//!
//! Each scheme is a 16-entry palette of 256-colour (background, foreground)
//! pairs indexed by tile exponent. Exponents past the end reuse the last
//! entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GameError;

const PALETTE_LEN: usize = 16;

type Palette = [[u8; 2]; PALETTE_LEN];

const ORIGINAL: Palette = [
    [8, 255], [1, 255], [2, 255], [3, 255], [4, 255], [5, 255], [6, 255], [7, 255],
    [9, 0], [10, 0], [11, 0], [12, 0], [13, 0], [14, 0], [255, 0], [255, 0],
];

const BLACK_WHITE: Palette = [
    [232, 255], [234, 255], [236, 255], [238, 255], [240, 255], [242, 255], [244, 255], [246, 0],
    [248, 0], [249, 0], [250, 0], [251, 0], [252, 0], [253, 0], [254, 0], [255, 0],
];

const BLUE_RED: Palette = [
    [235, 255], [63, 255], [57, 255], [93, 255], [129, 255], [165, 255], [201, 255], [200, 255],
    [199, 255], [198, 255], [197, 255], [196, 255], [196, 255], [196, 255], [196, 255], [196, 255],
];

/// Cosmetic display scheme. Has no effect on game rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Original,
    BlackWhite,
    BlueRed,
}

/// Foreground/background pair in the 256-colour palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileColors {
    pub foreground: u8,
    pub background: u8,
}

impl TileColors {
    /// ANSI escape that selects these colours.
    #[must_use]
    pub fn ansi(self) -> String {
        format!("\x1b[38;5;{};48;5;{}m", self.foreground, self.background)
    }
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::Original,
        ColorScheme::BlackWhite,
        ColorScheme::BlueRed,
    ];

    fn palette(self) -> &'static Palette {
        match self {
            ColorScheme::Original => &ORIGINAL,
            ColorScheme::BlackWhite => &BLACK_WHITE,
            ColorScheme::BlueRed => &BLUE_RED,
        }
    }

    /// Colours for a tile exponent (0 = empty cell).
    #[must_use]
    pub fn colors(self, exponent: u8) -> TileColors {
        let [background, foreground] = self.palette()[usize::from(exponent).min(PALETTE_LEN - 1)];
        TileColors {
            foreground,
            background,
        }
    }

    /// The following scheme, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ColorScheme::Original => ColorScheme::BlackWhite,
            ColorScheme::BlackWhite => ColorScheme::BlueRed,
            ColorScheme::BlueRed => ColorScheme::Original,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorScheme::Original => "original",
            ColorScheme::BlackWhite => "blackwhite",
            ColorScheme::BlueRed => "bluered",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| GameError::InvalidConfig(format!("unknown color scheme: {s}")))
    }
}
