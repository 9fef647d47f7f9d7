//! Plain-text board renderer.
//!
//! Reads a grid and score and returns a `String`; it never touches session
//! state. Terminal setup (raw mode, cursor control) belongs to the host.

use crate::core::{face_value, ColorScheme, Grid, RandomSource};
use crate::game::Session;

const RESET: &str = "\x1b[m";

/// Draws a board as fixed-width text, optionally with ANSI colours.
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer {
    colored: bool,
    cell_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::plain()
    }
}

impl TextRenderer {
    /// Monochrome output, one text line per grid row.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            colored: false,
            cell_width: 7,
        }
    }

    /// Coloured output, three text lines per grid row.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            colored: true,
            cell_width: 7,
        }
    }

    /// Render a session's board and score.
    pub fn render_session<R: RandomSource>(&self, session: &Session<R>) -> String {
        self.render(session.grid(), session.current_score(), session.scheme())
    }

    /// Render a board with a score header.
    #[must_use]
    pub fn render(&self, grid: &Grid, score: u64, scheme: ColorScheme) -> String {
        let width = self.cell_width;
        let header_pad = (width * grid.size()).saturating_sub(9);
        let mut out = format!("2048 {score:>header_pad$} pts\n\n");

        for row in grid.rows() {
            if self.colored {
                out.push_str(&self.padding_line(row, scheme));
            }
            for &exponent in row {
                let label = match exponent {
                    0 => "·".to_string(),
                    _ => face_value(exponent).to_string(),
                };
                if self.colored {
                    out.push_str(&scheme.colors(exponent).ansi());
                }
                out.push_str(&format!("{label:^width$}"));
            }
            if self.colored {
                out.push_str(RESET);
            }
            out.push('\n');
            if self.colored {
                out.push_str(&self.padding_line(row, scheme));
            }
        }
        out
    }

    fn padding_line(&self, row: &[u8], scheme: ColorScheme) -> String {
        let mut line = String::new();
        for &exponent in row {
            line.push_str(&scheme.colors(exponent).ansi());
            line.push_str(&" ".repeat(self.cell_width));
        }
        line.push_str(RESET);
        line.push('\n');
        line
    }
}
