use colored::Color;

use crate::domain::ports::StatusPainter;
use crate::domain::{Status, Tier};

/// Colors the status with ANSI escapes: green, cyan, yellow and red for
/// success, redirect, warning and error.
///
/// Always emits escapes; whether a terminal wants them is decided when the
/// painter is chosen (see `ColorMode`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl AnsiPainter {
    pub fn color(tier: Tier) -> Color {
        match tier {
            Tier::Success => Color::Green,
            Tier::Redirect => Color::Cyan,
            Tier::Warning => Color::Yellow,
            Tier::Error => Color::Red,
        }
    }
}

impl StatusPainter for AnsiPainter {
    fn paint(&self, status: Status, tier: Tier) -> String {
        format!(
            "\x1b[{}m{}\x1b[0m",
            Self::color(tier).to_fg_str(),
            status
        )
    }
}

/// Bare status, no annotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl StatusPainter for PlainPainter {
    fn paint(&self, status: Status, _tier: Tier) -> String {
        status.to_string()
    }
}

/// Status followed by its tier in brackets, e.g. `401[warning]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedPainter;

impl StatusPainter for TaggedPainter {
    fn paint(&self, status: Status, tier: Tier) -> String {
        format!("{}[{}]", status, tier)
    }
}
