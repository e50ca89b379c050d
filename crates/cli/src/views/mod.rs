//! Terminal views.
//!
//! Every view writes to an [`std::io::Write`] so commands can target stdout and tests
//! can target a buffer.

use siniestros::claims::Tone;
use tabled::{
    Table,
    settings::{Color, Style, object::Rows},
};

pub(crate) mod claims;
pub(crate) mod dashboard;
pub(crate) mod documents;
pub(crate) mod session;

/// Rounded borders and a bold header row.
fn style(table: &mut Table) {
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Info => Some(Color::FG_BLUE),
        Tone::Warning => Some(Color::FG_YELLOW),
        Tone::Success => Some(Color::FG_GREEN),
        Tone::Error => Some(Color::FG_RED),
        Tone::Neutral => None,
    }
}

/// Colour one cell by tone.
fn paint(table: &mut Table, row: usize, column: usize, tone: Tone) {
    if let Some(color) = tone_color(tone) {
        table.modify((row, column), color);
    }
}
