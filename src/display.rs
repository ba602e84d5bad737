//! Terminal output for readings.
//!
//! Steady-state readings rewrite a single line with a carriage return; the
//! final reading gets a newline so the shell prompt lands below it. Every
//! write is flushed immediately, otherwise the value would sit in the
//! stdout buffer for a whole poll interval.

use std::io::{self, Write};

/// Render a reading the way it appears on screen.
fn format_reading(celsius: f64) -> String {
    format!("Temperature: {}", celsius)
}

/// Overwrite the current terminal line with the latest reading.
pub fn print_reading(out: &mut impl Write, celsius: f64) -> io::Result<()> {
    write!(out, "{}\r", format_reading(celsius))?;
    out.flush()
}

/// Print the reading on its own line. Used once, on interrupt.
pub fn print_final(out: &mut impl Write, celsius: f64) -> io::Result<()> {
    writeln!(out, "{}", format_reading(celsius))?;
    out.flush()
}
