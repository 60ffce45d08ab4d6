//! Demonstration application.

pub mod greeting;

use std::io::Write;

/// Writes the application's greeting line to `out`.
pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", greeting::hello())
}
