//! General output formatting utilities.

use std::path::PathBuf;

use owo_colors::OwoColorize;

/// Prints a key-value pair with consistent formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {} {}", key.bright_black().bold(), value.bold().white());
}

/// Prints one library path per line.
pub fn print_library_list(libraries: &[PathBuf]) {
    if libraries.is_empty() {
        println!("  {} {}", "→".cyan(), "(no libraries)".bright_black());
        return;
    }

    for lib in libraries {
        println!("  {} {}", "→".cyan(), lib.display().bold().white());
    }
}
