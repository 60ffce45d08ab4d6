//! CLI formatting utilities.

mod output;
mod status;

pub use output::{print_key_value, print_library_list};
pub use status::{print_success, print_warning};
