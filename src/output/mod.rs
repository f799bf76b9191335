//! Output module for console output and prompts.
//!
//! Provides:
//! - Colored console output
//! - Interactive confirmation
//! - Statistics reporting

pub mod console;
pub mod prompt;
pub mod stats;

pub use console::{
    print_banner, print_converting, print_error, print_info, print_success, print_warning,
};
pub use prompt::{AutoConfirm, ConfirmPrompt, ConsolePrompt};
pub use stats::print_convert_stats;
