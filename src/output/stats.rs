//! Statistics reporting.

use console::style;

use crate::convert::ConvertState;

/// Print statistics for a conversion run.
pub fn print_convert_stats(state: &ConvertState) {
    println!();
    println!("{}", style("Conversion results:").bold());
    println!("  Scanned:   {} markdown files", state.scanned_count);
    println!("  Converted: {} files in-place", state.converted_count());
    if state.failed_count() > 0 {
        println!(
            "  Failed:    {}",
            style(state.failed_count()).red()
        );
    }
}
