//! Logseq Folders - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use logseq_folders::{
    cli::Args,
    convert::convert_with_confirmation,
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_convert_stats, print_error, print_info, print_success, print_warning,
        AutoConfirm, ConfirmPrompt, ConsolePrompt,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            print_error("Conversion failed!");
            match e {
                Error::DirectoryNotFound(_) => ExitCode::from(exit_codes::CONVERT_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    print_info(&format!(
        "Converting Logseq pages in: {}",
        args.directory.display()
    ));
    print_warning("This will move files in-place!");
    println!();

    let mut prompt: Box<dyn ConfirmPrompt> = if args.assume_yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(ConsolePrompt)
    };

    let state = match convert_with_confirmation(&args.directory, prompt.as_mut())? {
        Some(state) => state,
        None => {
            print_info("Cancelled.");
            return Ok(());
        }
    };

    print_convert_stats(&state);
    print_success("Conversion complete!");

    Ok(())
}
