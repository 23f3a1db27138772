//! Data source name extraction tool.
//!
//! Prints individual fields of a data source name, or shell `export`
//! statements for all of them. Values go to stdout; logs and errors go to
//! stderr so the output can be captured by a shell.

use clap::Parser;
use dsn::{Cli, execute, legacy_args};
use dsn_core::init_logging;

fn main() {
    let cli = Cli::parse_from(legacy_args(std::env::args_os()));

    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    match execute(&cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}
