//! Command layer of the dsn tool.
//!
//! Wires the `dsn` binary's flags to [`dsn_core::Dsn`]:
//! - `dsn get <field>` prints one field
//! - `dsn setenv` prints `export` statements for a shell to evaluate
//! - `dsn inspect` prints the password-free fields as JSON

pub mod cli;
pub mod env;

pub use cli::{Cli, Command, Field, execute, legacy_args};
