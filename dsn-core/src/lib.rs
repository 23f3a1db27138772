//! Core data structures and utilities for the dsn tool.
//!
//! This crate parses database connection strings ("DSNs") of the form
//! `<scheme>://<user>:<password>@<host>:<port>/<dbname>?<parameters>` into
//! a [`Dsn`] value with typed accessors, and renders them back as a
//! password-redacted string or a PostgreSQL keyword/value connection
//! string.
//!
//! # Credential handling
//! - Passwords are wiped from memory when a [`Dsn`] is dropped
//! - `Debug` output and [`Dsn::redacted`] mask the password
//! - Error messages never include the input string
//!
//! Parsing is synchronous and performs no I/O.

pub mod dsn;
pub mod error;
pub mod info;
pub mod logging;

// Re-export commonly used types
pub use dsn::{DEFAULT_POSTGRES_PORT, Dsn, PASSWORD_MASK, redact_dsn};
pub use error::{DsnError, Result};
pub use info::ConnectionInfo;
pub use logging::init_logging;
