//! Command-line definitions and command execution.
//!
//! Commands return the lines they want printed instead of writing to
//! stdout themselves; `main` does the printing.

use std::ffi::OsString;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use dsn_core::Dsn;
use tracing::debug;

use crate::env::export_lines;

/// Command-line interface for the dsn tool
#[derive(Debug, Parser)]
#[command(name = "dsn")]
#[command(about = "Tool to extract easily informations of a data source name")]
#[command(version)]
#[command(long_about = "
dsn - extract the components of a data source name

A data source name has the general form
  <scheme>://<user>:<password>@<host>:<port>/<dbname>?<parameters>
Every part is optional; a bare word such as `postgres` is read as a host.

EXAMPLES:
  dsn get host -d postgres://user:pass@db:5432/app
  dsn get port -p 5432 -d postgres://db/app
  dsn get redacted -d postgres://user:pass@db:5432/app
  eval \"$(dsn setenv --pr PG -d postgres://user:pass@db:5432/app)\"
")]
pub struct Cli {
    /// Logging flags shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one field of a data source name
    Get(GetArgs),
    /// Generate a shell script that exports every field as a variable
    Setenv(SetenvArgs),
    /// Print the fields (without the password) as JSON
    Inspect(InspectArgs),
}

/// Arguments of `dsn get`
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Data source name
    #[arg(
        short = 'd',
        long = "dsn",
        alias = "d",
        global = true,
        default_value = "",
        value_name = "DSN"
    )]
    pub dsn: String,

    /// Field to print
    #[command(subcommand)]
    pub field: Field,
}

/// Fields printable with `dsn get`
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Field {
    /// Get scheme of data source name
    Scheme,
    /// Get dbname of data source name
    Dbname,
    /// Get host of data source name
    Host,
    /// Get port of data source name
    Port {
        /// Default port to print in case of no port in data source name
        #[arg(
            short = 'p',
            long = "port",
            alias = "p",
            default_value = "",
            value_name = "DEFAULT"
        )]
        default: String,
    },
    /// Get user of data source name
    User,
    /// Get password of data source name
    Password,
    /// Get one query parameter of data source name
    Parameter {
        /// Parameter name
        name: String,
    },
    /// Get data source name with the password masked
    Redacted,
    /// Get PostgreSQL keyword/value connection string
    PostgresUri,
}

/// Arguments of `dsn setenv`
#[derive(Debug, Args)]
pub struct SetenvArgs {
    /// Data source name
    #[arg(
        short = 'd',
        long = "dsn",
        alias = "d",
        default_value = "",
        value_name = "DSN"
    )]
    pub dsn: String,

    /// Default port in case of no port in data source name
    #[arg(
        short = 'p',
        long = "port",
        alias = "p",
        default_value = "",
        value_name = "DEFAULT"
    )]
    pub default_port: String,

    /// Prefix for environment variable names
    #[arg(
        long = "pr",
        visible_alias = "prefix",
        default_value = "",
        value_name = "PREFIX"
    )]
    pub prefix: String,
}

/// Arguments of `dsn inspect`
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Data source name
    #[arg(
        short = 'd',
        long = "dsn",
        alias = "d",
        default_value = "",
        value_name = "DSN"
    )]
    pub dsn: String,
}

/// Verbosity flags
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress all log output except errors"
    )]
    pub quiet: bool,
}

/// Rewrites the single-dash `-pr` flag to `--pr`.
///
/// Scripts written for earlier releases pass `-pr PREFIX`, which clap would
/// otherwise read as `-p r`.
pub fn legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                (s == "-pr" || s.starts_with("-pr=")).then(|| OsString::from(format!("-{s}")))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// Runs a command and returns the lines to print.
///
/// # Errors
/// Fails when the data source name is empty or does not parse.
pub fn execute(command: &Command) -> anyhow::Result<Vec<String>> {
    match command {
        Command::Get(args) => {
            let dsn = load_dsn(&args.dsn)?;
            debug!(field = ?args.field, "printing field");
            Ok(vec![field_value(&dsn, &args.field)])
        }
        Command::Setenv(args) => {
            let dsn = load_dsn(&args.dsn)?;
            debug!(prefix = %args.prefix, "generating export statements");
            Ok(export_lines(&dsn, &args.prefix, &args.default_port))
        }
        Command::Inspect(args) => {
            let dsn = load_dsn(&args.dsn)?;
            let json = serde_json::to_string_pretty(&dsn.connection_info())
                .context("failed to serialize data source name fields")?;
            Ok(vec![json])
        }
    }
}

/// Parses the `-d` value, rejecting an empty one.
///
/// # Errors
/// Fails when `raw` is empty or is not a valid data source name.
pub fn load_dsn(raw: &str) -> anyhow::Result<Dsn> {
    if raw.is_empty() {
        bail!("data source name is empty");
    }
    Ok(Dsn::parse(raw)?)
}

/// Renders a single field of a parsed DSN.
pub fn field_value(dsn: &Dsn, field: &Field) -> String {
    match field {
        Field::Scheme => dsn.scheme().to_string(),
        Field::Dbname => dsn.dbname().to_string(),
        Field::Host => dsn.host().to_string(),
        Field::Port { default } => dsn.port(default).to_string(),
        Field::User => dsn.user().to_string(),
        Field::Password => dsn.password().to_string(),
        Field::Parameter { name } => dsn.parameter(name).to_string(),
        Field::Redacted => dsn.redacted(),
        Field::PostgresUri => dsn.postgres_uri(),
    }
}
