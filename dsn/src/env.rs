//! Shell export generation for `dsn setenv`.

use dsn_core::Dsn;

/// Builds one `export` statement.
///
/// The value is not quoted; a value containing spaces or shell
/// metacharacters needs quoting by the caller.
pub fn export_line(prefix: &str, name: &str, value: &str) -> String {
    format!("export {prefix}{name}={value}")
}

/// Export statements for every field, in a fixed order: scheme, dbname,
/// host, port, user, password.
///
/// `default_port` is used when the DSN has no port.
pub fn export_lines(dsn: &Dsn, prefix: &str, default_port: &str) -> Vec<String> {
    [
        ("SCHEME", dsn.scheme()),
        ("DBNAME", dsn.dbname()),
        ("HOST", dsn.host()),
        ("PORT", dsn.port(default_port)),
        ("USER", dsn.user()),
        ("PASSWORD", dsn.password()),
    ]
    .into_iter()
    .map(|(name, value)| export_line(prefix, name, value))
    .collect()
}
