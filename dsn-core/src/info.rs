//! Credential-free component view.

use std::collections::BTreeMap;

use serde::Serialize;

/// DSN components with the password removed.
///
/// Only records whether a password was present. It can be safely
/// logged, displayed, or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInfo {
    /// Scheme, empty if absent
    pub scheme: String,
    /// User name, empty if absent
    pub user: String,
    /// Whether the DSN carried a non-empty password
    pub has_password: bool,
    /// Host without port
    pub host: String,
    /// Port as written, empty if absent
    pub port: String,
    /// Database name
    pub dbname: String,
    /// Query parameters, sorted by key
    pub parameters: BTreeMap<String, String>,
}
