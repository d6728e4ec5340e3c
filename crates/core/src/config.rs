//! Configuration for the company directory service.
//!
//! The config TOML supplies the database connection parameters the original
//! deployment hard-coded, plus the HTTP listen port for `compdir serve`.
//!
//! # Example
//!
//! ```toml
//! [database]
//! host = "localhost"
//! port = 3306
//! user = "root"
//! password = ""
//! database = "compdb"
//! connect_timeout_secs = 10
//! query_timeout_secs = 30
//!
//! [server]
//! port = 8080
//! ```
//!
//! The password may also come from the `COMPDIR_DB_PASSWORD` environment
//! variable, which takes precedence over the file so the secret can stay
//! out of the config entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Environment variable that overrides `database.password`.
pub const PASSWORD_ENV_VAR: &str = "COMPDIR_DB_PASSWORD";

// ── Types ─────────────────────────────────────────────────────────────────────

/// Top-level configuration, loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[database]` section — connection parameters for the `company` table's host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    pub user: String,
    /// May be left empty in the file and supplied via `COMPDIR_DB_PASSWORD`.
    #[serde(default)]
    pub password: String,
    /// Schema name containing the `company` table.
    pub database: String,
    /// Timeout for opening the connection, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Timeout for the fetch itself, in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,
}

/// `[server]` section — settings for `compdir serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_http_port(),
        }
    }
}

fn default_db_port() -> u16 {
    3306
}

fn default_http_port() -> u16 {
    8080
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_query_timeout() -> u64 {
    30
}

// ── Functions ─────────────────────────────────────────────────────────────────

/// Read and parse a config TOML file from `path`, then apply environment
/// overrides from the process environment.
pub fn read_config(path: &Path) -> Result<DirectoryConfig, DirectoryError> {
    let content = std::fs::read_to_string(path).map_err(|e| DirectoryError::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut config: DirectoryConfig =
        toml::from_str(&content).map_err(|e| DirectoryError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Apply environment-variable overrides using the given lookup.
///
/// Only `COMPDIR_DB_PASSWORD` is honored; an empty value is ignored.
pub fn apply_env_overrides(
    config: &mut DirectoryConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(password) = lookup(PASSWORD_ENV_VAR).filter(|p| !p.is_empty()) {
        config.database.password = password;
    }
}

/// Generate a skeleton config TOML for the user to fill in.
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str("[database]\n");
    out.push_str("host = \"localhost\"\n");
    out.push_str("port = 3306\n");
    out.push_str("user = \"root\"\n");
    out.push_str(&format!(
        "password = \"\"  # Or set the {} environment variable\n",
        PASSWORD_ENV_VAR
    ));
    out.push_str("database = \"compdb\"\n");
    out.push_str("connect_timeout_secs = 10\n");
    out.push_str("query_timeout_secs = 30\n");
    out.push('\n');

    out.push_str("[server]\n");
    out.push_str("port = 8080\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_TOML: &str = r#"
[database]
host = "db.internal"
user = "reader"
database = "compdb"
"#;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: DirectoryConfig = toml::from_str(MINIMAL_TOML).expect("parse config");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.connect_timeout_secs, 10);
        assert_eq!(config.database.query_timeout_secs, 30);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[database]
host = "127.0.0.1"
port = 3307
user = "web"
password = "hunter2"
database = "compdb"
connect_timeout_secs = 5
query_timeout_secs = 15

[server]
port = 9090
"#;
        let config: DirectoryConfig = toml::from_str(toml_content).expect("parse config");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.database.query_timeout_secs, 15);
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_env_override_replaces_password() {
        let mut config: DirectoryConfig = toml::from_str(MINIMAL_TOML).expect("parse config");
        apply_env_overrides(&mut config, |name| {
            (name == PASSWORD_ENV_VAR).then(|| "from-env".to_string())
        });
        assert_eq!(config.database.password, "from-env");
    }

    #[test]
    fn test_empty_env_override_is_ignored() {
        let mut config: DirectoryConfig = toml::from_str(MINIMAL_TOML).expect("parse config");
        config.database.password = "from-file".to_string();
        apply_env_overrides(&mut config, |_| Some(String::new()));
        assert_eq!(config.database.password, "from-file");
    }

    #[test]
    fn test_read_config_missing_file() {
        let err = read_config(Path::new("/nonexistent/compdir.toml")).unwrap_err();
        assert!(err.to_string().contains("could not read config"));
    }

    #[test]
    fn test_read_config_from_file() {
        let tmp = tempfile::NamedTempFile::new().expect("temp file");
        tmp.as_file()
            .write_all(MINIMAL_TOML.as_bytes())
            .expect("write config");

        let config = read_config(tmp.path()).expect("read config");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.user, "reader");
    }

    #[test]
    fn test_template_parses_back() {
        let tmpl = generate_config_template();
        let config: DirectoryConfig = toml::from_str(&tmpl).expect("template must be valid TOML");
        assert_eq!(config.database.database, "compdb");
        assert_eq!(config.server.port, 8080);
    }
}
