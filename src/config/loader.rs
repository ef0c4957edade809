//! Configuration resolution from disk and environment.
//!
//! # Responsibilities
//! - Start from the fixed defaults
//! - Overlay an optional local `bootstrap.toml`
//! - Apply `HOST` / `PORT` environment overrides (the platform-injected values)
//! - Reject malformed values before any bind attempt
//!
//! # Design Decisions
//! - Environment wins over file, file wins over defaults
//! - A present-but-invalid override is a hard error, not a fallback: the
//!   supervisor must see the deployment fail rather than bind the wrong port
//! - A missing config file is not an error; the defaults are a complete config

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::BindConfig;

/// Well-known local override file, read from the working directory if present.
pub const CONFIG_FILE: &str = "bootstrap.toml";

/// Errors that can occur while resolving the bind configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for the schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A PORT override is present but not a port number.
    #[error("invalid PORT override {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    /// A host value is present but not a parseable interface address.
    #[error("invalid host address {value:?}")]
    InvalidHost { value: String },
}

/// Resolve the bind configuration the process will launch with.
pub fn resolve() -> Result<BindConfig, ConfigError> {
    resolve_with(Path::new(CONFIG_FILE), |name| std::env::var(name).ok())
}

/// Resolution with an explicit file path and environment lookup.
///
/// The seam exists so tests can exercise every precedence and failure path
/// without touching the process environment.
pub fn resolve_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<BindConfig, ConfigError> {
    let mut config = if path.exists() {
        load_file(path)?
    } else {
        BindConfig::default()
    };

    if let Some(host) = env("HOST") {
        // Validate eagerly so the error names the override, not the bind call.
        host.parse::<std::net::IpAddr>()
            .map_err(|_| ConfigError::InvalidHost {
                value: host.clone(),
            })?;
        config.host = host;
    }

    if let Some(port) = env("PORT") {
        config.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { value: port })?;
    }

    // A file-supplied host gets the same scrutiny as an env-supplied one.
    config.socket_addr()?;

    Ok(config)
}

fn load_file(path: &Path) -> Result<BindConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn no_file() -> PathBuf {
        PathBuf::from("definitely-missing-bootstrap.toml")
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_nothing_is_supplied() {
        let config = resolve_with(&no_file(), no_env).unwrap();
        assert_eq!(config, BindConfig::default());
    }

    #[test]
    fn port_override_applies() {
        let config = resolve_with(&no_file(), |name| {
            (name == "PORT").then(|| "8080".to_string())
        })
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn host_override_applies() {
        let config = resolve_with(&no_file(), |name| {
            (name == "HOST").then(|| "127.0.0.1".to_string())
        })
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 10000);
    }

    #[test]
    fn non_numeric_port_fails_fast() {
        let result = resolve_with(&no_file(), |name| {
            (name == "PORT").then(|| "web".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }

    #[test]
    fn out_of_range_port_fails_fast() {
        let result = resolve_with(&no_file(), |name| {
            (name == "PORT").then(|| "70000".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }

    #[test]
    fn unparseable_host_fails_fast() {
        let result = resolve_with(&no_file(), |name| {
            (name == "HOST").then(|| "0.0.0.0:10000".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidHost { .. })));
    }

    #[test]
    fn file_overlay_then_env_wins() {
        let path = std::env::temp_dir().join("appboot-loader-test.toml");
        fs::write(&path, "host = \"127.0.0.1\"\nport = 9000\n").unwrap();

        let from_file = resolve_with(&path, no_env).unwrap();
        assert_eq!(from_file.host, "127.0.0.1");
        assert_eq!(from_file.port, 9000);

        let with_env = resolve_with(&path, |name| {
            (name == "PORT").then(|| "9100".to_string())
        })
        .unwrap();
        assert_eq!(with_env.port, 9100, "environment beats the file");
        assert_eq!(with_env.host, "127.0.0.1");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_is_rejected() {
        let path = std::env::temp_dir().join("appboot-loader-bad.toml");
        fs::write(&path, "port = \"not a port\"").unwrap();

        let result = resolve_with(&path, no_env);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        fs::remove_file(&path).ok();
    }
}
