use reqwest::Url;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Port the HTTP listener binds when `SERVER_PORT` is not set.
pub const DEFAULT_SERVER_PORT: u16 = 18888;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
    /// `TRANSPORT` named a transport this server does not provide.
    #[error(
        "Unsupported transport '{0}'. Only HTTP transport is supported. Please remove TRANSPORT or set TRANSPORT=http."
    )]
    UnsupportedTransport(String),
}

/// Runtime configuration for the MinerU MCP server.
///
/// Built once at process start and handed to the services by reference, so tests can
/// substitute endpoints without touching the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// MinerU endpoint that receives the multipart upload.
    pub mineru_url: Url,
    /// Transport the MCP server is exposed over.
    pub transport: Transport,
    /// Root directory for downloaded documents.
    pub temp_dir: PathBuf,
    /// Port the HTTP listener binds on all interfaces.
    pub server_port: u16,
}

/// Supported MCP transports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    /// Streamable HTTP served by axum.
    #[default]
    Http,
}

impl Transport {
    /// Lowercase name used in logs and in the `TRANSPORT` variable.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
        }
    }
}

impl std::str::FromStr for Transport {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            _ => Err(()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url =
            optional("MINERU_URL").ok_or_else(|| ConfigError::MissingVariable("MINERU_URL".into()))?;
        let mineru_url = Url::parse(raw_url.trim())
            .map_err(|_| ConfigError::InvalidValue("MINERU_URL".into()))?;

        let transport = match lookup("TRANSPORT") {
            Some(value) => value
                .parse::<Transport>()
                .map_err(|()| ConfigError::UnsupportedTransport(value))?,
            None => Transport::default(),
        };

        let temp_dir = optional("TMPDIR")
            .or_else(|| optional("TEMP"))
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        let server_port = optional("SERVER_PORT")
            .map(|value| {
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
            })
            .transpose()?
            .unwrap_or(DEFAULT_SERVER_PORT);

        Ok(Self {
            mineru_url,
            transport,
            temp_dir,
            server_port,
        })
    }
}

/// Load `.env` (when present) and build the configuration from the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    tracing::debug!(
        mineru_url = %config.mineru_url,
        transport = config.transport.as_str(),
        temp_dir = %config.temp_dir.display(),
        server_port = config.server_port,
        "Loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_mineru_url_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).expect_err("should fail");
        assert!(matches!(err, ConfigError::MissingVariable(ref key) if key == "MINERU_URL"));
    }

    #[test]
    fn blank_mineru_url_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("MINERU_URL", "   ")])).expect_err("should fail");
        assert!(matches!(err, ConfigError::MissingVariable(_)));
    }

    #[test]
    fn relative_mineru_url_is_rejected() {
        let err =
            Config::from_lookup(lookup(&[("MINERU_URL", "file_parse")])).expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "MINERU_URL"));
    }

    #[test]
    fn defaults_apply_when_optional_values_absent() {
        let config = Config::from_lookup(lookup(&[("MINERU_URL", "http://mineru:8000/file_parse")]))
            .expect("config");
        assert_eq!(config.mineru_url.as_str(), "http://mineru:8000/file_parse");
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.temp_dir, env::temp_dir());
    }

    #[test]
    fn transport_is_case_insensitive() {
        let config = Config::from_lookup(lookup(&[
            ("MINERU_URL", "http://mineru/file_parse"),
            ("TRANSPORT", "HTTP"),
        ]))
        .expect("config");
        assert_eq!(config.transport, Transport::Http);
    }

    #[test]
    fn non_http_transport_is_fatal() {
        let err = Config::from_lookup(lookup(&[
            ("MINERU_URL", "http://mineru/file_parse"),
            ("TRANSPORT", "stdio"),
        ]))
        .expect_err("should fail");
        assert!(matches!(err, ConfigError::UnsupportedTransport(ref value) if value == "stdio"));
        assert!(err.to_string().contains("Only HTTP transport is supported"));
    }

    #[test]
    fn blank_transport_is_fatal() {
        let err = Config::from_lookup(lookup(&[
            ("MINERU_URL", "http://mineru/file_parse"),
            ("TRANSPORT", ""),
        ]))
        .expect_err("should fail");
        assert!(matches!(err, ConfigError::UnsupportedTransport(ref value) if value.is_empty()));
    }

    #[test]
    fn tmpdir_takes_precedence_over_temp() {
        let config = Config::from_lookup(lookup(&[
            ("MINERU_URL", "http://mineru/file_parse"),
            ("TMPDIR", "/var/tmp/mineru"),
            ("TEMP", "/other"),
        ]))
        .expect("config");
        assert_eq!(config.temp_dir, PathBuf::from("/var/tmp/mineru"));

        let config = Config::from_lookup(lookup(&[
            ("MINERU_URL", "http://mineru/file_parse"),
            ("TEMP", "/other"),
        ]))
        .expect("config");
        assert_eq!(config.temp_dir, PathBuf::from("/other"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("MINERU_URL", "http://mineru/file_parse"),
            ("SERVER_PORT", "not-a-port"),
        ]))
        .expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "SERVER_PORT"));
    }
}
