//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::constants::{DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS};
use crate::error::ConfigError;

#[derive(Debug, Parser)]
#[command(
    name = "biblioteca",
    version,
    about = "A terminal front-end for a library catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Base URL of the catalog backend.
    #[arg(long, env = "BIBLIOTECA_API_URL", value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "BIBLIOTECA_TIMEOUT", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log file path.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log filter (e.g. `info`, `biblioteca_tui=debug`).
    #[arg(long, env = "BIBLIOTECA_LOG", value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    pub timeout: Duration,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(AppConfig {
            api_url: parse_api_url(&args.api_url)?,
            timeout: Duration::from_secs(args.timeout),
            log_file: args.log_file,
            log_level: args.log_level,
        })
    }
}

/// Parse a backend base URL, ensuring it ends with `/` so relative joins
/// keep any path prefix (`http://host/api` + `livros` → `/api/livros`).
pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("esquema '{}' não suportado", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["biblioteca"]).unwrap();
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.log_file, PathBuf::from("biblioteca.log"));
    }

    #[test]
    fn test_api_url_flag() {
        let args = CliArgs::try_parse_from([
            "biblioteca",
            "--api-url",
            "https://catalogo.example.com/api",
            "--timeout",
            "5",
        ])
        .unwrap();
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.api_url.as_str(), "https://catalogo.example.com/api/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(parse_api_url("localhost:3000").is_err());
        assert!(parse_api_url("ftp://example.com").is_err());
        assert!(parse_api_url("not a url").is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let args = CliArgs::try_parse_from(["biblioteca", "--timeout", "0"]).unwrap();
        assert!(matches!(
            AppConfig::from_args(args),
            Err(ConfigError::ZeroTimeout)
        ));
    }
}
