use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const SERVICE_NAME: &str = "hr-odds-service";

#[derive(Debug, Clone, Deserialize)]
pub struct HrOddsConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub cors: CorsConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl HrOddsConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let mut common = core_config::Config::load()?;
        if let Ok(level) = env::var("LOG_LEVEL") {
            common.log_level = level;
        }

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let uri = match env::var("MONGO_URL").or_else(|_| env::var("MONGODB_URI")) {
            Ok(uri) => uri,
            Err(_) => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "MONGO_URL is required but not set"
                )))
            }
        };

        Ok(HrOddsConfig {
            common,
            mongodb: MongoConfig {
                uri,
                database: get_env("MONGODB_DATABASE", Some("home_run_data"), is_prod)?,
                collection: get_env("MONGODB_COLLECTION", Some("data"), is_prod)?,
                username: non_empty_env("MONGO_USERNAME"),
                password: non_empty_env("MONGO_PASSWORD").map(Secret::new),
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env("ALLOWED_ORIGINS", Some("*"), is_prod)?),
            },
            otlp_endpoint: non_empty_env("OTLP_ENDPOINT"),
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Split a comma-separated origin list. A `*` entry collapses the list to
/// "any origin".
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origin_means_any() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("http://localhost:3000, *").is_empty());
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:3000 ,, https://hr.example.com "),
            vec![
                "http://localhost:3000".to_string(),
                "https://hr.example.com".to_string()
            ]
        );
    }

    #[test]
    fn get_env_uses_default_outside_prod() {
        let value = get_env("HR_ODDS_TEST_SURELY_UNSET_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_rejects_missing_value_in_prod() {
        let err = get_env("HR_ODDS_TEST_SURELY_UNSET_KEY", Some("fallback"), true).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn get_env_without_default_is_an_error() {
        let err = get_env("HR_ODDS_TEST_SURELY_UNSET_KEY", None, false).unwrap_err();
        assert!(err.to_string().contains("HR_ODDS_TEST_SURELY_UNSET_KEY"));
    }
}
