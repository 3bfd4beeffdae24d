//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::models::contract::DEFAULT_EXPIRY_WINDOW_DAYS;
use crate::models::fmd_metrics::{DEFAULT_PERIOD_DAYS, MAX_PERIOD_DAYS, MIN_PERIOD_DAYS};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub default_period_days: i64,
    pub contract_expiry_window_days: i64,
    pub run_migrations: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "debug".to_string(),
            cors_origins: Vec::new(),
            default_period_days: DEFAULT_PERIOD_DAYS,
            contract_expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
            run_migrations: false,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            default_period_days: parse_var("DEFAULT_PERIOD_DAYS", defaults.default_period_days)?,
            contract_expiry_window_days: parse_var(
                "CONTRACT_EXPIRY_WINDOW_DAYS",
                defaults.contract_expiry_window_days,
            )?,
            run_migrations: parse_var("RUN_MIGRATIONS", defaults.run_migrations)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Rangos de los parámetros de negocio
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PERIOD_DAYS..=MAX_PERIOD_DAYS).contains(&self.default_period_days) {
            anyhow::bail!(
                "DEFAULT_PERIOD_DAYS must be between {} and {}, got {}",
                MIN_PERIOD_DAYS,
                MAX_PERIOD_DAYS,
                self.default_period_days
            );
        }
        if self.contract_expiry_window_days < 0 {
            anyhow::bail!(
                "CONTRACT_EXPIRY_WINDOW_DAYS must not be negative, got {}",
                self.contract_expiry_window_days
            );
        }
        Ok(())
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de tracing; valores desconocidos caen a INFO
    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.default_period_days, 30);
        assert_eq!(config.contract_expiry_window_days, 30);
        assert_eq!(config.environment, "development");
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_period_range() {
        let mut config = EnvironmentConfig::default();
        assert!(config.validate().is_ok());

        config.default_period_days = 3650;
        assert!(config.validate().is_ok());

        config.default_period_days = 3651;
        assert!(config.validate().is_err());

        config.default_period_days = 1_000_000_000_000;
        assert!(config.validate().is_err());

        config.default_period_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_expiry_window() {
        let mut config = EnvironmentConfig::default();
        config.contract_expiry_window_days = 0;
        assert!(config.validate().is_ok());

        config.contract_expiry_window_days = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_split_origins() {
        assert_eq!(
            split_origins("http://a.test, http://b.test,,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_tracing_level_fallback() {
        let mut config = EnvironmentConfig::default();
        config.log_level = "verbose".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
        config.log_level = "warn".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }
}
