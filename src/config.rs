// src/config.rs

use crate::services::ReportService;
use anyhow::Context;
use std::{env, str::FromStr};

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    // Limite de linhas por requisição
    pub max_rows: usize,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("REPORTS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_setting("REPORTS_PORT", env::var("REPORTS_PORT").ok(), 3000)?,
            max_rows: parse_setting("REPORTS_MAX_ROWS", env::var("REPORTS_MAX_ROWS").ok(), 10_000)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_rows: 10_000,
        }
    }
}

// Variável ausente usa o padrão; presente mas inválida é erro de inicialização.
fn parse_setting<T>(name: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} inválida: '{value}'")),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub report_service: ReportService,
}

impl AppState {
    // Espera o .env já carregado pelo main
    pub fn new() -> anyhow::Result<Self> {
        let settings = Settings::from_env()?;
        tracing::info!("✅ Configuração carregada (limite de {} linhas por relatório)", settings.max_rows);

        Ok(Self::from_settings(settings))
    }

    pub fn from_settings(settings: Settings) -> Self {
        let report_service = ReportService::new(settings.max_rows);
        Self {
            settings,
            report_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_use_defaults() {
        assert_eq!(parse_setting::<u16>("REPORTS_PORT", None, 3000).unwrap(), 3000);
    }

    #[test]
    fn present_settings_are_parsed() {
        let port = parse_setting::<u16>("REPORTS_PORT", Some(" 8080 ".to_string()), 3000).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn malformed_settings_are_errors() {
        let err = parse_setting::<usize>("REPORTS_MAX_ROWS", Some("lots".to_string()), 10).unwrap_err();
        assert!(err.to_string().contains("REPORTS_MAX_ROWS"));
    }

    #[test]
    fn state_wires_row_limit_into_service() {
        let state = AppState::from_settings(Settings {
            max_rows: 42,
            ..Settings::default()
        });
        assert_eq!(state.report_service.max_rows(), 42);
        assert_eq!(state.settings.addr(), "0.0.0.0:3000");
    }
}
