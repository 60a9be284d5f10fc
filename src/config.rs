use std::env;

use thiserror::Error;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_MODEL_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const DEFAULT_TEMPERATURE: f32 = 0.3;
const MAX_TEMPERATURE: f32 = 2.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please set your {var} environment variable.")]
    MissingApiKey { var: &'static str },
}

#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub model_base_url: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub model_timeout_secs: Option<u64>,
}

// Hand-written so the credential never reaches a log line.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("model_base_url", &self.model_base_url)
            .field("system_prompt", &self.system_prompt)
            .field("temperature", &self.temperature)
            .field("model_timeout_secs", &self.model_timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub fn from_env_with(
        mut get_var: impl FnMut(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = parse_api_key(get_var(API_KEY_VAR).as_deref())?;

        Ok(Self {
            api_key,
            model: non_blank(get_var("MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            model_base_url: non_blank(get_var("MODEL_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_MODEL_BASE_URL.to_string()),
            system_prompt: get_var("SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            temperature: parse_temperature(get_var("MODEL_TEMPERATURE").as_deref()),
            model_timeout_secs: parse_timeout_secs(get_var("MODEL_TIMEOUT_SECS").as_deref()),
        })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_api_key(raw: Option<&str>) -> Result<String, ConfigError> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })
}

fn parse_temperature(raw: Option<&str>) -> f32 {
    raw.and_then(|value| value.trim().parse::<f32>().ok())
        .filter(|value| value.is_finite() && (0.0..=MAX_TEMPERATURE).contains(value))
        .unwrap_or(DEFAULT_TEMPERATURE)
}

fn parse_timeout_secs(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{
        API_KEY_VAR, Config, ConfigError, DEFAULT_MODEL, DEFAULT_MODEL_BASE_URL,
        DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE, parse_api_key, parse_temperature,
        parse_timeout_secs,
    };

    fn config_from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Config::from_env_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn from_env_requires_api_key() {
        let err = config_from_pairs(&[("MODEL", "other")]).expect_err("key should be required");
        assert_eq!(err, ConfigError::MissingApiKey { var: API_KEY_VAR });
        assert_eq!(
            err.to_string(),
            "Please set your GEMINI_API_KEY environment variable."
        );
    }

    #[test]
    fn from_env_treats_blank_api_key_as_missing() {
        assert!(config_from_pairs(&[(API_KEY_VAR, "   ")]).is_err());
        assert!(parse_api_key(Some("")).is_err());
        assert!(parse_api_key(None).is_err());
    }

    #[test]
    fn from_env_uses_defaults_when_optional_vars_are_missing() {
        let cfg = config_from_pairs(&[(API_KEY_VAR, "secret")]).expect("config should load");
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.model_base_url, DEFAULT_MODEL_BASE_URL);
        assert_eq!(cfg.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(cfg.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(cfg.model_timeout_secs, None);
    }

    #[test]
    fn from_env_reads_configured_values() {
        let cfg = config_from_pairs(&[
            (API_KEY_VAR, " secret "),
            ("MODEL", "some-model"),
            ("MODEL_BASE_URL", "http://localhost:9999/v1"),
            ("SYSTEM_PROMPT", "Be concise."),
            ("MODEL_TEMPERATURE", "0.7"),
            ("MODEL_TIMEOUT_SECS", "15"),
        ])
        .expect("config should load");

        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.model, "some-model");
        assert_eq!(cfg.model_base_url, "http://localhost:9999/v1");
        assert_eq!(cfg.system_prompt, "Be concise.");
        assert_eq!(cfg.temperature, 0.7);
        assert_eq!(cfg.model_timeout_secs, Some(15));
    }

    #[test]
    fn from_env_ignores_blank_model_settings() {
        let cfg = config_from_pairs(&[(API_KEY_VAR, "k"), ("MODEL", " "), ("MODEL_BASE_URL", "")])
            .expect("config should load");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.model_base_url, DEFAULT_MODEL_BASE_URL);
    }

    #[test]
    fn parse_temperature_falls_back_for_invalid_values() {
        assert_eq!(parse_temperature(None), DEFAULT_TEMPERATURE);
        assert_eq!(parse_temperature(Some("warm")), DEFAULT_TEMPERATURE);
        assert_eq!(parse_temperature(Some("-0.1")), DEFAULT_TEMPERATURE);
        assert_eq!(parse_temperature(Some("2.5")), DEFAULT_TEMPERATURE);
        assert_eq!(parse_temperature(Some("NaN")), DEFAULT_TEMPERATURE);
        assert_eq!(parse_temperature(Some(" 0 ")), 0.0);
        assert_eq!(parse_temperature(Some("2")), 2.0);
    }

    #[test]
    fn parse_timeout_secs_ignores_missing_or_invalid_values() {
        assert_eq!(parse_timeout_secs(None), None);
        assert_eq!(parse_timeout_secs(Some("")), None);
        assert_eq!(parse_timeout_secs(Some("0")), None);
        assert_eq!(parse_timeout_secs(Some("soon")), None);
        assert_eq!(parse_timeout_secs(Some("  90  ")), Some(90));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = config_from_pairs(&[(API_KEY_VAR, "top-secret")]).expect("config should load");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("top-secret"), "leaked key: {rendered}");
        assert!(rendered.contains("<redacted>"));
    }
}
