use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::env;

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_OUTPUT_TOKENS: i32 = 1024;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub common: CommonConfig,
    pub google: GoogleConfig,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
    pub model: String,
}

/// Sampling settings forwarded to the model on every request.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_output_tokens: i32,
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let common = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ServiceConfig {
            common,
            google: GoogleConfig {
                // Empty in dev so the service boots without a key; the
                // provider rejects requests until one is configured.
                api_key: get_env("GEMINI_API_KEY", Some(""), is_prod)?,
                model: get_env("GEMINI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
            generation: GenerationSettings {
                temperature: get_env(
                    "TILE_GEN_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
                max_output_tokens: get_env(
                    "TILE_GEN_MAX_OUTPUT_TOKENS",
                    Some(&DEFAULT_MAX_OUTPUT_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
