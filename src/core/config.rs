use std::env;
use std::fmt;
use std::fs;
use std::str::FromStr;

use thiserror::Error;

use crate::ai::prompt::tutor_persona;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing API key. Set TUTOR_API_KEY or {0}")]
    MissingApiKey(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Unable to read system prompt file {path}: {source}")]
    PromptFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to render the tutor persona: {0}")]
    Prompt(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    fn default_hostname(&self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com",
            Provider::OpenAi => "https://api.openai.com",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.0-flash-exp",
            Provider::OpenAi => "gpt-4.1-mini",
        }
    }

    fn api_key_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            _ => Err(ConfigError::InvalidValue {
                name: "TUTOR_PROVIDER",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Provider::Gemini => write!(f, "gemini"),
            Provider::OpenAi => write!(f, "openai"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub provider: Provider,
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}

impl AppConfig {
    /// Reads the config from environment variables. Fails if no API
    /// key is set or the configured prompt file can't be read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = match env::var("TUTOR_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => Provider::Gemini,
        };
        let api_key = non_empty_var("TUTOR_API_KEY")
            .or_else(|| non_empty_var(provider.api_key_var()))
            .ok_or(ConfigError::MissingApiKey(provider.api_key_var()))?;
        let api_hostname =
            env::var("TUTOR_API_HOST").unwrap_or_else(|_| provider.default_hostname().to_string());
        let model =
            env::var("TUTOR_MODEL").unwrap_or_else(|_| provider.default_model().to_string());
        let system_prompt = match non_empty_var("TUTOR_SYSTEM_PROMPT_PATH") {
            Some(path) => load_prompt_file(&path)?,
            None => tutor_persona().map_err(|e| ConfigError::Prompt(e.to_string()))?,
        };

        tracing::debug!(%provider, %model, %api_hostname, "Loaded config");

        Ok(Self {
            provider,
            api_hostname,
            api_key,
            model,
            system_prompt,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn load_prompt_file(path: &str) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::PromptFile {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 7] = [
        "TUTOR_PROVIDER",
        "TUTOR_API_KEY",
        "TUTOR_API_HOST",
        "TUTOR_MODEL",
        "TUTOR_SYSTEM_PROMPT_PATH",
        "GEMINI_API_KEY",
        "OPENAI_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment run serially
            unsafe { env::remove_var(var) };
        }
    }

    fn set_env(name: &str, value: &str) {
        // SAFETY: tests touching the environment run serially
        unsafe { env::set_var(name, value) };
    }

    #[test]
    #[serial]
    fn test_missing_api_key() {
        clear_env();
        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey("GEMINI_API_KEY")));
    }

    #[test]
    #[serial]
    fn test_empty_api_key_is_missing() {
        clear_env();
        set_env("TUTOR_API_KEY", "  ");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingApiKey(_))
        ));
    }

    #[test]
    #[serial]
    fn test_gemini_defaults() {
        clear_env();
        set_env("TUTOR_API_KEY", "test-key");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.provider, Provider::Gemini);
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(
            config.api_hostname,
            "https://generativelanguage.googleapis.com"
        );
        assert!(config.system_prompt.contains("B2.2 Organelles and compartmentalization"));
    }

    #[test]
    #[serial]
    fn test_openai_with_provider_key() {
        clear_env();
        set_env("TUTOR_PROVIDER", "OpenAI");
        set_env("OPENAI_API_KEY", "sk-test");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4.1-mini");
        assert_eq!(config.api_hostname, "https://api.openai.com");
    }

    #[test]
    #[serial]
    fn test_invalid_provider() {
        clear_env();
        set_env("TUTOR_PROVIDER", "llama");
        set_env("TUTOR_API_KEY", "test-key");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "TUTOR_PROVIDER",
                ..
            }
        ));
    }

    #[test]
    #[serial]
    fn test_prompt_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "You are a chemistry tutor.").unwrap();
        set_env("TUTOR_API_KEY", "test-key");
        set_env("TUTOR_SYSTEM_PROMPT_PATH", file.path().to_str().unwrap());

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.system_prompt, "You are a chemistry tutor.");
    }

    #[test]
    #[serial]
    fn test_missing_prompt_file() {
        clear_env();
        set_env("TUTOR_API_KEY", "test-key");
        set_env("TUTOR_SYSTEM_PROMPT_PATH", "/nonexistent/prompt.txt");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PromptFile { .. }));
    }
}
