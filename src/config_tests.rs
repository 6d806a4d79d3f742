//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, overrides and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::*;
    use crate::NocError;

    const MINIMAL_TOML: &str = r#"
[database]
url = "postgresql://localhost/noc"
max_connections = 4
min_connections = 1
connection_timeout = 10

[embeddings]
provider = "gemini"
endpoint = "https://generativelanguage.googleapis.com/v1beta"
model = "text-embedding-004"
dimension = 768

[llm]
provider = "gemini"
endpoint = "https://generativelanguage.googleapis.com/v1beta"
"#;

    fn config_with_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("test-key".to_string());
        config.embeddings.api_key = Some("test-key".to_string());
        config
    }

    // ====== Parsing & Default Value Tests ======

    #[test]
    fn test_minimal_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_TOML.as_bytes()).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.retrieval.fan_out, 10);
        assert_eq!(config.retrieval.top_n, 3);
        assert_eq!(config.embeddings.batch_size, 50);
        assert_eq!(config.llm.model, "gemini-2.0-flash-lite");
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.manual_path(),
            std::path::Path::new("data/manuals/orbit_5g_guide.md")
        );
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_provider_names_parse() {
        let toml = MINIMAL_TOML.replace(
            "[llm]\nprovider = \"gemini\"",
            "[llm]\nprovider = \"ollama\"",
        );
        let config: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.llm.provider, ProviderKind::Ollama);

        let toml = MINIMAL_TOML.replace(
            "[llm]\nprovider = \"gemini\"",
            "[llm]\nprovider = \"openai\"",
        );
        let config: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.llm.provider, ProviderKind::OpenAI);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::from_file("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(NocError::Io(_))));
    }

    // ====== Environment Override Tests ======

    #[test]
    fn test_gemini_key_filled_from_env() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == GEMINI_API_KEY_ENV).then(|| "env-key".to_string())
        });
        assert_eq!(config.llm.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.embeddings.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_explicit_key_not_overridden() {
        let mut config = config_with_key();
        config.apply_env_overrides(|_| Some("env-key".to_string()));
        assert_eq!(config.llm.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_database_url_override() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == DATABASE_URL_ENV).then(|| "postgresql://db/other".to_string())
        });
        assert_eq!(config.database_url(), "postgresql://db/other");
    }

    // ====== Validation Tests ======

    #[test]
    fn test_missing_api_key_is_fatal() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NocError::ConfigError(_)));
        assert!(err.to_string().contains(GEMINI_API_KEY_ENV));
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let mut config = AppConfig::default();
        config.llm.provider = ProviderKind::Ollama;
        config.llm.endpoint = "http://localhost:11434".to_string();
        config.embeddings.provider = ProviderKind::Ollama;
        config.embeddings.endpoint = "http://localhost:11434".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config = config_with_key();
        config.llm.endpoint = "not a url".to_string();
        assert!(matches!(config.validate(), Err(NocError::ConfigError(_))));
    }

    #[test]
    fn test_zero_fan_out_rejected() {
        let mut config = config_with_key();
        config.retrieval.fan_out = 0;
        assert!(matches!(config.validate(), Err(NocError::ConfigError(_))));
    }

    #[test]
    fn test_valid_default_with_key() {
        assert!(config_with_key().validate().is_ok());
    }

    // ====== Display Helpers ======

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(None), "<unset>");
        assert_eq!(mask_secret(Some("  ")), "<unset>");
        assert_eq!(mask_secret(Some("AIzaSyExample")), "AIza****");
    }
}
