//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use crate::errors::NocError;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = NocError::Custom("Test error message".to_string());
        assert_eq!(format!("{error}"), "Test error message");
    }

    #[test]
    fn test_config_error() {
        let error = NocError::ConfigError("GEMINI_API_KEY not found".to_string());
        assert!(matches!(error, NocError::ConfigError(_)));
        let display = format!("{error}");
        assert!(display.starts_with("Configuration error"));
        assert!(display.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_retrieval_error_keeps_cause_text() {
        let error = NocError::RetrievalError("DB Connection Failed".to_string());
        assert_eq!(format!("{error}"), "Retrieval error: DB Connection Failed");
    }

    #[test]
    fn test_llm_error() {
        let error = NocError::LlmError("quota exceeded".to_string());
        assert!(matches!(error, NocError::LlmError(_)));
        assert!(format!("{error}").contains("quota exceeded"));
    }

    #[test]
    fn test_manual_not_found_mentions_path() {
        let error = NocError::ManualNotFound(PathBuf::from("data/manuals/missing.md"));
        assert!(format!("{error}").contains("data/manuals/missing.md"));
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: NocError = io_err.into();
        assert!(matches!(err, NocError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: Result<serde_json::Value, _> = serde_json::from_str("{invalid json}");
        if let Err(json_err) = parse_result {
            let err: NocError = json_err.into();
            assert!(matches!(err, NocError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_from_toml() {
        let parse_result: Result<toml::Table, _> = toml::from_str("= broken");
        if let Err(toml_err) = parse_result {
            let err: NocError = toml_err.into();
            assert!(matches!(err, NocError::TomlParsing(_)));
        }
    }

    // ====== Error Debug/Display Tests ======

    #[test]
    fn test_error_debug_format() {
        let error = NocError::Custom("Debug test".to_string());
        assert!(format!("{error:?}").contains("Custom"));
    }
}
