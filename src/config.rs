use serde::{Deserialize, Serialize};
use anyhow::Result;
use std::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub base_id: String,
    pub api_key: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_id": "appTest123", "api_key": "keyTest456"}}"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_id, "appTest123");
        assert_eq!(config.api_key, "keyTest456");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Config::load("/nonexistent/airfetch.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Config::load(file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
