use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub page_size: u32,
    pub output_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            output_path: "outputs/momo_data.json".to_string(),
        }
    }
}

/// Loads `config.json` when present; a missing file means defaults, a
/// malformed one is an error.
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does-not-exist.json").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.output_path, "outputs/momo_data.json");
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"page_size": 50}"#).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.output_path, "outputs/momo_data.json");
    }
}
