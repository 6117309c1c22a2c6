use std::path::PathBuf;

/// Page controller configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub api_url: String,
    pub preferences_path: PathBuf,
    /// Where the rendered page goes; stdout when unset.
    pub output_path: Option<PathBuf>,
    /// Stand-in for the OS `prefers-color-scheme: dark` media query.
    pub prefers_dark: bool,
    pub rust_log: String,
}

impl WebConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        WebConfig {
            api_url: lookup("API_URL").unwrap_or_else(|| "http://localhost:5000".to_string()),
            preferences_path: lookup("PREFERENCES_PATH")
                .unwrap_or_else(|| ".portfolio-prefs.json".to_string())
                .into(),
            output_path: lookup("OUTPUT_PATH").map(PathBuf::from),
            prefers_dark: lookup("PREFERS_DARK")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::from_lookup(|_| None);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.preferences_path, PathBuf::from(".portfolio-prefs.json"));
        assert!(config.output_path.is_none());
        assert!(!config.prefers_dark);
    }

    #[test]
    fn test_prefers_dark_flag() {
        let config = WebConfig::from_lookup(|key| match key {
            "PREFERS_DARK" => Some("True".to_string()),
            "OUTPUT_PATH" => Some("out/index.html".to_string()),
            _ => None,
        });
        assert!(config.prefers_dark);
        assert_eq!(config.output_path, Some(PathBuf::from("out/index.html")));
    }
}
