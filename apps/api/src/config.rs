use anyhow::{Context, Result};

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing — in particular the
/// text-generation API key is required rather than silently defaulted.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub github_api_base: String,
    pub font_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            github_api_base: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_BASE.to_string()),
            font_path: std::env::var("FONT_PATH").unwrap_or_else(|_| DEFAULT_FONT_PATH.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
