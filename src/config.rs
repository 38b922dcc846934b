use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Admin API
    pub api_base_url: String,
    pub api_token: Option<String>,

    // Translation provider (optional: auto-translate is disabled without a key)
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Admin API
            api_base_url: std::env::var("ADMIN_API_BASE_URL")
                .context("ADMIN_API_BASE_URL not set")?,
            api_token: std::env::var("ADMIN_API_TOKEN").ok(),

            // Translation provider
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
        })
    }
}
