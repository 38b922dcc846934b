//! OpenAI-backed translation provider.
//!
//! Backs the editor's auto-translate button with a chat-completions call. Any
//! other provider can be swapped in through the [`TranslationProvider`] trait;
//! this one is bundled because it is what the admin console ships with.

use crate::config::Config;
use crate::i18n::LanguageCatalog;
use crate::retry::{with_retry_if, RetryConfig};
use crate::translate::TranslationProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Chat-completions request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

const MAX_COMPLETION_TOKENS: u32 = 4000;

/// Build the system prompt for translation
fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    format!(
        r#"You are a professional translator for a blogging platform. Translate the given text from {} to {}.

## Translation Rules

### DO NOT translate:
- URLs and links
- Proper names of people, companies, and products
- Code snippets and inline code spans

### Formatting:
- Preserve all markdown and HTML formatting (bold, italic, headers, bullet points, tags)
- Preserve all emojis
- Maintain the same structure and layout as the original

### Output:
- Reply with the translation only, no quotes and no commentary
- Keep the same tone; if a term has no good translation, keep the original term"#,
        source_language, target_language
    )
}

/// Translation provider backed by the OpenAI chat-completions API.
///
/// Stateless apart from the HTTP client; one instance may be shared across
/// editing sessions.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    /// Maps language codes to display names for prompt construction.
    catalog: LanguageCatalog,
}

impl OpenAiTranslator {
    pub fn new(config: &Config, catalog: LanguageCatalog) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            catalog,
        }
    }

    /// Prefer the English display name in prompts; fall back to the raw code
    /// for languages the catalog does not know.
    fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.catalog
            .get(code)
            .map(|lang| lang.name.as_str())
            .unwrap_or(code)
    }
}

#[async_trait]
impl TranslationProvider for OpenAiTranslator {
    fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .context("translation provider has no API key configured")?;

        let request = TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_system_prompt(
                        self.language_name(source_lang),
                        self.language_name(target_lang),
                    ),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: 0.3,
        };

        let translated = with_retry_if(
            &RetryConfig::translation_call(),
            &format!("Translation {} -> {}", source_lang, target_lang),
            || async {
                let response = self
                    .client
                    .post(&self.api_url)
                    .header("Authorization", format!("Bearer {}", api_key))
                    .header("Content-Type", "application/json")
                    .json(&request)
                    .send()
                    .await
                    .context("Failed to send translation request")?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                    anyhow::bail!("translation API error ({}): {}", status, body);
                }

                let chat_response: ChatResponse = response
                    .json()
                    .await
                    .context("Failed to parse translation response")?;

                let translated = chat_response
                    .choices
                    .first()
                    .map(|c| c.message.content.trim().to_string())
                    .context("translation response contained no choices")?;

                Ok(translated)
            },
            is_retryable_error,
        )
        .await?;

        Ok(translated)
    }
}

/// Determine if an error is retryable (5xx errors, 429 rate limit, network errors).
/// Other 4xx client errors should not be retried.
fn is_retryable_error(error: &anyhow::Error) -> bool {
    let error_str = error.to_string();

    // Error format: "translation API error (400 Bad Request): ..."
    if error_str.contains("translation API error") {
        if let Some(start) = error_str.find('(') {
            if let Some(end) = error_str[start..].find(')') {
                let status_str = &error_str[start + 1..start + end];
                let status_num = status_str.split_whitespace().next().unwrap_or("");
                if let Ok(status) = status_num.parse::<u16>() {
                    return status == 429 || status >= 500;
                }
            }
        }
    }

    // Network errors, timeouts and parse errors are treated as transient.
    true
}
