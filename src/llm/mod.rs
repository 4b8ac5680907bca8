//! Demographic tag suggestion via a chat-completion endpoint.
//!
//! One request per persona, strictly sequential, single attempt per call.
//! The credential is a user-supplied pass-through bearer token.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::matching::vocabulary::split_tags;
use crate::persona::Persona;
use crate::utilities::errors::SuggestError;

/// System message sent with every suggestion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Token cap on each suggestion reply.
pub const MAX_TOKENS: u32 = 150;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Build the user prompt asking for follower demographics of one persona.
pub fn tag_prompt(persona_name: &str) -> String {
    format!(
        "Provide the likely demographics (e.g., age, gender) of the followers \
         for the following persona: {}",
        persona_name,
    )
}

/// Normalize a raw model reply into a tag list.
///
/// Replies are requested as comma-separated labels; whatever comes back is
/// split and trimmed the same way the input tag column is.
pub fn parse_tag_reply(reply: &str) -> Vec<String> {
    split_tags(reply)
}

// ---------------------------------------------------------------------------
// Suggester trait
// ---------------------------------------------------------------------------

/// Anything that can propose demographic tags for a persona.
#[async_trait]
pub trait TagSuggester: Send + Sync {
    /// Suggest tags describing the likely followers of `persona`.
    async fn suggest_tags(&self, persona: &Persona) -> Result<Vec<String>, SuggestError>;
}

/// Walk the persona table in order, one request per row, overwriting each
/// persona's tags with the suggestion.
///
/// Fails fast on the first error; rows already tagged keep their new tags.
pub async fn suggest_tags_for_all(
    suggester: &dyn TagSuggester,
    personas: &mut [Persona],
) -> Result<(), SuggestError> {
    let total = personas.len();
    for (index, persona) in personas.iter_mut().enumerate() {
        log::info!("tagging {}/{}: {}", index + 1, total, persona.name);
        persona.tags = suggester.suggest_tags(persona).await?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// OpenAI-compatible implementation
// ---------------------------------------------------------------------------

/// Chat Completions client for tag suggestion.
#[derive(Debug, Clone)]
pub struct OpenAiSuggester {
    /// Model identifier.
    pub model: String,
    /// Pass-through API credential.
    pub api_key: Option<String>,
    /// API base URL, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl OpenAiSuggester {
    /// Create a suggester with the default model, endpoint, and timeout.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request_body(&self, persona: &Persona) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": tag_prompt(&persona.name)},
            ],
            "max_tokens": MAX_TOKENS,
        })
    }
}

#[async_trait]
impl TagSuggester for OpenAiSuggester {
    async fn suggest_tags(&self, persona: &Persona) -> Result<Vec<String>, SuggestError> {
        let api_key = self.api_key.as_ref().ok_or(SuggestError::ApiKeyMissing)?;
        let body = self.build_request_body(persona);

        log::debug!("requesting tag suggestion for {}", persona.handle);
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(SuggestError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply: Value =
            serde_json::from_str(&text).map_err(|e| SuggestError::MalformedReply {
                message: e.to_string(),
            })?;
        let content = reply["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| SuggestError::MalformedReply {
                message: "reply has no choices[0].message.content".to_string(),
            })?;

        Ok(parse_tag_reply(content))
    }
}
