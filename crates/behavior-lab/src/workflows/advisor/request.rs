use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::error::AdvisorError;

/// Upper bound on the serialized `messages` array, in UTF-16 code units.
pub const MAX_MESSAGES_LENGTH: usize = 10_000;

/// Body accepted by the advisor proxy before validation.
///
/// Fields are kept loose so shape errors produce the proxy's own messages
/// instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatProxyRequest {
    #[serde(default)]
    pub messages: Option<Value>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<Value>,
}

/// Validated payload forwarded to the completion API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Number>,
}

impl ChatProxyRequest {
    pub fn validate(self, default_model: &str) -> Result<CompletionRequest, AdvisorError> {
        let messages = match self.messages {
            Some(Value::Array(messages)) if !messages.is_empty() => messages,
            _ => return Err(AdvisorError::EmptyMessages),
        };

        let max_tokens = match self.max_tokens {
            None | Some(Value::Null) => None,
            Some(Value::Number(number)) if number.as_f64().is_some_and(|value| value > 0.0) => {
                Some(number)
            }
            Some(_) => return Err(AdvisorError::InvalidMaxTokens),
        };

        let length = serde_json::to_string(&messages)
            .map_err(|err| AdvisorError::InvalidBody(err.to_string()))?
            .encode_utf16()
            .count();
        if length > MAX_MESSAGES_LENGTH {
            return Err(AdvisorError::PayloadTooLarge {
                length,
                limit: MAX_MESSAGES_LENGTH,
            });
        }

        let model = self
            .model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| default_model.to_string());

        Ok(CompletionRequest {
            model,
            messages,
            max_tokens,
        })
    }
}
