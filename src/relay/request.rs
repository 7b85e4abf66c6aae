//! Inbound relay request parsing
//!
//! Fields are kept as raw JSON values. Falsy values (`null`, `false`, `0` and
//! `""`) count as missing, and a numeric key is forwarded rather than
//! rejected as a type error.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Body of a relay request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RelayRequest {
    /// Provider name, `RetellAI` or `Vapi`
    #[schema(value_type = Option<String>, example = "RetellAI")]
    #[serde(default)]
    pub provider: Option<Value>,
    /// Caller's API key for that provider, forwarded as a bearer token
    #[schema(value_type = Option<String>, example = "key_abc123")]
    #[serde(default)]
    pub api_key: Option<Value>,
}

impl RelayRequest {
    /// Parse a raw request body
    pub fn parse(body: &[u8]) -> AppResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Provider name and API key, both present and truthy
    ///
    /// A non-string provider can never name a registry entry. Numeric and
    /// `true` keys are forwarded as their JSON text; arrays and objects are
    /// not usable as a bearer token.
    pub fn credentials(&self) -> AppResult<(&str, Cow<'_, str>)> {
        let (Some(provider), Some(api_key)) = (present(&self.provider), present(&self.api_key))
        else {
            return Err(AppError::MissingFields);
        };

        let provider = provider.as_str().ok_or(AppError::UnsupportedProvider)?;

        let api_key = match api_key {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(b) => Cow::Owned(b.to_string()),
            _ => return Err(AppError::InvalidApiKey),
        };

        Ok((provider, api_key))
    }
}

fn present(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().filter(|value| is_truthy(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
