//! Shared driver types.

use serde::{Deserialize, Serialize};

/// Model providers QuestWeaver can talk to.
///
/// # Examples
///
/// ```
/// use questweaver_interface::Provider;
/// use std::str::FromStr;
///
/// assert_eq!(Provider::from_str("gemini").unwrap(), Provider::Gemini);
/// assert_eq!(Provider::Anthropic.as_str(), "anthropic");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// OpenAI chat completions
    OpenAi,
    /// Google Gemini generateContent
    Gemini,
    /// Anthropic messages
    Anthropic,
}

impl Provider {
    /// Lowercase provider name used in configuration and messages.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
