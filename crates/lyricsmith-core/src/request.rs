//! Generation request snapshot

use serde::{Deserialize, Serialize};

/// Everything the generator needs, copied out of the selection state at the
/// moment generation starts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_description: Option<String>,
    pub vocalist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocalist_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhyme_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhyme_scheme_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_style: Option<String>,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, vocalist: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            vocalist: vocalist.into(),
            ..Default::default()
        }
    }

    pub fn with_topic_description(mut self, description: impl Into<String>) -> Self {
        self.topic_description = Some(description.into());
        self
    }

    pub fn with_vocalist_detail(mut self, detail: impl Into<String>) -> Self {
        self.vocalist_detail = Some(detail.into());
        self
    }

    pub fn with_producer(mut self, name: impl Into<String>, detail: impl Into<String>) -> Self {
        self.producer = Some(name.into());
        self.producer_detail = Some(detail.into());
        self
    }

    pub fn with_rhyme_scheme(mut self, name: impl Into<String>, detail: impl Into<String>) -> Self {
        self.rhyme_scheme = Some(name.into());
        self.rhyme_scheme_detail = Some(detail.into());
        self
    }

    pub fn with_custom_style(mut self, style: impl Into<String>) -> Self {
        self.custom_style = Some(style.into());
        self
    }
}
