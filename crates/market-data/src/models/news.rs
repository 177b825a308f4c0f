use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news headline with source attribution.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsStory {
    /// Headline text
    pub title: String,

    /// Human-readable source name (e.g. "Hacker News", "Bloomberg")
    pub source: String,

    /// Link to the story, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Publication time reported by the source
    pub published_at: DateTime<Utc>,
}

impl NewsStory {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        url: Option<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            url,
            published_at,
        }
    }
}
