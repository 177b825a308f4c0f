//! Hacker News headline provider.
//!
//! Fetches the current top stories from the public firebase API. The
//! story listing is one request; each story is then fetched individually
//! and failures are dropped, so a single dead item id cannot sink the
//! refresh.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use log::debug;
use serde::Deserialize;

use crate::errors::SourceError;
use crate::models::NewsStory;
use crate::provider::NewsProvider;

const PROVIDER_ID: &str = "HACKER_NEWS";

const TOP_STORIES_URL: &str = "https://hacker-news.firebaseio.com/v0/topstories.json";
const ITEM_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/item";

/// Only the head of the top-stories list is interesting for a ticker.
const TOP_STORY_LIMIT: usize = 30;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A single item from the firebase item endpoint.
///
/// Ask/Show posts have no url and deleted items can miss every field,
/// so everything is optional.
#[derive(Debug, Deserialize)]
struct HnItem {
    title: Option<String>,
    url: Option<String>,
    /// Unix seconds
    time: Option<i64>,
}

/// Hacker News top-stories provider.
pub struct HackerNewsProvider {
    client: reqwest::Client,
}

impl HackerNewsProvider {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_story(&self, id: u64) -> Option<NewsStory> {
        match self.try_fetch_story(id).await {
            Ok(story) => Some(story),
            Err(err) => {
                debug!("skipping hn story {id}: {err}");
                None
            }
        }
    }

    async fn try_fetch_story(&self, id: u64) -> Result<NewsStory, SourceError> {
        let url = format!("{ITEM_BASE_URL}/{id}.json");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let item: HnItem = response.json().await.map_err(|e| SourceError::Decode {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;
        Ok(story_from_item(item))
    }
}

#[async_trait]
impl NewsProvider for HackerNewsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_news(&self) -> Result<Vec<NewsStory>, SourceError> {
        let response = self
            .client
            .get(TOP_STORIES_URL)
            .send()
            .await?
            .error_for_status()?;
        let ids: Vec<u64> = response.json().await.map_err(|e| SourceError::Decode {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

        let lookups = ids
            .into_iter()
            .take(TOP_STORY_LIMIT)
            .map(|id| self.fetch_story(id));

        let mut stories: Vec<NewsStory> = join_all(lookups).await.into_iter().flatten().collect();
        stories.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(stories)
    }
}

fn story_from_item(item: HnItem) -> NewsStory {
    NewsStory {
        title: item.title.unwrap_or_else(|| "Untitled".to_string()),
        source: "Hacker News".to_string(),
        url: item.url,
        published_at: DateTime::from_timestamp(item.time.unwrap_or(0), 0)
            .unwrap_or_else(Utc::now),
    }
}
