use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::{Config, TwitterCredentials};
use crate::error::{DigestError, DigestResult};
use crate::models::{word_count, Post};
use crate::oauth::OAuthSigner;

/// Most recent posts requested per account
pub const TIMELINE_PAGE_SIZE: u32 = 100;
/// Posts shorter than this are not worth summarizing
pub const MIN_WORDS: usize = 100;
pub const LOOKBACK_HOURS: i64 = 24;

const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Something that can hand back the qualifying posts for a handle
#[async_trait]
pub trait TimelineSource {
    async fn recent_posts(&self, handle: &str, now: DateTime<Utc>) -> DigestResult<Vec<Post>>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id_str: String,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub created_at: String,
}

impl Status {
    pub fn body(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or("")
    }

    pub fn created_at(&self) -> DigestResult<DateTime<Utc>> {
        DateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| DigestError::Timestamp(self.created_at.clone()))
    }
}

pub struct TwitterClient {
    client: Client,
    signer: OAuthSigner,
    base_url: Url,
}

impl TwitterClient {
    pub fn new(credentials: TwitterCredentials, base_url: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        let mut base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid Twitter API URL: {}", base_url))?;
        // Url::join replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            signer: OAuthSigner::new(credentials),
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.twitter.clone(), &config.twitter_api_url)
    }

    pub fn timeline_url(&self, handle: &str) -> DigestResult<Url> {
        let mut url = self
            .base_url
            .join("1.1/statuses/user_timeline.json")
            .map_err(|e| DigestError::Decode(format!("Bad timeline URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("screen_name", handle)
            .append_pair("count", &TIMELINE_PAGE_SIZE.to_string())
            .append_pair("tweet_mode", "extended");
        Ok(url)
    }

    /// Latest page of the account's timeline, newest first
    pub async fn fetch_user_timeline(&self, handle: &str) -> DigestResult<Vec<Status>> {
        let url = self.timeline_url(handle)?;
        let authorization = self.signer.authorization_header("GET", &url);

        let response = self
            .client
            .get(url)
            .header("Authorization", authorization)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            return Err(DigestError::Platform {
                status: status.as_u16(),
                body,
            });
        }

        let statuses = response
            .json::<Vec<Status>>()
            .await
            .map_err(|e| DigestError::Decode(format!("Twitter timeline: {}", e)))?;

        tracing::debug!(handle, count = statuses.len(), "Fetched timeline");
        Ok(statuses)
    }
}

#[async_trait]
impl TimelineSource for TwitterClient {
    async fn recent_posts(&self, handle: &str, now: DateTime<Utc>) -> DigestResult<Vec<Post>> {
        let statuses = self.fetch_user_timeline(handle).await?;
        Ok(select_recent(handle, &statuses, now))
    }
}

/// Keep statuses newer than the lookback window with at least [`MIN_WORDS`] words,
/// preserving API order.
pub fn select_recent(handle: &str, statuses: &[Status], now: DateTime<Utc>) -> Vec<Post> {
    let cutoff = now - Duration::hours(LOOKBACK_HOURS);
    let mut posts = Vec::new();

    for status in statuses {
        let created_at = match status.created_at() {
            Ok(ts) => ts,
            Err(e) => {
                tracing::warn!(handle, id = %status.id_str, "Skipping post: {}", e);
                continue;
            }
        };

        if is_qualifying(status.body(), created_at, cutoff) {
            posts.push(Post::new(handle, &status.id_str, status.body(), created_at));
        }
    }

    posts
}

pub fn is_qualifying(text: &str, created_at: DateTime<Utc>, cutoff: DateTime<Utc>) -> bool {
    created_at > cutoff && word_count(text) >= MIN_WORDS
}
