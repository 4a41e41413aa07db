use chrono::{DateTime, Utc};

/// A qualifying post pulled from an account's timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub handle: String,
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

impl Post {
    pub fn new(
        handle: impl Into<String>,
        id: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let handle = handle.into();
        let id = id.into();
        let url = permalink(&handle, &id);
        Self {
            handle,
            id,
            text: text.into(),
            created_at,
            url,
        }
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}

/// Generated title and body for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub title: String,
    pub body: String,
    pub url: String,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub accounts: usize,
    pub accounts_failed: usize,
    pub posts_qualified: usize,
    pub posts_failed: usize,
}

/// Everything the report writer needs from one pass over the account list
#[derive(Debug, Clone, Default)]
pub struct DigestRun {
    pub records: Vec<SummaryRecord>,
    pub digest: Option<String>,
    pub stats: RunStats,
}

pub fn permalink(handle: &str, id: &str) -> String {
    format!("https://twitter.com/{}/status/{}", handle, id)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_permalink_format() {
        assert_eq!(
            permalink("alice", "1717171717"),
            "https://twitter.com/alice/status/1717171717"
        );
    }

    #[test]
    fn test_post_new_derives_url() {
        let created = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let post = Post::new("bob", "42", "hello there", created);
        assert_eq!(post.url, "https://twitter.com/bob/status/42");
        assert_eq!(post.word_count(), 2);
    }

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(word_count("  one\ttwo\n\nthree   four "), 4);
        assert_eq!(word_count(""), 0);
    }
}
