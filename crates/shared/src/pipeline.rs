use chrono::{DateTime, Utc};

use crate::digest::DigestAggregator;
use crate::llm::CompletionModel;
use crate::models::{DigestRun, RunStats, SummaryRecord};
use crate::summarizer::Summarizer;
use crate::twitter::TimelineSource;

/// Drives one pass: every handle in list order, every qualifying post in
/// timeline order, then the rollup.
///
/// A failing account or post is logged and skipped so one bad item does not
/// cost the whole digest.
pub struct DigestPipeline<T, M> {
    timeline: T,
    summarizer: Summarizer<M>,
    aggregator: DigestAggregator<M>,
}

impl<T, M> DigestPipeline<T, M>
where
    T: TimelineSource,
    M: CompletionModel,
{
    pub fn new(timeline: T, summarizer: Summarizer<M>, aggregator: DigestAggregator<M>) -> Self {
        Self {
            timeline,
            summarizer,
            aggregator,
        }
    }

    pub async fn collect_summaries(
        &self,
        handles: &[String],
        now: DateTime<Utc>,
    ) -> (Vec<SummaryRecord>, RunStats) {
        let mut records = Vec::new();
        let mut stats = RunStats::default();

        for handle in handles {
            stats.accounts += 1;

            let posts = match self.timeline.recent_posts(handle, now).await {
                Ok(posts) => posts,
                Err(e) => {
                    tracing::warn!(handle = %handle, "Skipping account: {}", e);
                    stats.accounts_failed += 1;
                    continue;
                }
            };

            tracing::info!(handle = %handle, qualifying = posts.len(), "Timeline checked");
            stats.posts_qualified += posts.len();

            for post in &posts {
                match self.summarizer.summarize_post(post).await {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        tracing::warn!(url = %post.url, "Failed to summarize post: {}", e);
                        stats.posts_failed += 1;
                    }
                }
            }
        }

        (records, stats)
    }

    pub async fn run(&self, handles: &[String], now: DateTime<Utc>) -> DigestRun {
        let (records, stats) = self.collect_summaries(handles, now).await;

        let digest = match self.aggregator.aggregate(&records).await {
            Ok(digest) => digest,
            Err(e) => {
                tracing::warn!("Failed to generate digest summary: {}", e);
                None
            }
        };

        DigestRun {
            records,
            digest,
            stats,
        }
    }
}
