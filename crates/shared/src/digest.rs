use crate::error::DigestResult;
use crate::llm::{CompletionModel, CompletionRequest};
use crate::models::SummaryRecord;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates concise summaries.";
const MAX_TOKENS: u32 = 200;

/// Rolls every per-post summary of a run into one narrative.
///
/// With nothing to summarize the model is not called and no digest is produced.
pub struct DigestAggregator<M> {
    model: M,
}

impl<M: CompletionModel> DigestAggregator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn request_for(joined: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: format!(
                "Summarize the following daily summaries into a concise weekly report:\n\n{}",
                joined
            ),
            max_tokens: MAX_TOKENS,
            temperature: None,
        }
    }

    pub async fn aggregate(&self, records: &[SummaryRecord]) -> DigestResult<Option<String>> {
        let joined = join_summaries(records);
        if joined.trim().is_empty() {
            tracing::info!("No summaries to roll up, skipping digest");
            return Ok(None);
        }

        let digest = self.model.complete(&Self::request_for(&joined)).await?;
        Ok(Some(digest))
    }
}

pub fn join_summaries(records: &[SummaryRecord]) -> String {
    records
        .iter()
        .map(|r| r.body.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
