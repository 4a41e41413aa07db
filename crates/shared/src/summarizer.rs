use crate::error::DigestResult;
use crate::llm::{CompletionModel, CompletionRequest};
use crate::models::{Post, SummaryRecord};

pub const DEFAULT_TITLE: &str = "Untitled";

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates titles and summaries for tweets.";
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;
const MAX_INPUT_CHARS: usize = 8000;

/// Turns a single post into a title and a short summary
pub struct Summarizer<M> {
    model: M,
}

impl<M: CompletionModel> Summarizer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn request_for(text: &str) -> CompletionRequest {
        let prompt = format!(
            r#"Generate a news title and a summary (max 200 words) for the tweet below.

Format your response as:
TITLE: the news title

SUMMARY: the summary

Tweet:
{}"#,
            truncate(text, MAX_INPUT_CHARS)
        );

        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: Some(TEMPERATURE),
        }
    }

    pub async fn summarize_text(&self, text: &str) -> DigestResult<(String, String)> {
        let completion = self.model.complete(&Self::request_for(text)).await?;
        Ok(parse_title_and_summary(&completion))
    }

    pub async fn summarize_post(&self, post: &Post) -> DigestResult<SummaryRecord> {
        let (title, body) = self.summarize_text(&post.text).await?;
        Ok(SummaryRecord {
            title,
            body,
            url: post.url.clone(),
        })
    }
}

/// Split a completion into `(title, summary)`.
///
/// Tried in order: explicit `TITLE:`/`SUMMARY:` markers, then the first blank
/// line, then the whole text (labels removed) as summary under [`DEFAULT_TITLE`].
pub fn parse_title_and_summary(text: &str) -> (String, String) {
    let lines: Vec<&str> = text.trim().lines().collect();

    if let Some(title_idx) = lines.iter().position(|l| strip_label(l, "title:").is_some()) {
        let mut title = strip_label(lines[title_idx], "title:").unwrap_or_default();
        let mut rest = &lines[title_idx + 1..];

        // Headline on the line after a bare marker
        if title.is_empty() {
            if let Some(idx) = rest.iter().position(|l| !l.trim().is_empty()) {
                if strip_label(rest[idx], "summary:").is_none() {
                    title = rest[idx].trim();
                    rest = &rest[idx + 1..];
                }
            }
        }

        let summary = match rest.iter().position(|l| strip_label(l, "summary:").is_some()) {
            Some(idx) => {
                let first = strip_label(rest[idx], "summary:").unwrap_or_default();
                std::iter::once(first)
                    .chain(rest[idx + 1..].iter().copied())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            None => rest.join("\n"),
        };

        let summary = summary.trim();
        if !summary.is_empty() {
            return (clean_title(title), summary.to_string());
        }
    }

    let first_content = lines.iter().position(|l| !l.trim().is_empty());
    if let Some(start) = first_content {
        if let Some(gap) = lines[start..].iter().position(|l| l.trim().is_empty()) {
            let split = start + gap;
            let title = lines[start..split].join(" ");
            let summary = lines[split + 1..].join("\n");
            let summary = strip_label(summary.trim(), "summary:").unwrap_or(summary.trim());
            if !summary.is_empty() {
                return (clean_title(&title), summary.trim().to_string());
            }
        }
    }

    (DEFAULT_TITLE.to_string(), unlabelled(&lines))
}

/// Whatever text is left once marker labels and blank lines are dropped
fn unlabelled(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|l| {
            strip_label(l, "title:")
                .or_else(|| strip_label(l, "summary:"))
                .unwrap_or_else(|| l.trim())
        })
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let trimmed = line
        .trim_start()
        .trim_start_matches(|c: char| c == '*' || c == '#')
        .trim_start();
    let head = trimmed.get(..label.len())?;
    if head.eq_ignore_ascii_case(label) {
        Some(trimmed[label.len()..].trim_start_matches('*').trim())
    } else {
        None
    }
}

fn clean_title(raw: &str) -> String {
    let unlabelled = strip_label(raw, "title:").unwrap_or(raw);
    let title = unlabelled
        .trim()
        .trim_matches(|c: char| c == '*' || c == '#' || c == '"' || c.is_whitespace());
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

// Respect UTF-8 boundaries when cutting
fn truncate(content: &str, max: usize) -> &str {
    if content.len() <= max {
        return content;
    }
    let mut end = max;
    while end > 0 && !content.is_char_boundary(end) {
        end -= 1;
    }
    &content[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigestError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    struct CannedModel {
        reply: String,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl CannedModel {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionModel for CannedModel {
        async fn complete(&self, request: &CompletionRequest) -> DigestResult<String> {
            self.seen.lock().unwrap().push(request.clone());
            if self.reply.is_empty() {
                return Err(DigestError::EmptyCompletion);
            }
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_parse_explicit_markers() {
        let (title, summary) =
            parse_title_and_summary("TITLE: Dencun ships\n\nSUMMARY: Blobs are live.\nFees fell.");
        assert_eq!(title, "Dencun ships");
        assert_eq!(summary, "Blobs are live.\nFees fell.");
    }

    #[test]
    fn test_parse_markdown_markers() {
        let (title, summary) =
            parse_title_and_summary("**Title:** \"Pectra date set\"\n**Summary:** Core devs agreed.");
        assert_eq!(title, "Pectra date set");
        assert_eq!(summary, "Core devs agreed.");
    }

    #[test]
    fn test_parse_title_marker_without_summary_marker() {
        let (title, summary) = parse_title_and_summary("Title: Blob fees\nThey dropped again.");
        assert_eq!(title, "Blob fees");
        assert_eq!(summary, "They dropped again.");
    }

    #[test]
    fn test_parse_blank_line_split() {
        let (title, summary) =
            parse_title_and_summary("## Validators hit 1M\n\nThe beacon chain crossed a milestone.\n\nMore later.");
        assert_eq!(title, "Validators hit 1M");
        assert_eq!(summary, "The beacon chain crossed a milestone.\n\nMore later.");
    }

    #[test]
    fn test_parse_single_paragraph_falls_back() {
        let (title, summary) = parse_title_and_summary("Just one paragraph of text.");
        assert_eq!(title, DEFAULT_TITLE);
        assert_eq!(summary, "Just one paragraph of text.");
    }

    #[test]
    fn test_parse_title_only_falls_back() {
        let (title, summary) = parse_title_and_summary("TITLE: Lonely title\n\n");
        assert_eq!(title, DEFAULT_TITLE);
        assert_eq!(summary, "Lonely title");
    }

    #[test]
    fn test_parse_headline_below_bare_marker() {
        let (title, summary) = parse_title_and_summary("TITLE:\nFoo headline\n\nSUMMARY: bar");
        assert_eq!(title, "Foo headline");
        assert_eq!(summary, "bar");
    }

    #[test]
    fn test_parse_summary_label_only() {
        let (title, summary) = parse_title_and_summary("Summary: only a summary here.");
        assert_eq!(title, DEFAULT_TITLE);
        assert_eq!(summary, "only a summary here.");
    }

    #[test]
    fn test_parse_empty_summary_drops_markers() {
        let (title, summary) = parse_title_and_summary("Title: A\n\nSummary:");
        assert_eq!(title, DEFAULT_TITLE);
        assert_eq!(summary, "A");
        assert!(!summary.contains("Title:") && !summary.contains("Summary:"));
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let s = "é".repeat(10);
        let cut = truncate(&s, 5);
        assert_eq!(cut, "éé");
        assert_eq!(truncate("short", 100), "short");
    }

    #[test]
    fn test_request_uses_fixed_settings() {
        let request = Summarizer::<CannedModel>::request_for("gm");
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.temperature, Some(0.7));
        assert!(request.prompt.ends_with("Tweet:\ngm"));
        assert!(request.system.contains("titles and summaries"));
    }

    #[tokio::test]
    async fn test_summarize_post_carries_permalink() {
        let model = CannedModel::new("TITLE: Alice breaks news\n\nSUMMARY: Something happened.");
        let summarizer = Summarizer::new(model);
        let post = Post::new("alice", "99", "long text", Utc::now());

        let record = summarizer.summarize_post(&post).await.unwrap();

        assert_eq!(record.title, "Alice breaks news");
        assert_eq!(record.body, "Something happened.");
        assert_eq!(record.url, "https://twitter.com/alice/status/99");
        assert_eq!(summarizer.model.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_propagates_model_error() {
        let summarizer = Summarizer::new(CannedModel::new(""));
        let err = summarizer.summarize_text("anything").await.unwrap_err();
        assert!(matches!(err, DigestError::EmptyCompletion));
    }
}
