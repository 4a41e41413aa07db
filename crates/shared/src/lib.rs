// Public modules
pub mod config;
pub mod digest;
pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod oauth;
pub mod observability;
pub mod pipeline;
pub mod report;
pub mod summarizer;
pub mod twitter;

// Re-export commonly used types
pub use config::{Config, TwitterCredentials};
pub use digest::DigestAggregator;
pub use error::{DigestError, DigestResult};
pub use io::{digest_filename, load_handles, save_digest};
pub use llm::{CompletionModel, CompletionRequest, OpenAiClient};
pub use models::{DigestRun, Post, RunStats, SummaryRecord};
pub use pipeline::DigestPipeline;
pub use report::{ReportGenerator, ReportTemplate};
pub use summarizer::Summarizer;
pub use twitter::{TimelineSource, TwitterClient};
