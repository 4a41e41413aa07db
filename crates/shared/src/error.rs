/// Failures raised while talking to the timeline or language-model APIs.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Twitter API returned error: {status} - {body}")]
    Platform { status: u16, body: String },

    #[error("OpenAI API returned error: {status} - {body}")]
    LanguageModel { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Language model returned an empty completion")]
    EmptyCompletion,

    #[error("Unrecognised timestamp: {0:?}")]
    Timestamp(String),
}

pub type DigestResult<T> = Result<T, DigestError>;
