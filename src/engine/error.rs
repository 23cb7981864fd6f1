/// Everything that can go wrong between pressing Generate and holding a
/// typed lesson plan. All variants render to one inline message for the
/// user; the underlying cause is kept for logging.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API key is not configured. Set GEMINI_API_KEY and restart the app.")]
    MissingApiKey,

    #[error("Empty response from the model. Please try again.")]
    EmptyResponse,

    #[error("The model returned something that is not a valid lesson plan: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Request to the generation provider failed: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Provider(err.to_string())
    }
}
