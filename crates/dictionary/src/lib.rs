use dictionary_api::get_definition;
use thiserror::Error;

mod dictionary;
mod dictionary_api;

pub use dictionary::{PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};
pub use dictionary_api::DICTIONARY_API_URL;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary endpoint {0:?} cannot be used as a base url")]
    Endpoint(String),
    #[error("failed to reach the dictionary service")]
    Fetch(#[source] reqwest::Error),
    #[error("unexpected response from the dictionary service")]
    Deserialize(#[source] serde_json::Error),
    #[error(transparent)]
    NotFound(NotFoundError),
    #[error("dictionary service error: {title}")]
    Service {
        title: String,
        message: Option<String>,
    },
}

#[derive(Debug, Clone, Error)]
#[error("no definitions found for {word:?}")]
pub struct NotFoundError {
    pub word: String,
    pub message: Option<String>,
    pub resolution: Option<String>,
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Endpoint the word is appended to as the last path segment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
