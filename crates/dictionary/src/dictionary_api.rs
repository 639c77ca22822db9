// https://dictionaryapi.dev/ - free dictionary api, returns a list of entries or an error object

use reqwest::Url;
use serde::Deserialize;

use crate::dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, NotFoundError};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const NO_DEFINITIONS_FOUND: &str = "No Definitions Found";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Entries(Vec<ApiEntry>),
    Error(ApiError),
}

#[derive(Debug, Deserialize)]
struct ApiError {
    title: String,
    message: Option<String>,
    resolution: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    phonetic: Option<String>,
    phonetics: Vec<ApiPhonetic>,
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    example: Option<String>,
}

impl From<ApiEntry> for Word {
    fn from(entry: ApiEntry) -> Self {
        Word {
            word: entry.word,
            phonetic: entry.phonetic,
            phonetics: entry
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: phonetic.text,
                    audio: phonetic.audio,
                })
                .collect(),
            meanings: entry
                .meanings
                .into_iter()
                .map(|meaning| WordMeaning {
                    part_of_speech: meaning.part_of_speech.into(),
                    definitions: meaning
                        .definitions
                        .into_iter()
                        .map(|definition| WordDefinition {
                            definition: definition.definition,
                            example: definition.example,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Appends the word as one percent-encoded path segment of the endpoint.
pub(crate) fn entry_url(base_url: &str, word: &str) -> Result<Url, DictionaryError> {
    let mut url =
        Url::parse(base_url).map_err(|_| DictionaryError::Endpoint(base_url.to_owned()))?;
    url.path_segments_mut()
        .map_err(|_| DictionaryError::Endpoint(base_url.to_owned()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = entry_url(base_url, word)?;
    tracing::debug!(%url, "requesting definition");
    // not-found answers come back as 404 with a json body, so the status is not checked
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    parse_response(word, &body)
}

fn parse_response(word: &str, body: &[u8]) -> Result<Word, DictionaryError> {
    let response: ApiResponse =
        serde_json::from_slice(body).map_err(DictionaryError::Deserialize)?;
    match response {
        ApiResponse::Entries(entries) => match entries.into_iter().next() {
            Some(entry) => Ok(entry.into()),
            None => Err(DictionaryError::NotFound(NotFoundError {
                word: word.to_owned(),
                message: None,
                resolution: None,
            })),
        },
        ApiResponse::Error(error) if error.title == NO_DEFINITIONS_FOUND => {
            Err(DictionaryError::NotFound(NotFoundError {
                word: word.to_owned(),
                message: error.message,
                resolution: error.resolution,
            }))
        }
        ApiResponse::Error(error) => Err(DictionaryError::Service {
            title: error.title,
            message: error.message,
        }),
    }
}
