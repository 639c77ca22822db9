use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use dictionary::{Dictionary, DictionaryError, Word};
use thiserror::Error;

use crate::audio::AudioElement;
use crate::diagnostics::DiagnosticsLog;
use crate::display::{normalize_query, DisplayModel};
use crate::render::Screen;
use crate::surface::OutputSurface;

#[async_trait]
pub trait DictionaryService: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Word, DictionaryError>;
}

#[async_trait]
impl DictionaryService for Dictionary {
    async fn lookup(&self, word: &str) -> Result<Word, DictionaryError> {
        self.get_definition(word).await
    }
}

/// How a single lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    Found,
    NotFound,
    ValidationError,
    NetworkError,
    /// A newer lookup started before this one resolved, nothing was rendered.
    Superseded,
}

#[derive(Debug, Error)]
#[error("entry for {0:?} has no meanings")]
struct MalformedEntry(String);

pub struct LookupController {
    dictionary: Arc<dyn DictionaryService>,
    surface: Arc<dyn OutputSurface>,
    audio: Arc<dyn AudioElement>,
    log: Arc<dyn DiagnosticsLog>,
    latest: AtomicU64,
    /// Audio url bound to the currently rendered volume button. Also serializes
    /// token checks with rendering.
    audio_trigger: Mutex<Option<String>>,
}

impl LookupController {
    pub fn new(
        dictionary: Arc<dyn DictionaryService>,
        surface: Arc<dyn OutputSurface>,
        audio: Arc<dyn AudioElement>,
        log: Arc<dyn DiagnosticsLog>,
    ) -> Self {
        Self {
            dictionary,
            surface,
            audio,
            log,
            latest: AtomicU64::new(0),
            audio_trigger: Mutex::new(None),
        }
    }

    pub async fn perform_lookup(&self, raw_input: &str) -> LookupState {
        let Some(word) = normalize_query(raw_input) else {
            self.begin(Screen::ValidationError);
            return LookupState::ValidationError;
        };
        let token = self.begin(Screen::Searching);

        let (screen, audio_url, state) = match self.dictionary.lookup(&word).await {
            Ok(entry) => {
                tracing::debug!(%word, phonetics = ?entry.phonetics, "definition received");
                match DisplayModel::project(&entry) {
                    Some(model) => {
                        let audio_url = model.audio_url.clone();
                        (Screen::Found(model), audio_url, LookupState::Found)
                    }
                    None => {
                        self.log
                            .log_error("reading definition", &MalformedEntry(word.clone()));
                        (Screen::Error, None, LookupState::NetworkError)
                    }
                }
            }
            Err(DictionaryError::NotFound(not_found)) => {
                tracing::debug!(%word, message = ?not_found.message, "no definitions found");
                (Screen::NotFound { word: word.clone() }, None, LookupState::NotFound)
            }
            Err(error) => {
                self.log.log_error("fetching definition", &error);
                (Screen::Error, None, LookupState::NetworkError)
            }
        };

        if self.show_if_latest(token, screen, audio_url) {
            state
        } else {
            tracing::debug!(%word, token, "discarding superseded lookup");
            LookupState::Superseded
        }
    }

    /// Click on the rendered volume button. Returns whether playback started.
    pub fn activate_audio_trigger(&self) -> bool {
        let Some(url) = self.trigger().clone() else {
            return false;
        };
        self.audio.set_source(&url);
        match self.audio.play() {
            Ok(()) => true,
            Err(error) => {
                self.log.log_error("playing pronunciation", &error);
                false
            }
        }
    }

    /// Starts a new lookup generation and shows its first screen.
    fn begin(&self, screen: Screen) -> u64 {
        let mut trigger = self.trigger();
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *trigger = None;
        self.surface.replace(screen);
        token
    }

    fn show_if_latest(&self, token: u64, screen: Screen, audio_url: Option<String>) -> bool {
        let mut trigger = self.trigger();
        if self.latest.load(Ordering::SeqCst) != token {
            return false;
        }
        *trigger = audio_url;
        self.surface.replace(screen);
        true
    }

    fn trigger(&self) -> MutexGuard<'_, Option<String>> {
        self.audio_trigger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
