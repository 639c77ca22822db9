use std::io;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio source has been set")]
    NoSource,
    #[error("failed to start audio player {player:?}")]
    Spawn {
        player: String,
        #[source]
        source: io::Error,
    },
}

/// Hidden playback element: the source is set first, then played.
pub trait AudioElement: Send + Sync {
    fn set_source(&self, url: &str);
    fn play(&self) -> Result<(), AudioError>;
}

/// Plays pronunciations through an external command such as `mpv --no-video`,
/// the url is passed as the last argument. Without a command the url is printed.
pub struct ExternalPlayer {
    command: Vec<String>,
    source: Mutex<Option<String>>,
}

impl ExternalPlayer {
    pub fn new(player: Option<&str>) -> Self {
        Self {
            command: player
                .map(|player| player.split_whitespace().map(str::to_owned).collect())
                .unwrap_or_default(),
            source: Mutex::new(None),
        }
    }
}

impl AudioElement for ExternalPlayer {
    fn set_source(&self, url: &str) {
        *self.source.lock().unwrap_or_else(PoisonError::into_inner) = Some(url.to_owned());
    }

    fn play(&self) -> Result<(), AudioError> {
        let url = self
            .source
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(AudioError::NoSource)?;
        let Some((program, args)) = self.command.split_first() else {
            println!("Pronunciation: {url}");
            return Ok(());
        };
        let mut child = Command::new(program)
            .args(args)
            .arg(&url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .spawn()
            .map_err(|source| AudioError::Spawn {
                player: program.clone(),
                source,
            })?;
        tracing::debug!(%url, player = %program, "playing pronunciation");
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::warn!(%url, %status, "audio player exited unsuccessfully")
                }
                Ok(_) => {}
                Err(error) => tracing::warn!(%url, %error, "failed to wait for audio player"),
            }
        });
        Ok(())
    }
}
