//! Sound dispatch
//!
//! Playback is fire-and-forget: every request runs on its own detached
//! thread and nothing about its outcome flows back into the simulation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use thiserror::Error;

use crate::sim::GameEvent;

/// Failures reported by an audio backend
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound asset not found: {}", .0.display())]
    MissingAsset(PathBuf),
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball fell through the floor
    GameOver,
    /// Winning score reached
    Victory,
}

impl SoundEffect {
    pub fn asset_path(&self) -> &'static Path {
        match self {
            SoundEffect::GameOver => Path::new("assets/sounds/game_over.wav"),
            SoundEffect::Victory => Path::new("assets/sounds/victory.wav"),
        }
    }

    /// Sound played for a tick event, if any
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::BallLost => Some(SoundEffect::GameOver),
            GameEvent::RoundWon => Some(SoundEffect::Victory),
            GameEvent::PaddleHit { .. }
            | GameEvent::BlockHit { .. }
            | GameEvent::WallBounce
            | GameEvent::CeilingBounce => None,
        }
    }
}

/// Audio playback backend. Implementations may block; they run off the
/// simulation thread.
pub trait AudioSink: Send + Sync {
    fn play(&self, path: &Path, volume: f32) -> Result<(), AudioError>;
}

/// Backend for headless runs: checks the asset exists, then logs the request
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&self, path: &Path, volume: f32) -> Result<(), AudioError> {
        if !path.is_file() {
            return Err(AudioError::MissingAsset(path.to_path_buf()));
        }
        log::info!("Playing {} at volume {volume:.2}", path.display());
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Arc<dyn AudioSink>,
    master_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Arc<dyn AudioSink>) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            muted: false,
        }
    }

    /// A manager that never plays anything
    pub fn silent() -> Self {
        let mut manager = Self::new(Arc::new(LogSink));
        manager.muted = true;
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Request a sound and return immediately.
    ///
    /// The spawned thread is never joined; sink failures are only logged.
    pub fn play(&self, effect: SoundEffect) {
        if self.muted || self.master_volume <= 0.0 {
            return;
        }

        let sink = Arc::clone(&self.sink);
        let volume = self.master_volume;
        let spawned = thread::Builder::new()
            .name(format!("audio-{effect:?}"))
            .spawn(move || {
                let path = effect.asset_path();
                if let Err(err) = sink.play(path, volume) {
                    log::warn!("Sound {effect:?} failed: {err}");
                }
            });

        if let Err(err) = spawned {
            log::warn!("Could not start audio thread for {effect:?}: {err}");
        }
    }
}
