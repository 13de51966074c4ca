/// Background music for the menu.
///
/// Wraps an optional SDL2_mixer track. A track that failed to open is
/// reported once and the menu carries on silently; every call on a silent
/// track is a no-op.
use log::{info, warn};
use sdl2::mixer::Music;
use std::path::Path;

/// Play forever
const LOOP_FOREVER: i32 = -1;

/// Music playback as seen by the menu
pub trait MenuAudio {
    /// Start the track on an endless loop
    fn play_looped(&mut self);

    /// Halt the track if it is playing
    fn stop(&mut self);
}

pub struct MenuMusic {
    track: Option<Music<'static>>,
    volume: i32,
    playing: bool,
}

impl MenuMusic {
    /// Open a track from a file; falls back to silence if it can't be loaded
    pub fn open(path: impl AsRef<Path>, volume: i32) -> Self {
        let path = path.as_ref();
        match Music::from_file(path) {
            Ok(track) => {
                info!("Loaded menu music from {}", path.display());
                MenuMusic {
                    track: Some(track),
                    volume: volume.clamp(0, 128),
                    playing: false,
                }
            }
            Err(e) => {
                warn!("Unable to load the menu music ({}): {}", path.display(), e);
                Self::silent()
            }
        }
    }

    /// A track that never plays
    pub fn silent() -> Self {
        MenuMusic {
            track: None,
            volume: 0,
            playing: false,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.track.is_none()
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl MenuAudio for MenuMusic {
    fn play_looped(&mut self) {
        let Some(track) = &self.track else {
            return;
        };

        Music::set_volume(self.volume);
        match track.play(LOOP_FOREVER) {
            Ok(()) => self.playing = true,
            Err(e) => warn!("Unable to play the menu music: {}", e),
        }
    }

    fn stop(&mut self) {
        if self.playing {
            Music::halt();
            self.playing = false;
        }
    }
}
