use std::{cell::RefCell, collections::HashMap, rc::Rc};

use flappy_core::{AdapterError, AudioAdapter, Sound};

#[derive(Debug, Default)]
struct Mixer {
    preloaded: HashMap<Sound, String>,
    played: Vec<Sound>,
    stopped: Vec<Sound>,
    volumes: HashMap<Sound, f32>,
    muted: bool,
}

/// Audio adapter that records requests instead of producing sound.
///
/// Clones share one log, so a driver can keep a handle after moving the
/// adapter into the audio system.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    mixer: Rc<RefCell<Mixer>>,
}

impl RecordingAudio {
    /// Creates an adapter with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `play_sound` call fail.
    pub fn mute(&self) {
        self.mixer.borrow_mut().muted = true;
    }

    /// Sounds played so far, oldest first.
    #[must_use]
    pub fn played(&self) -> Vec<Sound> {
        self.mixer.borrow().played.clone()
    }

    /// Sounds stopped so far, oldest first.
    #[must_use]
    pub fn stopped(&self) -> Vec<Sound> {
        self.mixer.borrow().stopped.clone()
    }

    /// Asset path registered for `sound`, if any.
    #[must_use]
    pub fn preloaded_path(&self, sound: Sound) -> Option<String> {
        self.mixer.borrow().preloaded.get(&sound).cloned()
    }

    /// Volume configured for `sound`, if any.
    #[must_use]
    pub fn volume(&self, sound: Sound) -> Option<f32> {
        self.mixer.borrow().volumes.get(&sound).copied()
    }
}

impl AudioAdapter for RecordingAudio {
    fn preload_sound(&mut self, sound: Sound, path: &str) -> Result<(), AdapterError> {
        let _ = self
            .mixer
            .borrow_mut()
            .preloaded
            .insert(sound, path.to_owned());
        Ok(())
    }

    fn play_sound(&mut self, sound: Sound) -> Result<(), AdapterError> {
        let mut mixer = self.mixer.borrow_mut();
        if mixer.muted {
            return Err(AdapterError::Audio {
                sound,
                reason: String::from("output muted"),
            });
        }
        mixer.played.push(sound);
        Ok(())
    }

    fn stop_sound(&mut self, sound: Sound) -> Result<(), AdapterError> {
        self.mixer.borrow_mut().stopped.push(sound);
        Ok(())
    }

    fn set_volume(&mut self, sound: Sound, volume: f32) -> Result<(), AdapterError> {
        let _ = self
            .mixer
            .borrow_mut()
            .volumes
            .insert(sound, volume.clamp(0.0, 1.0));
        Ok(())
    }
}
