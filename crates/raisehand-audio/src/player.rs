use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use raisehand_overlay::{PlaybackError, SoundCue, SoundPlayer};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::tones::{self, Tone};

/// [`SoundPlayer`] backed by the default audio output device.
pub struct RodioSoundPlayer {
    /// Output stream, kept alive for as long as sounds may be played.
    /// `None` when audio is disabled.
    stream: Option<OutputStream>,
    /// Sound files overriding the synthesized chimes.
    cue_files: HashMap<SoundCue, PathBuf>,
    volume: f32,
}

impl RodioSoundPlayer {
    /// Opens the default output device.
    pub fn new(cue_files: HashMap<SoundCue, PathBuf>, volume: f32) -> Result<Self, PlaybackError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Unavailable(e.to_string()))?;

        Ok(Self {
            stream: Some(stream),
            cue_files,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    /// Creates a player without an output device. Every call fails, which
    /// the feedback policy treats like any other playback fault.
    pub fn disabled() -> Self {
        Self {
            stream: None,
            cue_files: HashMap::new(),
            volume: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.stream.is_some()
    }

    /// Replaces the cue files and the volume, keeping the output device.
    pub fn configure(&mut self, cue_files: HashMap<SoundCue, PathBuf>, volume: f32) {
        self.cue_files = cue_files;
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// File played for `cue`, if one is configured.
    pub fn cue_file(&self, cue: SoundCue) -> Option<&Path> {
        self.cue_files.get(&cue).map(PathBuf::as_path)
    }

    fn sink(&self) -> Result<Sink, PlaybackError> {
        match &self.stream {
            Some(stream) => Ok(Sink::connect_new(stream.mixer())),
            None => Err(PlaybackError::Unavailable("audio output is disabled".into())),
        }
    }

    fn play_tones(&self, tones: &[Tone]) -> Result<(), PlaybackError> {
        let sink = self.sink()?;
        for tone in tones {
            let source = rodio::source::SineWave::new(tone.frequency)
                .take_duration(tone.duration)
                .amplify(self.volume * crate::TONE_GAIN);
            sink.append(source);
        }
        // keep playing after the handle is gone
        sink.detach();
        Ok(())
    }

    fn play_file(&self, cue: SoundCue, path: &Path) -> Result<(), PlaybackError> {
        let decode_error = |reason: String| PlaybackError::Decode {
            name: format!("{} ({})", cue.name(), path.display()),
            reason,
        };

        let file = File::open(path).map_err(|e| decode_error(e.to_string()))?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| decode_error(e.to_string()))?;

        let sink = self.sink()?;
        sink.append(source.amplify(self.volume));
        sink.detach();
        Ok(())
    }
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlaybackError> {
        match self.cue_files.get(&cue) {
            Some(path) => self.play_file(cue, path),
            None => self.play_tones(tones::chime(cue)),
        }
    }

    fn play_alert(&mut self) -> Result<(), PlaybackError> {
        self.play_tones(tones::alert())
    }
}

impl Default for RodioSoundPlayer {
    fn default() -> Self {
        Self::new(HashMap::new(), crate::DEFAULT_VOLUME).unwrap_or_else(|e| {
            log::warn!("Failed to open audio output: {e}");
            Self::disabled()
        })
    }
}
