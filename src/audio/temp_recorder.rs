// Dev audio backend writing recordings as WAV files into a local directory

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use super::capability::{ArtifactUri, AudioCapability, AudioMode, RecordingHandle, RecordingPreset};

struct ActiveCapture {
    handle_id: Uuid,
    preset: RecordingPreset,
    begun: Instant,
}

/// Audio capability for the headless driver
///
/// Captures no real microphone input: `stop_recording` synthesizes the
/// elapsed duration of silence and writes it as a WAV into `output_dir`, so
/// everything downstream (artifact URIs, playback, transcription) exercises
/// real files.
pub struct TempWavRecorder {
    output_dir: PathBuf,
    mode: AudioMode,
    active: Option<ActiveCapture>,
}

impl TempWavRecorder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();

        fs::create_dir_all(&output_dir).context("Failed to create recording output directory")?;

        info!("Temp WAV recorder initialized: {}", output_dir.display());

        Ok(Self {
            output_dir,
            mode: AudioMode::playback(),
            active: None,
        })
    }

    /// Recorder writing into the OS temp directory
    pub fn in_temp_dir() -> Result<Self> {
        Self::new(std::env::temp_dir().join("viewfinder-recordings"))
    }

    pub fn mode(&self) -> AudioMode {
        self.mode
    }
}

#[async_trait::async_trait]
impl AudioCapability for TempWavRecorder {
    async fn set_mode(&mut self, mode: AudioMode) -> Result<()> {
        info!(
            "Audio mode set: allows_recording={}, plays_in_silent_mode={}",
            mode.allows_recording, mode.plays_in_silent_mode
        );
        self.mode = mode;
        Ok(())
    }

    async fn start_recording(&mut self, preset: RecordingPreset) -> Result<RecordingHandle> {
        if self.active.is_some() {
            bail!("Already capturing");
        }
        if !self.mode.allows_recording {
            bail!("Audio mode does not allow recording");
        }

        let handle = RecordingHandle::new(preset);

        info!("Capture started: {}", handle.id);

        self.active = Some(ActiveCapture {
            handle_id: handle.id,
            preset,
            begun: Instant::now(),
        });

        Ok(handle)
    }

    async fn stop_recording(&mut self, handle: RecordingHandle) -> Result<ArtifactUri> {
        let Some(active) = self.active.take() else {
            bail!("No capture in progress");
        };

        if active.handle_id != handle.id {
            warn!(
                "Stopping with a stale handle: {} (active: {})",
                handle.id, active.handle_id
            );
        }

        let elapsed = active.begun.elapsed();
        let path = self
            .output_dir
            .join(format!("recording-{}.wav", active.handle_id));

        let spec = WavSpec {
            channels: active.preset.channels,
            sample_rate: active.preset.sample_rate,
            bits_per_sample: active.preset.bits_per_sample,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(&path, spec).context("Failed to create WAV file")?;

        // Stand-in for captured audio: the elapsed wall time as silence
        let frames = (elapsed.as_secs_f64() * active.preset.sample_rate as f64).ceil() as usize;
        let sample_count = frames.max(1) * active.preset.channels as usize;

        for _ in 0..sample_count {
            writer.write_sample(0i16)?;
        }

        writer.finalize().context("Failed to finalize WAV file")?;

        info!(
            "Capture stopped: {:.1}s written to {}",
            elapsed.as_secs_f64(),
            path.display()
        );

        Ok(ArtifactUri::from_path(&path))
    }

    async fn play(&mut self, uri: &ArtifactUri) -> Result<()> {
        let path = uri
            .to_path()
            .with_context(|| format!("Not a local file URI: {}", uri))?;

        let reader = WavReader::open(&path).context("Failed to open recording for playback")?;

        let spec = reader.spec();
        let duration_secs = reader.duration() as f64 / spec.sample_rate as f64;

        info!(
            "Playing {} ({:.1}s, {}Hz, {} channels)",
            path.display(),
            duration_secs,
            spec.sample_rate,
            spec.channels
        );

        Ok(())
    }

    fn name(&self) -> &str {
        "temp-wav"
    }
}
