use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Platform audio-session configuration
///
/// Set before capture starts and restored once it stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioMode {
    /// Whether the session may capture from the microphone
    pub allows_recording: bool,
    /// Keep playback audible while the device is in silent mode
    pub plays_in_silent_mode: bool,
}

impl AudioMode {
    /// Mode used while a capture is in progress
    pub fn recording() -> Self {
        Self {
            allows_recording: true,
            plays_in_silent_mode: true,
        }
    }

    /// Mode used outside of capture
    pub fn playback() -> Self {
        Self {
            allows_recording: false,
            plays_in_silent_mode: false,
        }
    }
}

/// Capture quality settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingPreset {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl RecordingPreset {
    /// The fixed preset every recording uses (44.1kHz stereo, 16-bit)
    pub fn high_quality() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            bits_per_sample: 16,
        }
    }
}

/// Handle for an in-progress capture
///
/// Live only between `start_recording` and `stop_recording`; at most one
/// exists at any time.
#[derive(Debug, Clone)]
pub struct RecordingHandle {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub preset: RecordingPreset,
}

impl RecordingHandle {
    pub fn new(preset: RecordingPreset) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            preset,
        }
    }
}

/// Opaque URI of a completed recording
///
/// Points at OS-managed storage; the app keeps at most one live reference
/// and never inspects the contents itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactUri(String);

impl ArtifactUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(format!("file://{}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local filesystem path, for `file://` URIs only
    pub fn to_path(&self) -> Option<PathBuf> {
        self.0.strip_prefix("file://").map(PathBuf::from)
    }
}

impl fmt::Display for ArtifactUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Audio capture and playback collaborator
///
/// Implementations wrap whatever the platform provides; encoding, file
/// placement, and player internals stay on their side of the seam.
#[async_trait::async_trait]
pub trait AudioCapability: Send + Sync {
    /// Reconfigure the platform audio session
    async fn set_mode(&mut self, mode: AudioMode) -> Result<()>;

    /// Begin capturing; fails if a capture is already running
    async fn start_recording(&mut self, preset: RecordingPreset) -> Result<RecordingHandle>;

    /// Finish capturing and return the artifact URI
    async fn stop_recording(&mut self, handle: RecordingHandle) -> Result<ArtifactUri>;

    /// Play an artifact once, on a fresh player
    async fn play(&mut self, uri: &ArtifactUri) -> Result<()>;

    /// Capability name for logging
    fn name(&self) -> &str;
}
