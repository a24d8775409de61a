pub mod capability;
pub mod temp_recorder;

pub use capability::{ArtifactUri, AudioCapability, AudioMode, RecordingHandle, RecordingPreset};
pub use temp_recorder::TempWavRecorder;
