pub mod audio;
pub mod camera;
pub mod config;
pub mod controller;
pub mod permissions;
pub mod transcribe;

pub use audio::{
    ArtifactUri, AudioCapability, AudioMode, RecordingHandle, RecordingPreset, TempWavRecorder,
};
pub use camera::{CameraCapability, CameraFacing, HeadlessCamera};
pub use config::Config;
pub use controller::{labels, ControllerOptions, InteractionController, Notice, Screen, ViewModel};
pub use permissions::{
    PermissionBroker, PermissionKind, PermissionStatus, RequestLog, ScriptedPermissions,
};
pub use transcribe::{PlaceholderTranscriber, TranscriptionService, PLACEHOLDER_TRANSCRIPTION};
