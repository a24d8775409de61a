use serde::Serialize;

use crate::camera::CameraFacing;
use crate::permissions::PermissionKind;

/// Button labels and alert text (single locale for now)
pub mod labels {
    pub const FLIP_CAMERA: &str = "Flip Camera";
    pub const START_RECORDING: &str = "Start Recording";
    pub const STOP_RECORDING: &str = "Stop Recording";
    pub const PLAY_RECORDING: &str = "Play Recording";
    pub const NO_RECORDING: &str = "No recording file";
    pub const CAMERA_PROMPT: &str = "We need your permission to show the camera";
    pub const MEDIA_PROMPT: &str = "We need your permission to save photos";
}

/// User-visible alert raised by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Play was requested with no completed recording on file
    NoRecordingFile,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoRecordingFile => labels::NO_RECORDING,
        }
    }
}

/// What the screen should show
///
/// Serializable so a UI layer on any stack can bind to it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Permission state still resolving; render nothing
    Loading,

    /// Blocking prompt; nothing else renders until the grant is given
    PermissionPrompt {
        capability: PermissionKind,
        message: &'static str,
    },

    /// The live viewfinder with its controls
    Viewfinder(ViewModel),
}

/// Render model for the viewfinder screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub facing: CameraFacing,
    pub recording: bool,
    pub flip_button_label: &'static str,
    /// Toggles between start and stop with the recording state
    pub record_button_label: &'static str,
    pub play_button_label: &'static str,
    /// Shown below the controls when present
    pub transcription: Option<String>,
}
