use crate::audio::{ArtifactUri, RecordingHandle};
use crate::camera::CameraFacing;
use crate::permissions::{PermissionKind, PermissionStatus};

/// All mutable screen state, owned by one controller instance
#[derive(Debug, Default)]
pub struct ScreenState {
    /// Side the camera preview shows
    pub facing: CameraFacing,

    /// In-progress capture, if any (at most one, ever)
    pub session: Option<RecordingHandle>,

    /// Most recent completed recording; overwritten by the next cycle
    pub artifact: Option<ArtifactUri>,

    /// Transcription text for the current artifact
    pub transcription: Option<String>,

    /// Cached grant state per capability
    pub camera_permission: PermissionStatus,
    pub media_permission: PermissionStatus,
    pub microphone_permission: PermissionStatus,
}

impl ScreenState {
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    pub fn permission(&self, kind: PermissionKind) -> PermissionStatus {
        match kind {
            PermissionKind::Camera => self.camera_permission,
            PermissionKind::MediaLibrary => self.media_permission,
            PermissionKind::Microphone => self.microphone_permission,
        }
    }

    pub fn set_permission(&mut self, kind: PermissionKind, status: PermissionStatus) {
        match kind {
            PermissionKind::Camera => self.camera_permission = status,
            PermissionKind::MediaLibrary => self.media_permission = status,
            PermissionKind::Microphone => self.microphone_permission = status,
        }
    }
}
