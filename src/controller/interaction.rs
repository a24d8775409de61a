use anyhow::{Context, Result};
use tracing::{error, info, warn};

use super::state::ScreenState;
use super::view::{labels, Notice, Screen, ViewModel};
use crate::audio::{ArtifactUri, AudioCapability, AudioMode, RecordingPreset};
use crate::camera::{CameraCapability, CameraFacing};
use crate::permissions::{PermissionBroker, PermissionKind, PermissionStatus};
use crate::transcribe::TranscriptionService;

/// Permission gating knobs
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerOptions {
    /// Block the screen until the media-library grant is given
    ///
    /// Off by default: the screen normally proceeds regardless of the
    /// media-library answer.
    pub require_media_library: bool,
}

/// Drives the capture screen: permission acquisition at mount, the camera
/// flip, the record/stop/play lifecycle, and transcription of the latest
/// clip.
///
/// Every operation runs on one sequential flow (`&mut self`); capability
/// calls may suspend, and once issued they run to completion or failure (no
/// cancellation, no timeouts, no retry). Failure policy follows the screen's
/// behavior: record-start and playback failures are logged and swallowed,
/// and the only user-visible alert is playing with no recording on file.
pub struct InteractionController {
    permissions: Box<dyn PermissionBroker>,
    camera: Box<dyn CameraCapability>,
    audio: Box<dyn AudioCapability>,
    transcriber: Box<dyn TranscriptionService>,
    options: ControllerOptions,
    state: ScreenState,
    notices: Vec<Notice>,
}

impl InteractionController {
    pub fn new(
        permissions: Box<dyn PermissionBroker>,
        camera: Box<dyn CameraCapability>,
        audio: Box<dyn AudioCapability>,
        transcriber: Box<dyn TranscriptionService>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            permissions,
            camera,
            audio,
            transcriber,
            options,
            state: ScreenState::default(),
            notices: Vec::new(),
        }
    }

    /// Acquire the camera and media-library grants, as the screen does on
    /// mount
    ///
    /// The microphone is not touched here; it is requested lazily on the
    /// first record tap.
    pub async fn mount(&mut self) -> Result<()> {
        for kind in [PermissionKind::Camera, PermissionKind::MediaLibrary] {
            let current = self.permissions.status(kind).await;

            let status = if current.is_granted() {
                current
            } else {
                self.permissions
                    .request(kind)
                    .await
                    .with_context(|| format!("Permission request failed: {:?}", kind))?
            };

            self.state.set_permission(kind, status);
        }

        info!(
            "Mounted: camera={:?}, media_library={:?}",
            self.state.camera_permission, self.state.media_permission
        );

        Ok(())
    }

    /// Re-issue the camera request from the blocking prompt's button
    pub async fn grant_camera(&mut self) -> Result<()> {
        let status = self
            .permissions
            .request(PermissionKind::Camera)
            .await
            .context("Permission request failed: Camera")?;

        self.state.set_permission(PermissionKind::Camera, status);

        Ok(())
    }

    /// Render model for the current state
    pub fn screen(&self) -> Screen {
        match self.state.camera_permission {
            PermissionStatus::Unknown => return Screen::Loading,
            PermissionStatus::Denied => {
                return Screen::PermissionPrompt {
                    capability: PermissionKind::Camera,
                    message: labels::CAMERA_PROMPT,
                }
            }
            PermissionStatus::Granted => {}
        }

        if self.options.require_media_library
            && self.state.media_permission == PermissionStatus::Denied
        {
            return Screen::PermissionPrompt {
                capability: PermissionKind::MediaLibrary,
                message: labels::MEDIA_PROMPT,
            };
        }

        Screen::Viewfinder(ViewModel {
            facing: self.state.facing,
            recording: self.state.is_recording(),
            flip_button_label: labels::FLIP_CAMERA,
            record_button_label: if self.state.is_recording() {
                labels::STOP_RECORDING
            } else {
                labels::START_RECORDING
            },
            play_button_label: labels::PLAY_RECORDING,
            transcription: self.state.transcription.clone(),
        })
    }

    /// Flip between the front and back camera
    pub async fn toggle_camera_facing(&mut self) {
        self.state.facing = self.state.facing.toggled();

        if let Err(e) = self.camera.set_facing(self.state.facing).await {
            error!("Failed to update camera facing: {}", e);
        }
    }

    /// The single record button: start when idle, stop when recording
    pub async fn toggle_recording(&mut self) {
        if self.state.is_recording() {
            self.stop_recording().await;
        } else {
            self.start_recording().await;
        }
    }

    /// Begin a capture
    ///
    /// Any failure here (microphone denied, audio-session misconfiguration,
    /// backend refusal) aborts the transition with a log line only.
    pub async fn start_recording(&mut self) {
        // Guarded transition: never a second capture while one is live
        if self.state.is_recording() {
            warn!("Recording already in progress, ignoring start");
            return;
        }

        if !self.ensure_microphone_grant().await {
            return;
        }

        if let Err(e) = self.audio.set_mode(AudioMode::recording()).await {
            error!("Failed to configure audio session: {}", e);
            return;
        }

        info!("Starting recording");

        match self
            .audio
            .start_recording(RecordingPreset::high_quality())
            .await
        {
            Ok(handle) => {
                info!("Recording started: {}", handle.id);
                self.state.session = Some(handle);
            }
            Err(e) => {
                error!("Failed to start recording: {}", e);
            }
        }
    }

    /// Finish the capture and keep its artifact; no-op when idle
    pub async fn stop_recording(&mut self) {
        let Some(handle) = self.state.session.take() else {
            info!("Stop requested with no active recording, ignoring");
            return;
        };

        info!("Stopping recording: {}", handle.id);

        let stopped = self.audio.stop_recording(handle).await;

        if let Err(e) = self.audio.set_mode(AudioMode::playback()).await {
            error!("Failed to restore audio session: {}", e);
        }

        match stopped {
            Ok(uri) => {
                info!("Recording stopped and stored at {}", uri);
                // Stale text belongs to the previous clip
                self.state.transcription = None;
                self.state.artifact = Some(uri);
            }
            Err(e) => {
                error!("Failed to stop recording: {}", e);
            }
        }
    }

    /// Play the latest clip once on a fresh player
    ///
    /// The missing-artifact case is the one user-visible alert on this
    /// screen; playback failures only reach the log.
    pub async fn play_recording(&mut self) {
        let Some(uri) = self.state.artifact.clone() else {
            warn!("Play requested with no recording on file");
            self.notices.push(Notice::NoRecordingFile);
            return;
        };

        if let Err(e) = self.audio.play(&uri).await {
            error!("Failed to play recording {}: {}", uri, e);
        }
    }

    /// Run the transcription service against the latest clip
    pub async fn transcribe_recording(&mut self) {
        let Some(uri) = self.state.artifact.clone() else {
            info!("Transcription requested with no recording on file, ignoring");
            return;
        };

        match self.transcriber.transcribe(&uri).await {
            Ok(text) => {
                info!("Transcription received ({} chars)", text.len());
                self.state.transcription = Some(text);
            }
            Err(e) => {
                error!("Failed to transcribe recording: {}", e);
            }
        }
    }

    /// Drain pending user-visible alerts for the UI layer
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn facing(&self) -> CameraFacing {
        self.state.facing
    }

    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    pub fn artifact(&self) -> Option<&ArtifactUri> {
        self.state.artifact.as_ref()
    }

    pub fn transcription(&self) -> Option<&str> {
        self.state.transcription.as_deref()
    }

    pub fn permission(&self, kind: PermissionKind) -> PermissionStatus {
        self.state.permission(kind)
    }

    /// Request the microphone grant if we do not hold it yet
    ///
    /// Returns whether recording may proceed. Denial aborts silently: the
    /// screen shows nothing, the log carries the reason.
    async fn ensure_microphone_grant(&mut self) -> bool {
        if self.state.microphone_permission.is_granted() {
            return true;
        }

        info!("Requesting microphone permission");

        match self.permissions.request(PermissionKind::Microphone).await {
            Ok(status) => {
                self.state
                    .set_permission(PermissionKind::Microphone, status);

                if status.is_granted() {
                    true
                } else {
                    error!("Microphone permission denied, aborting recording start");
                    false
                }
            }
            Err(e) => {
                error!("Microphone permission request failed: {}", e);
                false
            }
        }
    }
}
