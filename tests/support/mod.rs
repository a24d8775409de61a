//! Mock capabilities for controller tests
//!
//! These stand in for the platform-side collaborators so the interaction
//! state machine can be exercised without devices.

use anyhow::{bail, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use viewfinder::{
    ArtifactUri, AudioCapability, AudioMode, RecordingHandle, RecordingPreset,
};

/// Call log shared between a `MockAudio` and the test body
#[derive(Debug, Default)]
pub struct AudioCalls {
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub plays: AtomicUsize,
    pub modes: Mutex<Vec<AudioMode>>,
}

impl AudioCalls {
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }

    pub fn modes(&self) -> Vec<AudioMode> {
        self.modes.lock().unwrap().clone()
    }
}

/// Audio capability that records calls and returns a fixed artifact URI
pub struct MockAudio {
    calls: Arc<AudioCalls>,
    artifact: ArtifactUri,
    fail_start: bool,
}

impl MockAudio {
    pub fn new(uri: &str) -> (Self, Arc<AudioCalls>) {
        let calls = Arc::new(AudioCalls::default());
        (
            Self {
                calls: Arc::clone(&calls),
                artifact: ArtifactUri::new(uri),
                fail_start: false,
            },
            calls,
        )
    }

    /// Mock whose `start_recording` always refuses
    pub fn failing_start(uri: &str) -> (Self, Arc<AudioCalls>) {
        let (mut mock, calls) = Self::new(uri);
        mock.fail_start = true;
        (mock, calls)
    }
}

#[async_trait::async_trait]
impl AudioCapability for MockAudio {
    async fn set_mode(&mut self, mode: AudioMode) -> Result<()> {
        self.calls.modes.lock().unwrap().push(mode);
        Ok(())
    }

    async fn start_recording(&mut self, preset: RecordingPreset) -> Result<RecordingHandle> {
        self.calls.starts.fetch_add(1, Ordering::SeqCst);
        if self.fail_start {
            bail!("backend refused to start");
        }
        Ok(RecordingHandle::new(preset))
    }

    async fn stop_recording(&mut self, _handle: RecordingHandle) -> Result<ArtifactUri> {
        self.calls.stops.fetch_add(1, Ordering::SeqCst);
        Ok(self.artifact.clone())
    }

    async fn play(&mut self, _uri: &ArtifactUri) -> Result<()> {
        self.calls.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
