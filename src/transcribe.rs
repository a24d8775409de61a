use anyhow::Result;

use crate::audio::ArtifactUri;

/// Text the placeholder service returns for every artifact
pub const PLACEHOLDER_TRANSCRIPTION: &str =
    "This is a placeholder transcription for demo purposes.";

/// Speech-to-text collaborator
///
/// This is the seam where a real transcription backend plugs in; the shipped
/// implementation is a stub.
#[async_trait::async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Transcribe the recording behind `uri`
    async fn transcribe(&self, uri: &ArtifactUri) -> Result<String>;
}

/// Stub transcriber returning a fixed string for any input
pub struct PlaceholderTranscriber;

#[async_trait::async_trait]
impl TranscriptionService for PlaceholderTranscriber {
    async fn transcribe(&self, _uri: &ArtifactUri) -> Result<String> {
        Ok(PLACEHOLDER_TRANSCRIPTION.to_string())
    }
}
