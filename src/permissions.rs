use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

/// Device capability guarded by an OS permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    Camera,
    MediaLibrary,
    Microphone,
}

/// Grant state of a single permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    /// Never asked (or still resolving)
    Unknown,
    Denied,
    Granted,
}

impl Default for PermissionStatus {
    fn default() -> Self {
        PermissionStatus::Unknown
    }
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Seam to the platform's permission dialogs
///
/// `request` may pop a native dialog and resolves to the user's answer.
/// Answers are booleans on the platform side; `Unknown` only exists before
/// the first request.
#[async_trait::async_trait]
pub trait PermissionBroker: Send + Sync {
    /// Current grant state, without prompting
    async fn status(&self, kind: PermissionKind) -> PermissionStatus;

    /// Prompt for a grant and return the answer
    async fn request(&mut self, kind: PermissionKind) -> Result<PermissionStatus>;
}

/// Per-kind counters of how often a dialog was requested
///
/// Shared between a `ScriptedPermissions` broker and whoever handed it off
/// (clone the `Arc` before boxing the broker).
#[derive(Debug, Default)]
pub struct RequestLog {
    camera: AtomicUsize,
    media_library: AtomicUsize,
    microphone: AtomicUsize,
}

impl RequestLog {
    pub fn count(&self, kind: PermissionKind) -> usize {
        self.counter(kind).load(Ordering::SeqCst)
    }

    fn bump(&self, kind: PermissionKind) {
        self.counter(kind).fetch_add(1, Ordering::SeqCst);
    }

    fn counter(&self, kind: PermissionKind) -> &AtomicUsize {
        match kind {
            PermissionKind::Camera => &self.camera,
            PermissionKind::MediaLibrary => &self.media_library,
            PermissionKind::Microphone => &self.microphone,
        }
    }
}

/// Broker with scripted answers, for the headless driver and tests
///
/// Every kind starts `Unknown`. A request resolves to the configured answer
/// (`Granted` unless overridden), caches it as the new status, and bumps the
/// request log.
pub struct ScriptedPermissions {
    default_answer: PermissionStatus,
    answers: HashMap<PermissionKind, PermissionStatus>,
    statuses: HashMap<PermissionKind, PermissionStatus>,
    log: Arc<RequestLog>,
}

impl ScriptedPermissions {
    /// Broker whose every request resolves to `Granted`
    pub fn granting_all() -> Self {
        Self {
            default_answer: PermissionStatus::Granted,
            answers: HashMap::new(),
            statuses: HashMap::new(),
            log: Arc::new(RequestLog::default()),
        }
    }

    /// Answer `status` whenever `kind` is requested
    pub fn respond_with(mut self, kind: PermissionKind, status: PermissionStatus) -> Self {
        self.answers.insert(kind, status);
        self
    }

    /// Start with a grant state already on record, as if answered in a
    /// previous run (no dialog needed to reach it)
    pub fn preset(mut self, kind: PermissionKind, status: PermissionStatus) -> Self {
        self.statuses.insert(kind, status);
        self
    }

    /// Shared request counters
    pub fn request_log(&self) -> Arc<RequestLog> {
        Arc::clone(&self.log)
    }
}

#[async_trait::async_trait]
impl PermissionBroker for ScriptedPermissions {
    async fn status(&self, kind: PermissionKind) -> PermissionStatus {
        self.statuses.get(&kind).copied().unwrap_or_default()
    }

    async fn request(&mut self, kind: PermissionKind) -> Result<PermissionStatus> {
        let answer = self
            .answers
            .get(&kind)
            .copied()
            .unwrap_or(self.default_answer);

        self.log.bump(kind);
        self.statuses.insert(kind, answer);

        info!("Permission request: {:?} -> {:?}", kind, answer);

        Ok(answer)
    }
}
