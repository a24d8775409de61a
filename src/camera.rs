use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which side the camera preview shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    Front,
    Back,
}

impl CameraFacing {
    /// The opposite side
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }
}

impl Default for CameraFacing {
    fn default() -> Self {
        CameraFacing::Back
    }
}

/// Live camera preview collaborator
///
/// Rendering is the platform's business; the controller only pushes facing
/// changes down.
#[async_trait::async_trait]
pub trait CameraCapability: Send + Sync {
    /// Point the preview at the given side
    async fn set_facing(&mut self, facing: CameraFacing) -> Result<()>;

    /// Side the preview currently shows
    fn facing(&self) -> CameraFacing;

    /// Capability name for logging
    fn name(&self) -> &str;
}

/// Camera stand-in for the headless driver
///
/// Tracks the requested facing and logs transitions; renders nothing.
pub struct HeadlessCamera {
    facing: CameraFacing,
}

impl HeadlessCamera {
    pub fn new() -> Self {
        Self {
            facing: CameraFacing::default(),
        }
    }
}

impl Default for HeadlessCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CameraCapability for HeadlessCamera {
    async fn set_facing(&mut self, facing: CameraFacing) -> Result<()> {
        info!("Camera facing set to {:?}", facing);
        self.facing = facing;
        Ok(())
    }

    fn facing(&self) -> CameraFacing {
        self.facing
    }

    fn name(&self) -> &str {
        "headless"
    }
}
