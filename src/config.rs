use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub permissions: PermissionsConfig,
    #[serde(default)]
    pub recording: RecordingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PermissionsConfig {
    /// Block the screen until the media-library grant is given
    /// (off by default; the camera gate is always on)
    #[serde(default)]
    pub require_media_library: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordingConfig {
    /// Where recording artifacts land; OS temp dir when unset
    pub output_dir: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "viewfinder".to_string(),
            },
            permissions: PermissionsConfig::default(),
            recording: RecordingConfig::default(),
        }
    }
}
