//! The interaction layer: one controller driving the capture screen
//!
//! - camera and media-library permission acquisition at mount
//! - camera facing toggle
//! - record -> stop -> play lifecycle against the audio capability
//! - transcription of the latest clip (stub service by default)
//!
//! All state lives in the controller instance and is recreated per run;
//! nothing persists beyond the OS-managed recording file.

mod interaction;
mod state;
mod view;

pub use interaction::{ControllerOptions, InteractionController};
pub use state::ScreenState;
pub use view::{labels, Notice, Screen, ViewModel};
