//! Scripted gesture replay for tuning the interaction without a browser.
//!
//! A script is a TOML file listing input events interleaved with runs of
//! frames:
//!
//! ```toml
//! frame_dt = 0.016
//! viewport = [1280.0, 800.0]
//!
//! [[steps]]
//! kind = "pointer_down"
//! x = 100.0
//! y = 100.0
//! time_ms = 0.0
//!
//! [[steps]]
//! kind = "pointer_move"
//! x = 150.0
//! y = 120.0
//! time_ms = 16.0
//!
//! [[steps]]
//! kind = "pointer_up"
//!
//! [[steps]]
//! frames = 120
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ToqueError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::stage::{DisplayObject, FrameOutcome, ShowpieceTransform, Stage};

/// One script step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Tick the stage this many times.
    Frames {
        /// Number of frames.
        frames: u32,
    },
    /// Deliver one input event.
    Event(InputEvent),
}

/// A parsed gesture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Seconds per frame.
    #[serde(default = "default_frame_dt")]
    pub frame_dt: f32,
    /// Options preset, relative to the script's directory.
    #[serde(default)]
    pub options: Option<PathBuf>,
    /// Viewport size delivered as a resize before the first step.
    #[serde(default)]
    pub viewport: Option<[f32; 2]>,
    /// Steps in order.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

fn default_frame_dt() -> f32 {
    1.0 / 60.0
}

/// State after one replayed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaySample {
    /// Frame index from the start of the script.
    pub frame: u64,
    /// Stage time after the frame, in seconds.
    pub time: f64,
    /// What the tick did.
    pub outcome: FrameOutcome,
    /// Pose after the frame.
    pub transform: ShowpieceTransform,
}

impl GestureScript {
    /// Parse a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ToqueError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ToqueError::Script(e.to_string()))?;
        if !script.frame_dt.is_finite() || script.frame_dt <= 0.0 {
            return Err(ToqueError::Script(format!(
                "frame_dt must be positive, got {}",
                script.frame_dt
            )));
        }
        Ok(script)
    }

    /// Load a script file.
    pub fn load(path: &Path) -> Result<Self, ToqueError> {
        let content = std::fs::read_to_string(path).map_err(ToqueError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Options named by the script, or defaults.
    pub fn resolve_options(&self, script_dir: &Path) -> Result<Options, ToqueError> {
        match &self.options {
            Some(path) => Options::load(&script_dir.join(path)),
            None => Ok(Options::default()),
        }
    }

    /// Total number of frames the script ticks.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                ScriptStep::Frames { frames } => u64::from(*frames),
                ScriptStep::Event(_) => 0,
            })
            .fold(0, u64::saturating_add)
    }
}

/// Play `script` against `stage`, returning one sample per frame.
pub fn run_script<M: DisplayObject>(
    script: &GestureScript,
    stage: &mut Stage<M>,
) -> Vec<ReplaySample> {
    if let Some([width, height]) = script.viewport {
        stage.resize(width, height);
    }

    let mut samples = Vec::new();
    let mut frame = 0;
    for step in &script.steps {
        match step {
            ScriptStep::Event(event) => {
                let response = stage.handle_event(*event);
                log::debug!("{event:?} -> {response:?}");
            }
            ScriptStep::Frames { frames } => {
                for _ in 0..*frames {
                    let outcome = stage.tick(script.frame_dt);
                    samples.push(ReplaySample {
                        frame,
                        time: stage.elapsed(),
                        outcome,
                        transform: stage.transform(),
                    });
                    frame += 1;
                }
            }
        }
    }
    samples
}
