//! The mounted showpiece: input routing, per-frame update and pose output.
//!
//! A [`Stage`] is created once per page instance. The host forwards its
//! events to [`Stage::handle_event`] and calls [`Stage::tick`] from its frame
//! callback with the elapsed seconds since the previous frame; when the tick
//! reports [`FrameOutcome::Updated`] the host renders its scene.

/// Two-bucket responsive placement.
pub mod layout;
/// Per-frame pose and the display-object seam.
pub mod transform;
pub mod viewport;

use glam::Vec2;

pub use layout::{Breakpoint, ResponsiveLayout};
pub use transform::{DisplayObject, ShowpieceTransform};
pub use viewport::ScreenRect;

use crate::asset::{AssetHandle, LoadStatus};
use crate::controller::{IdleMotion, IdleSample, RotationController};
use crate::input::{EventResponse, InputEvent, InputProcessor};
use crate::options::{Options, Placement};

/// Where the showpiece model is in its lifecycle.
pub enum ModelSlot<M> {
    /// Nothing attached yet.
    Empty,
    /// Waiting on a loader.
    Pending(AssetHandle<M>),
    /// Loaded and being driven.
    Ready(M),
    /// The loader gave up; the stage stays inert.
    Failed(String),
}

/// What a [`Stage::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No model to drive yet (or loading failed).
    Inert,
    /// The showpiece is off screen; nothing was updated.
    Culled,
    /// The pose was pushed to the model; the host should render.
    Updated,
}

impl FrameOutcome {
    /// Whether the host should render this frame.
    #[must_use]
    pub fn should_render(self) -> bool {
        self == Self::Updated
    }
}

/// One mounted showpiece instance.
pub struct Stage<M> {
    controller: RotationController,
    input: InputProcessor,
    idle: IdleMotion,
    layout: ResponsiveLayout,

    viewport: Option<Vec2>,
    bounds: Option<ScreenRect>,

    model: ModelSlot<M>,
    elapsed: f64,
    /// Bob and pulse freeze at their last values while dragging.
    last_idle: IdleSample,
    transform: ShowpieceTransform,
}

impl<M: DisplayObject> Stage<M> {
    /// Create a stage with no model attached.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut stage = Self {
            controller: RotationController::new(&options.controller),
            input: InputProcessor::new(),
            idle: IdleMotion::new(options.idle.clone()),
            layout: ResponsiveLayout::new(options.layout.clone()),
            viewport: None,
            bounds: None,
            model: ModelSlot::Empty,
            elapsed: 0.0,
            last_idle: IdleSample::REST,
            transform: ShowpieceTransform::default(),
        };
        stage.compose();
        stage
    }

    /// Size the stage for the viewport it is mounted in.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.resize(width, height);
        self
    }

    /// Attach an already-available model.
    #[must_use]
    pub fn with_model(mut self, model: M) -> Self {
        self.set_model(model);
        self
    }

    /// Replace the model with an already-available one.
    pub fn set_model(&mut self, model: M) {
        self.model = ModelSlot::Ready(model);
    }

    /// Attach a pending load; the stage polls it every tick.
    pub fn attach(&mut self, handle: AssetHandle<M>) {
        self.model = ModelSlot::Pending(handle);
    }

    /// Retune every component. Motion state is kept.
    pub fn apply_options(&mut self, options: &Options) {
        self.controller.apply_options(&options.controller);
        self.idle = IdleMotion::new(options.idle.clone());
        self.layout.set_options(options.layout.clone());
        if let Some(size) = self.viewport {
            let _ = self.layout.resize(size);
        }
        self.compose();
    }

    /// Route one host event.
    ///
    /// Pointer input is ignored until the model is ready, so the page
    /// behaves normally while the showpiece is still loading.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        match event {
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                EventResponse::PassThrough
            }
            InputEvent::Bounds {
                left,
                top,
                width,
                height,
            } => {
                self.set_bounds(ScreenRect::from_xywh(left, top, width, height));
                EventResponse::PassThrough
            }
            _ if !self.is_ready() => EventResponse::PassThrough,
            _ => self.input.handle_event(event, &mut self.controller),
        }
    }

    /// Viewport size changed. Placement snaps to the matching bucket
    /// immediately.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Vec2::new(width, height);
        if !size.is_finite() {
            return;
        }
        self.viewport = Some(size);
        if self.layout.resize(size) {
            self.compose();
        }
    }

    /// Screen rectangle of the showpiece's container changed.
    pub fn set_bounds(&mut self, bounds: ScreenRect) {
        self.bounds = Some(bounds);
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> FrameOutcome {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += f64::from(dt);
        self.poll_model();

        if !self.is_ready() {
            return FrameOutcome::Inert;
        }
        if !self.is_visible() {
            return FrameOutcome::Culled;
        }

        self.controller.tick(dt);

        let sample = self.idle.sample(self.elapsed as f32);
        if self.controller.is_dragging() {
            self.last_idle.wobble = sample.wobble;
        } else {
            self.last_idle = sample;
        }
        self.compose();

        if let ModelSlot::Ready(model) = &mut self.model {
            model.apply_transform(&self.transform);
        }
        FrameOutcome::Updated
    }

    fn poll_model(&mut self) {
        let ModelSlot::Pending(handle) = &mut self.model else {
            return;
        };
        match handle.poll() {
            LoadStatus::Pending { progress } => {
                if let Some(ratio) = progress {
                    log::trace!("showpiece model {:.0}% loaded", ratio * 100.0);
                }
            }
            LoadStatus::Loaded(model) => {
                log::info!("showpiece model loaded after {:.2}s", self.elapsed);
                self.model = ModelSlot::Ready(model);
            }
            LoadStatus::Failed(reason) => {
                log::warn!("showpiece model failed to load: {reason}");
                self.model = ModelSlot::Failed(reason);
            }
        }
    }

    fn compose(&mut self) {
        let orientation = self.controller.orientation();
        let placement = self.layout.placement();
        self.transform = ShowpieceTransform {
            pitch: orientation.pitch,
            yaw: orientation.yaw,
            roll: self.last_idle.wobble,
            scale: placement.scale * self.last_idle.pulse,
            offset_y: placement.base_offset_y + self.last_idle.bob,
        };
    }
}

impl<M> Stage<M> {
    /// Pose computed by the last update.
    #[must_use]
    pub fn transform(&self) -> ShowpieceTransform {
        self.transform
    }

    /// The rotation controller.
    #[must_use]
    pub fn controller(&self) -> &RotationController {
        &self.controller
    }

    /// Mutable access to the rotation controller (e.g. to reset the pose).
    pub fn controller_mut(&mut self) -> &mut RotationController {
        &mut self.controller
    }

    /// Placement of the current viewport bucket.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.layout.placement()
    }

    /// Current viewport bucket.
    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.layout.bucket()
    }

    /// The model, once loaded.
    #[must_use]
    pub fn model(&self) -> Option<&M> {
        match &self.model {
            ModelSlot::Ready(model) => Some(model),
            _ => None,
        }
    }

    /// Mutable access to the loaded model.
    pub fn model_mut(&mut self) -> Option<&mut M> {
        match &mut self.model {
            ModelSlot::Ready(model) => Some(model),
            _ => None,
        }
    }

    /// Whether a model is attached and loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.model, ModelSlot::Ready(_))
    }

    /// Reason the load failed, if it did.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.model {
            ModelSlot::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Whether the container overlaps the viewport.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        viewport::is_visible(self.viewport, self.bounds)
    }

    /// Seconds accumulated over all ticks.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
