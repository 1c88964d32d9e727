//! Browser binding.
//!
//! The page script keeps its WebGL scene graph and model loader, and calls
//! into a [`WebShowpiece`] from its event listeners and frame callback:
//!
//! ```js
//! const showpiece = new WebShowpiece();
//! loader.load(url, (gltf) => { scene.add(gltf.scene); showpiece.modelLoaded(gltf.scene); },
//!   (xhr) => showpiece.modelProgress(xhr.loaded, xhr.total),
//!   (err) => showpiece.modelFailed(String(err)));
//! const syncBounds = () => {
//!   const r = container.getBoundingClientRect();
//!   showpiece.setBounds(r.left, r.top, r.width, r.height);
//! };
//! window.addEventListener("scroll", syncBounds, { passive: true });
//! window.addEventListener("resize", () => {
//!   showpiece.resize(window.innerWidth, window.innerHeight);
//!   syncBounds();
//! });
//! syncBounds();
//! canvas.addEventListener("mousedown", (e) => {
//!   if (showpiece.pointerDown(e.clientX, e.clientY, e.button, e.timeStamp)) e.preventDefault();
//! });
//! function animate(time) {
//!   requestAnimationFrame(animate);
//!   if (showpiece.frame(time)) renderer.render(scene, camera);
//! }
//! ```

use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::asset::{self, AssetReporter};
use crate::input::{InputEvent, MouseButton};
use crate::options::{Options, PageOptions};
use crate::page::{self, IntroOverlay};
use crate::stage::{DisplayObject, ShowpieceTransform, Stage};
use crate::util::FrameClock;

const SEEN_INTRO_KEY: &str = "hasSeenIntro";

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A scene-graph node owned by the page script, driven through its
/// `rotation`, `scale` and `position` vector properties.
pub struct JsObject3d {
    node: JsValue,
}

impl JsObject3d {
    fn write(&self, t: &ShowpieceTransform) -> Result<(), JsValue> {
        let rotation = Reflect::get(&self.node, &JsValue::from_str("rotation"))?;
        set_number(&rotation, "x", t.pitch)?;
        set_number(&rotation, "y", t.yaw)?;
        set_number(&rotation, "z", t.roll)?;

        let scale = Reflect::get(&self.node, &JsValue::from_str("scale"))?;
        for axis in ["x", "y", "z"] {
            set_number(&scale, axis, t.scale)?;
        }

        let position = Reflect::get(&self.node, &JsValue::from_str("position"))?;
        set_number(&position, "y", t.offset_y)
    }
}

impl DisplayObject for JsObject3d {
    fn apply_transform(&mut self, transform: &ShowpieceTransform) {
        if let Err(e) = self.write(transform) {
            log::warn!("failed to update showpiece node: {e:?}");
        }
    }
}

fn set_number(target: &JsValue, key: &str, value: f32) -> Result<(), JsValue> {
    let _ = Reflect::set(
        target,
        &JsValue::from_str(key),
        &JsValue::from_f64(f64::from(value)),
    )?;
    Ok(())
}

/// The interactive showpiece, as seen from the page script.
///
/// Pointer methods return `true` when the script should call
/// `preventDefault()` on the event.
#[wasm_bindgen]
pub struct WebShowpiece {
    stage: Stage<JsObject3d>,
    reporter: AssetReporter<JsObject3d>,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebShowpiece {
    /// Create a showpiece waiting for its model. `options_toml` overrides
    /// the default tuning.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<WebShowpiece, JsValue> {
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Options::default(),
        };
        let (reporter, handle) = asset::channel();
        let mut stage = Stage::new(&options);
        match window_size() {
            Some((width, height)) => stage = stage.with_viewport(width, height),
            None => log::warn!("window size unavailable, using wide placement"),
        }
        stage.attach(handle);
        Ok(Self {
            stage,
            reporter,
            clock: FrameClock::default(),
        })
    }

    /// Model loader progress callback.
    #[wasm_bindgen(js_name = "modelProgress")]
    pub fn model_progress(&self, loaded: f64, total: f64) {
        if total > 0.0 {
            self.reporter.progress((loaded / total) as f32);
        }
    }

    /// Model loader success callback; `node` is the loaded scene node.
    #[wasm_bindgen(js_name = "modelLoaded")]
    pub fn model_loaded(&self, node: JsValue) {
        self.reporter.loaded(JsObject3d { node });
    }

    /// Model loader error callback.
    #[wasm_bindgen(js_name = "modelFailed")]
    pub fn model_failed(&self, reason: String) {
        self.reporter.failed(reason);
    }

    /// `mousedown` on the canvas.
    #[wasm_bindgen(js_name = "pointerDown")]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16, time_ms: f64) -> bool {
        self.dispatch(InputEvent::PointerDown {
            x,
            y,
            button: MouseButton::from_dom(button),
            time_ms,
        })
    }

    /// `mousemove` on the window.
    #[wasm_bindgen(js_name = "pointerMove")]
    pub fn pointer_move(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        self.dispatch(InputEvent::PointerMove { x, y, time_ms })
    }

    /// `mouseup` on the window.
    #[wasm_bindgen(js_name = "pointerUp")]
    pub fn pointer_up(&mut self) -> bool {
        self.dispatch(InputEvent::PointerUp)
    }

    /// `touchstart` on the canvas; `x`/`y` are the first touch point.
    #[wasm_bindgen(js_name = "touchStart")]
    pub fn touch_start(&mut self, touches: u32, x: f32, y: f32, time_ms: f64) -> bool {
        self.dispatch(InputEvent::TouchStart {
            touches,
            x,
            y,
            time_ms,
        })
    }

    /// `touchmove` on the window; `x`/`y` are the first touch point.
    #[wasm_bindgen(js_name = "touchMove")]
    pub fn touch_move(&mut self, touches: u32, x: f32, y: f32, time_ms: f64) -> bool {
        self.dispatch(InputEvent::TouchMove {
            touches,
            x,
            y,
            time_ms,
        })
    }

    /// `touchend` on the window.
    #[wasm_bindgen(js_name = "touchEnd")]
    pub fn touch_end(&mut self, remaining: u32) -> bool {
        self.dispatch(InputEvent::TouchEnd { remaining })
    }

    /// `touchcancel` on the window.
    #[wasm_bindgen(js_name = "touchCancel")]
    pub fn touch_cancel(&mut self) -> bool {
        self.dispatch(InputEvent::TouchCancel)
    }

    /// `resize` on the window.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.stage.resize(width, height);
    }

    /// Container bounding rectangle, after scroll or layout changes.
    #[wasm_bindgen(js_name = "setBounds")]
    pub fn set_bounds(&mut self, left: f32, top: f32, width: f32, height: f32) {
        let _ = self.dispatch(InputEvent::Bounds {
            left,
            top,
            width,
            height,
        });
    }

    /// Frame callback. Returns `true` when the scene should be rendered.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        let dt = self.clock.advance_to(timestamp_ms);
        self.stage.tick(dt).should_render()
    }

    /// Current yaw, for page effects that follow the showpiece.
    #[wasm_bindgen(getter)]
    pub fn yaw(&self) -> f32 {
        self.stage.transform().yaw
    }

    /// Whether a drag is in progress.
    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.stage.controller().is_dragging()
    }

    fn dispatch(&mut self, event: InputEvent) -> bool {
        self.stage.handle_event(event).is_consumed()
    }
}

/// Intro overlay fade and hero parallax for the page script's scroll
/// listener.
#[wasm_bindgen]
pub struct WebIntro {
    overlay: IntroOverlay,
    options: PageOptions,
}

#[wasm_bindgen]
impl WebIntro {
    /// Create the overlay state, reading the "seen" flag from session
    /// storage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebIntro {
        let options = PageOptions::default();
        Self {
            overlay: IntroOverlay::new(options.clone(), has_seen_intro()),
            options,
        }
    }

    /// Whether the overlay is dismissed.
    #[wasm_bindgen(getter)]
    pub fn dismissed(&self) -> bool {
        self.overlay.is_dismissed()
    }

    /// `scroll` on the window. Returns the overlay opacity.
    #[wasm_bindgen(js_name = "onScroll")]
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> f64 {
        let update = self.overlay.on_scroll(scroll_y, viewport_height);
        if update.just_dismissed {
            mark_intro_seen();
        }
        update.opacity
    }

    /// Hero background offset in pixels for a scroll position.
    #[wasm_bindgen(js_name = "parallaxOffset")]
    pub fn parallax_offset(&self, scroll_y: f64) -> f64 {
        page::parallax_offset(scroll_y, &self.options)
    }
}

impl Default for WebIntro {
    fn default() -> Self {
        Self::new()
    }
}

fn window_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

fn has_seen_intro() -> bool {
    session_storage()
        .and_then(|storage| storage.get_item(SEEN_INTRO_KEY).ok().flatten())
        .is_some_and(|value| value == "true")
}

fn mark_intro_seen() {
    if let Some(storage) = session_storage() {
        if let Err(e) = storage.set_item(SEEN_INTRO_KEY, "true") {
            log::warn!("could not persist intro flag: {e:?}");
        }
    }
}
