use crate::canvas::CanvasSurface;
use crate::constants::DEFAULT_CANVAS_ID;
use crate::core::{Environment, Simulation};
use crate::dom;
use crate::events::{self, Listeners};
use crate::frame::{FrameContext, FrameLoop};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if Environment::default().debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("trail-canvas starting");
    Ok(())
}

/// Handle to a mounted trail animation. Dropping it (or calling `destroy`)
/// stops the loop and unsubscribes every listener.
#[wasm_bindgen]
pub struct TrailCanvas {
    frames: FrameLoop,
    listeners: Listeners,
}

#[wasm_bindgen]
impl TrailCanvas {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 {
        self.frames.ctx.borrow().sim.frame() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frames.ctx.borrow().sim.is_running()
    }

    pub fn destroy(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        self.listeners.remove_all();
        self.frames.shutdown();
        log::info!("[canvas] destroyed");
    }
}

impl Drop for TrailCanvas {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Mount the animation on `<canvas id=canvas_id>` (default `"canvas"`).
///
/// Returns `None` without error when the element is missing; the effect is
/// decorative and has nothing to report.
#[wasm_bindgen(js_name = renderCanvas)]
pub fn render_canvas(canvas_id: Option<String>) -> Result<Option<TrailCanvas>, JsValue> {
    mount(canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID), Environment::default())
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn mount(canvas_id: &str, env: Environment) -> anyhow::Result<Option<TrailCanvas>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::find_canvas(&document, canvas_id) else {
        log::debug!("[canvas] #{} not found, not starting", canvas_id);
        return Ok(None);
    };
    let ctx = dom::context_2d(&canvas)?;

    let sim = Simulation::with_entropy(env)?;
    let frames = FrameLoop::new(FrameContext {
        sim,
        surface: CanvasSurface::new(canvas, ctx),
    });

    let mut listeners = Listeners::default();
    events::wire_all(&mut listeners, &window, &document, &frames)?;
    events::dispatch(&frames, events::window::resize_event(&window));

    log::info!("[canvas] mounted on #{}, waiting for pointer", canvas_id);
    Ok(Some(TrailCanvas { frames, listeners }))
}
