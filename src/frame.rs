use crate::canvas::CanvasSurface;
use crate::core::Simulation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Simulation,
    pub surface: CanvasSurface,
}

impl FrameContext {
    /// One animation frame; errors halt the loop.
    pub fn frame(&mut self) -> bool {
        let FrameContext { sim, surface } = self;
        match sim.render(surface) {
            Ok(reschedule) => reschedule,
            Err(e) => {
                log::error!("[frame] render error, stopping: {:?}", e);
                sim.stop();
                false
            }
        }
    }

    fn halt(&mut self) {
        self.sim.stop();
        self.sim.clear_pending();
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driver sharing the frame context with the input
/// handlers.
#[derive(Clone)]
pub struct FrameLoop {
    pub ctx: Rc<RefCell<FrameContext>>,
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let ctx_tick = ctx.clone();
        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            let reschedule = ctx_tick.borrow_mut().frame();
            if reschedule {
                if let Err(e) = request_frame(&tick_clone, &handle_tick) {
                    log::error!("[frame] {:?}", e);
                    ctx_tick.borrow_mut().halt();
                }
            }
        }) as Box<dyn FnMut()>));

        Self { ctx, tick, handle }
    }

    /// Schedule the next frame; on failure the loop is halted.
    pub fn request(&self) -> anyhow::Result<()> {
        let result = request_frame(&self.tick, &self.handle);
        if result.is_err() {
            self.ctx.borrow_mut().halt();
        }
        result
    }

    /// Stop the loop, cancel a scheduled frame and release the callback.
    pub fn shutdown(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.ctx.borrow_mut().halt();
        // breaks the closure -> tick cycle
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick, handle: &Cell<Option<i32>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let slot = tick.borrow();
    let callback = slot
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("frame loop already shut down"))?;
    let id = window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("requestAnimationFrame failed: {:?}", e))?;
    handle.set(Some(id));
    Ok(())
}
