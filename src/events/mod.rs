pub mod pointer;
pub mod window;

use crate::core::{InputEvent, Reaction};
use crate::frame::FrameLoop;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

/// Registered DOM listeners, removed again on teardown.
#[derive(Default)]
pub struct Listeners {
    active: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", kind, e))?;
        self.push(target, kind, callback);
        Ok(())
    }

    /// Like `add`, but non-passive so the handler may call `preventDefault`.
    pub fn add_blocking(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", kind, e))?;
        self.push(target, kind, callback);
        Ok(())
    }

    fn push(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(web::Event)>,
    ) {
        self.active.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn remove_all(&mut self) {
        for l in self.active.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// Feed an event to the simulation and carry out its reaction.
pub fn dispatch(frames: &FrameLoop, event: InputEvent) {
    let reaction = frames.ctx.borrow_mut().sim.handle(event);
    match reaction {
        Reaction::None => {}
        Reaction::StartLoop | Reaction::ResumeLoop => {
            log::debug!("[input] {:?}", reaction);
            if let Err(e) = frames.request() {
                log::error!("[input] could not schedule frame: {:?}", e);
            }
        }
        Reaction::Resize { width, height } => frames.ctx.borrow().surface.resize(width, height),
    }
}

pub fn wire_all(
    listeners: &mut Listeners,
    window: &web::Window,
    document: &web::Document,
    frames: &FrameLoop,
) -> anyhow::Result<()> {
    pointer::wire_pointer_handlers(listeners, document, frames)?;
    window::wire_window_handlers(listeners, window, frames)?;
    log::debug!("[input] {} listeners registered", listeners.len());
    Ok(())
}
