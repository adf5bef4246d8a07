use super::{dispatch, Listeners};
use crate::constants::{EV_BLUR, EV_FOCUS, EV_ORIENTATION_CHANGE, EV_RESIZE};
use crate::core::InputEvent;
use crate::dom;
use crate::frame::FrameLoop;
use web_sys as web;

pub fn resize_event(window: &web::Window) -> InputEvent {
    let (viewport_width, viewport_height) = dom::viewport_size(window);
    InputEvent::Resize {
        viewport_width,
        viewport_height,
    }
}

pub fn wire_window_handlers(
    listeners: &mut Listeners,
    window: &web::Window,
    frames: &FrameLoop,
) -> anyhow::Result<()> {
    for kind in [EV_RESIZE, EV_ORIENTATION_CHANGE] {
        let f = frames.clone();
        let w = window.clone();
        listeners.add(window, kind, move |_| dispatch(&f, resize_event(&w)))?;
    }

    let f = frames.clone();
    listeners.add(window, EV_FOCUS, move |_| {
        log::debug!("[input] focus");
        dispatch(&f, InputEvent::Focus);
    })?;

    let f = frames.clone();
    listeners.add(window, EV_BLUR, move |_| {
        log::debug!("[input] blur, pausing");
        dispatch(&f, InputEvent::Blur);
    })?;

    Ok(())
}
