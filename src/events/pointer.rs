use super::{dispatch, Listeners};
use crate::constants::{EV_MOUSE_MOVE, EV_TOUCH_MOVE, EV_TOUCH_START};
use crate::core::InputEvent;
use crate::frame::FrameLoop;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn mouse_position(ev: &web::Event) -> Option<(f64, f64)> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| (m.client_x() as f64, m.client_y() as f64))
}

/// Touch count and page position of the first touch.
#[inline]
pub fn first_touch(ev: &web::Event) -> Option<(u32, f64, f64)> {
    let touches = ev.dyn_ref::<web::TouchEvent>()?.touches();
    let first = touches.get(0)?;
    Some((touches.length(), first.page_x() as f64, first.page_y() as f64))
}

pub fn wire_pointer_handlers(
    listeners: &mut Listeners,
    document: &web::Document,
    frames: &FrameLoop,
) -> anyhow::Result<()> {
    let f = frames.clone();
    listeners.add(document, EV_MOUSE_MOVE, move |ev| {
        if let Some((x, y)) = mouse_position(&ev) {
            dispatch(&f, InputEvent::PointerMove { x, y });
        }
    })?;

    let f = frames.clone();
    listeners.add(document, EV_TOUCH_START, move |ev| {
        if let Some((touches, x, y)) = first_touch(&ev) {
            dispatch(&f, InputEvent::TouchStart { touches, x, y });
        }
    })?;

    let f = frames.clone();
    listeners.add_blocking(document, EV_TOUCH_MOVE, move |ev| {
        if let Some((_, x, y)) = first_touch(&ev) {
            dispatch(&f, InputEvent::TouchMove { x, y });
            ev.prevent_default();
        }
    })?;

    Ok(())
}
