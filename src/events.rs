use crate::camera::Camera;
use crate::dom;
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-project on window resize: sync the canvas backing store to the
/// container and update the camera aspect ratio to the new width/height.
/// Idempotent; the renderer picks up the canvas size on the next frame.
pub fn wire_resize(
    window: &web::Window,
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    camera: Rc<RefCell<Camera>>,
) {
    let apply = move || {
        dom::sync_canvas_backing_size(&container, &canvas);
        let rect = container.get_bounding_client_rect();
        camera
            .borrow_mut()
            .set_aspect(rect.width() as f32, rect.height() as f32);
    };
    apply();
    dom::add_listener(window, "resize", apply);
}

/// Suspend rendering while the container is scrolled out of the viewport.
/// The observer callback only flips a flag the frame loop consults.
pub fn wire_visibility_gate(
    container: &web::Element,
    visible: Rc<Cell<bool>>,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            if let Ok(entry) = entries.get(0).dyn_into::<web::IntersectionObserverEntry>() {
                visible.set(entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("{:?}", e))?;
    observer.observe(container);
    closure.forget();
    // The wasm-bindgen heap keeps the observer alive as long as the handle
    // exists; leak it so observation outlives this call.
    std::mem::forget(observer);
    Ok(())
}
