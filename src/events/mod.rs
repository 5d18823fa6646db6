pub mod pointer;

pub use pointer::*;

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it unregisters the callback and frees
/// the closure together with everything it captured.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Flag the surface for a size/DPR re-sync whenever the window resizes.
pub fn wire_window_resize(dirty: Rc<Cell<bool>>) -> Option<Listener> {
    let window: web::EventTarget = web::window()?.into();
    Some(Listener::passive(&window, "resize", move |_ev| {
        dirty.set(true);
    }))
}
