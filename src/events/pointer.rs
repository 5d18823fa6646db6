use super::Listener;
use crate::input;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wavefield_core::{InputEvent, WaveEngine};
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub wrapper: web::Element,
    pub engine: Rc<RefCell<WaveEngine>>,
}

/// Register pointer listeners on the wrapper. They stay live for as long
/// as the returned listeners are kept.
pub fn wire_input_handlers(w: InputWiring) -> Vec<Listener> {
    vec![
        wire_mousemove(&w),
        wire_touchmove(&w),
        wire_leave(&w, "mouseleave"),
        wire_leave(&w, "touchend"),
        wire_leave(&w, "touchcancel"),
    ]
}

/// Feed a client-space sample to the engine, relative to the wrapper box.
fn push_client(w: &InputWiring, client: Vec2) {
    let rect = w.wrapper.get_bounding_client_rect();
    let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
    let local = input::client_to_local(client, origin);
    w.engine.borrow_mut().handle_input(InputEvent::MovedWithin {
        x: local.x,
        y: local.y,
        width: rect.width() as f32,
        height: rect.height() as f32,
    });
}

fn wire_mousemove(w: &InputWiring) -> Listener {
    let w = w.clone();
    let target = w.wrapper.clone();
    Listener::passive(&target, "mousemove", move |ev: web::Event| {
        let mouse = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32));
        if let Some(client) = input::pick_client(mouse, None) {
            push_client(&w, client);
        }
    })
}

fn wire_touchmove(w: &InputWiring) -> Listener {
    let w = w.clone();
    let target = w.wrapper.clone();
    Listener::passive(&target, "touchmove", move |ev: web::Event| {
        let touch = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
        if let Some(client) = input::pick_client(None, touch) {
            push_client(&w, client);
        }
    })
}

fn wire_leave(w: &InputWiring, event: &'static str) -> Listener {
    let w = w.clone();
    let target = w.wrapper.clone();
    Listener::passive(&target, event, move |_ev: web::Event| {
        w.engine.borrow_mut().handle_input(InputEvent::Left);
    })
}
