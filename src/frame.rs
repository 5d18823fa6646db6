use crate::canvas::CanvasSurface;
use crate::dom;
use crate::lifecycle::FrameSchedule;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavefield_core::{render_frame, WaveEngine};
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub engine: Rc<RefCell<WaveEngine>>,
    pub wrapper: web::Element,
    pub surface: CanvasSurface,
}

impl FrameContext {
    /// One synchronous pass: measure, advance, draw. Returns whether another
    /// frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        let (w, h) = dom::css_size(&self.wrapper);
        let frame = self.engine.borrow_mut().advance_at(Instant::now(), w, h);
        let engine = self.engine.borrow();
        render_frame(&mut self.surface, &frame, &engine.config().background);
        engine.is_running()
    }
}

/// The `requestAnimationFrame` chain. The tick closure is created once and
/// reused across stop/start cycles until `shutdown` drops it.
pub struct FrameLoop {
    tick: TickSlot,
    schedule: Rc<Cell<FrameSchedule>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let schedule = Rc::new(Cell::new(FrameSchedule::default()));
        let tick_clone = tick.clone();
        let schedule_tick = schedule.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut s = schedule_tick.get();
            s.fired();
            schedule_tick.set(s);
            if s.is_shut_down() {
                return;
            }
            if frame_ctx.borrow_mut().frame() {
                request_frame(&tick_clone, &schedule_tick);
            }
        }) as Box<dyn FnMut()>));
        Self { tick, schedule }
    }

    /// Schedule the next frame unless one is already pending.
    pub fn ensure_scheduled(&self) {
        request_frame(&self.tick, &self.schedule);
    }

    /// Cancel any pending frame and drop the tick closure, releasing the
    /// frame context it owns. The loop cannot be restarted afterwards.
    pub fn shutdown(&self) {
        let mut s = self.schedule.get();
        let pending = s.shutdown();
        self.schedule.set(s);
        if let (Some(id), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure holds `tick` itself; taking it breaks the cycle.
        drop(self.tick.borrow_mut().take());
    }
}

fn request_frame(tick: &TickSlot, schedule: &Rc<Cell<FrameSchedule>>) {
    let mut s = schedule.get();
    if !s.should_request() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            s.requested(id);
            schedule.set(s);
        }
    }
}
