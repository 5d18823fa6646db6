#![cfg(target_arch = "wasm32")]
use lifecycle::HandleState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wavefield_core::WaveEngine;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod page_config;

thread_local! {
    static AUTO_HANDLE: RefCell<Option<WaveHandle>> = const { RefCell::new(None) };
}

/// JS-facing handle to one running wave field.
#[wasm_bindgen]
#[derive(Clone)]
pub struct WaveHandle {
    engine: Rc<RefCell<WaveEngine>>,
    frame_loop: Rc<frame::FrameLoop>,
    canvas: web::HtmlCanvasElement,
    listeners: Rc<RefCell<Vec<events::Listener>>>,
    state: Rc<Cell<HandleState>>,
}

#[wasm_bindgen]
impl WaveHandle {
    /// Attach to `canvas_id`, tracking the pointer over the first element
    /// matching `wrapper_selector`. Fails without side effects if either is
    /// missing or the canvas is already attached.
    pub fn attach(canvas_id: &str, wrapper_selector: &str) -> Result<WaveHandle, JsValue> {
        attach(canvas_id, wrapper_selector).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    /// No-op once detached.
    pub fn start(&self) {
        if !self.state.get().can_start() {
            log::warn!("[waves] start ignored, handle is detached");
            return;
        }
        self.engine.borrow_mut().start();
        self.frame_loop.ensure_scheduled();
    }

    /// Stop scheduling frames. The last drawn frame stays on the canvas.
    pub fn stop(&self) {
        self.engine.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.engine.borrow().is_running()
    }

    /// Stop, unregister every listener, drop the frame loop and let another
    /// handle claim the canvas. The handle cannot be started again.
    pub fn detach(&self) {
        let mut state = self.state.get();
        if !state.detach() {
            return;
        }
        self.state.set(state);
        self.stop();
        self.frame_loop.shutdown();
        self.listeners.borrow_mut().clear();
        dom::release_canvas(&self.canvas);
        AUTO_HANDLE.with(|h| {
            let mut slot = h.borrow_mut();
            if slot.as_ref().is_some_and(|a| Rc::ptr_eq(&a.state, &self.state)) {
                *slot = None;
            }
        });
        log::info!("[waves] detached");
    }
}

/// Handle created by the automatic startup, if it found its elements.
#[wasm_bindgen]
pub fn auto_handle() -> Option<WaveHandle> {
    AUTO_HANDLE.with(|h| h.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wavefield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            // Reported once; the page can retry through `WaveHandle.attach`.
            log::warn!("[waves] not started: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let handle = attach(constants::CANVAS_ID, constants::WRAPPER_SELECTOR)?;
    handle.start();
    AUTO_HANDLE.with(|h| *h.borrow_mut() = Some(handle));
    Ok(())
}

fn attach(canvas_id: &str, wrapper_selector: &str) -> anyhow::Result<WaveHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::get_canvas(&document, canvas_id)?;
    let wrapper = dom::get_wrapper(&document, wrapper_selector)?;

    if !dom::claim_canvas(&canvas) {
        anyhow::bail!("#{} already attached", canvas_id);
    }
    let surface = match canvas::CanvasSurface::new(canvas.clone()) {
        Ok(s) => s,
        Err(e) => {
            dom::release_canvas(&canvas);
            return Err(e);
        }
    };

    let config = dom::read_field_config(&canvas);
    let engine = match WaveEngine::new(config) {
        Ok(e) => Rc::new(RefCell::new(e)),
        Err(e) => {
            dom::release_canvas(&canvas);
            return Err(e.into());
        }
    };

    let mut listeners = events::wire_input_handlers(events::InputWiring {
        wrapper: wrapper.clone(),
        engine: engine.clone(),
    });
    listeners.extend(events::wire_window_resize(surface.dirty_flag()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        wrapper: wrapper.clone(),
        surface,
    }));
    let frame_loop = Rc::new(frame::FrameLoop::new(frame_ctx));

    {
        let e = engine.borrow();
        let (w, h) = dom::css_size(&wrapper);
        log::info!(
            "[waves] init ok strategy={:?} lines={} size={}x{}",
            e.config().strategy,
            e.lines().len(),
            w,
            h
        );
    }

    Ok(WaveHandle {
        engine,
        frame_loop,
        canvas,
        listeners: Rc::new(RefCell::new(listeners)),
        state: Rc::new(Cell::new(HandleState::Attached)),
    })
}
