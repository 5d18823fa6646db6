use crate::constants::{CONFIG_ATTR, INIT_MARKER_KEY};
use crate::input;
use crate::page_config;
use wasm_bindgen::JsCast;
use web_sys as web;
use wavefield_core::FieldConfig;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    input::clamp_dpr(web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0))
}

/// Layout size of an element in CSS pixels.
#[inline]
pub fn css_size(el: &web::Element) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Match the canvas backing store to `css_w` x `css_h` at `dpr` and pin its
/// CSS size so the browser does not stretch it.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css_w: f64, css_h: f64, dpr: f64) {
    let (w_px, h_px) = input::backing_size(css_w, css_h, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w.max(1.0)));
    _ = style.set_property("height", &format!("{}px", css_h.max(1.0)));
}

/// Mark the canvas as owned; returns false if it already was.
pub fn claim_canvas(canvas: &web::HtmlCanvasElement) -> bool {
    let dataset = canvas.dataset();
    if dataset.get(INIT_MARKER_KEY).as_deref() == Some("1") {
        return false;
    }
    _ = dataset.set(INIT_MARKER_KEY, "1");
    true
}

pub fn release_canvas(canvas: &web::HtmlCanvasElement) {
    canvas.dataset().delete(INIT_MARKER_KEY);
}

/// Read `data-wave-config` overrides; see `parse_field_config`.
pub fn read_field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let raw = canvas.get_attribute(CONFIG_ATTR);
    page_config::parse_field_config(raw.as_deref(), || {
        (js_sys::Math::random() * u32::MAX as f64) as u64
    })
}

pub fn get_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn get_wrapper(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}
