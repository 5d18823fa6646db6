// Host-side tests for pure input and sizing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_local_subtracts_origin() {
    let local = client_to_local(Vec2::new(130.0, 75.0), Vec2::new(30.0, 25.0));
    assert_eq!(local, Vec2::new(100.0, 50.0));

    // Outside the box stays representable; the engine decides what it means.
    let outside = client_to_local(Vec2::new(10.0, 10.0), Vec2::new(30.0, 25.0));
    assert_eq!(outside, Vec2::new(-20.0, -15.0));
}

#[test]
fn pick_client_prefers_mouse_then_touch() {
    let mouse = Vec2::new(1.0, 2.0);
    let touch = Vec2::new(3.0, 4.0);
    assert_eq!(pick_client(Some(mouse), Some(touch)), Some(mouse));
    assert_eq!(pick_client(None, Some(touch)), Some(touch));
    assert_eq!(pick_client(None, None), None);
}

#[test]
fn pick_client_skips_non_finite_samples() {
    let bad = Vec2::new(f32::NAN, 2.0);
    let touch = Vec2::new(3.0, 4.0);
    assert_eq!(pick_client(Some(bad), Some(touch)), Some(touch));
    assert_eq!(pick_client(Some(bad), None), None);
}

#[test]
fn clamp_dpr_caps_and_sanitizes() {
    assert_eq!(clamp_dpr(1.0), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(3.0), constants::MAX_DPR);
    assert_eq!(clamp_dpr(0.0), 1.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
}

#[test]
fn backing_size_scales_and_floors() {
    assert_eq!(backing_size(400.0, 120.0, 1.0), (400, 120));
    assert_eq!(backing_size(400.5, 120.0, 2.0), (801, 240));
    assert_eq!(backing_size(400.0, 120.0, 3.0), (800, 240));
}

#[test]
fn backing_size_never_collapses() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 0.2, 1.0), (1, 1));
}
