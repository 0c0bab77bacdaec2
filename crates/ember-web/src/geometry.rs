// Pure coordinate and timing conversions used by the wasm host.
//
// Kept free of `web_sys` so host-side tests can include this file directly.

use ember_core::constants::NOMINAL_FPS;
use glam::Vec2;

/// Pointer position relative to the canvas' top-left corner, in CSS px.
#[inline]
pub fn client_to_local(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

#[inline]
pub fn viewport_center(viewport: Vec2) -> Vec2 {
    viewport * 0.5
}

/// Convert a wall-clock step into nominal display frames for the burst
/// simulator.
#[inline]
pub fn frames_from_secs(dt_sec: f32) -> f32 {
    dt_sec * NOMINAL_FPS
}

/// Backing-store size for a canvas of the given CSS size; never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// CSS `transform` that centers a cursor node on `position`.
#[inline]
pub fn cursor_transform(position: Vec2) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
        position.x, position.y
    )
}

/// `rgba(...)` string from an `"r, g, b"` triple and an alpha.
#[inline]
pub fn rgba(rgb: &str, alpha: f32) -> String {
    format!("rgba({}, {:.3})", rgb, alpha.clamp(0.0, 1.0))
}
