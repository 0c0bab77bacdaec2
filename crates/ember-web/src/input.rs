use crate::geometry;
use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas' CSS pixel space.
#[inline]
pub fn pointer_local(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    geometry::client_to_local(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Primary button only; secondary clicks and extra touches don't burst.
#[inline]
pub fn is_primary_press(ev: &web::PointerEvent) -> bool {
    ev.is_primary() && ev.button() == 0
}
