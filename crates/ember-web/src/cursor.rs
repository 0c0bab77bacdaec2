use crate::constants::{CURSOR_ELEMENT_ID, CURSOR_STATE_ATTR};
use crate::geometry;
use ember_core::InteractionState;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Optional DOM node that follows the spring position. When the page has no
/// `#fx-cursor` element the painter draws a dot instead.
pub struct CursorNode {
    el: web::HtmlElement,
    last_state: Option<InteractionState>,
}

impl CursorNode {
    pub fn find(document: &web::Document) -> Option<Self> {
        let el = document
            .get_element_by_id(CURSOR_ELEMENT_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self {
            el,
            last_state: None,
        })
    }

    pub fn update(&mut self, position: Vec2, state: InteractionState) {
        _ = self
            .el
            .style()
            .set_property("transform", &geometry::cursor_transform(position));
        if self.last_state != Some(state) {
            _ = self.el.set_attribute(CURSOR_STATE_ATTR, state_name(state));
            self.last_state = Some(state);
        }
    }

    pub fn hide(&self) {
        _ = self.el.set_attribute("style", "display:none");
    }
}

#[inline]
fn state_name(state: InteractionState) -> &'static str {
    match state {
        InteractionState::Default => "default",
        InteractionState::Hovering => "hovering",
        InteractionState::Pressing => "pressing",
        InteractionState::Released => "released",
    }
}
