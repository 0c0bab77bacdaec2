#![cfg(target_arch = "wasm32")]
//! Browser host for the burst and pointer trail engines.
//!
//! ```js
//! const fx = new FxScene("fx-canvas", false);
//! fx.play_intro();
//! // later
//! fx.destroy();
//! ```

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod geometry;
mod input;
mod render;
mod scene;

use ember_core::Realm;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ember-web ready");
    Ok(())
}

/// One mounted effects layer: a canvas, its listeners and its frame loop.
#[wasm_bindgen]
pub struct FxScene {
    scene: Rc<RefCell<scene::SceneState>>,
    document: web::Document,
    listeners: Vec<events::Listener>,
    frame_loop: Option<frame::LoopHandle>,
}

#[wasm_bindgen]
impl FxScene {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, shadow_realm: bool) -> Result<FxScene, JsValue> {
        mount(canvas_id, Realm::from_flag(shadow_realm)).map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    /// Restart the Charging -> Explosion -> Settled sequence.
    pub fn play_intro(&self) {
        self.scene.borrow_mut().play_intro();
    }

    /// Applies to bursts and trail particles drawn from now on.
    pub fn set_realm(&self, shadow_realm: bool) {
        self.scene.borrow_mut().realm = Realm::from_flag(shadow_realm);
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(frame::LoopHandle::is_running)
    }

    /// Stop the loop, remove every listener and drop all particles. Safe to
    /// call more than once.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.frame_loop.take() {
            handle.stop();
        }
        self.listeners.clear();
        self.scene.borrow_mut().release();
        if let Some(cursor) = cursor::CursorNode::find(&self.document) {
            cursor.hide();
        }
        log::info!("[scene] destroyed");
    }
}

fn mount(canvas_id: &str, realm: Realm) -> anyhow::Result<FxScene> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let viewport = dom::sync_canvas_backing_size(&canvas);

    let scene = Rc::new(RefCell::new(
        scene::SceneState::new(realm, viewport)?,
    ));

    let listeners = events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
    })?;

    let cursor = cursor::CursorNode::find(&document);
    if cursor.is_none() {
        log::info!("[scene] no #{} element, drawing cursor on canvas", constants::CURSOR_ELEMENT_ID);
    }
    let frame_loop = frame::start_loop(
        window,
        frame::FrameContext {
            scene: scene.clone(),
            canvas,
            painter: render::Painter::new(ctx),
            cursor,
            last_instant: Instant::now(),
        },
    );

    log::info!(
        "[scene] mounted on #{} ({:.0}x{:.0}, {:?})",
        canvas_id,
        viewport.x,
        viewport.y,
        realm
    );
    Ok(FxScene {
        scene,
        document,
        listeners,
        frame_loop: Some(frame_loop),
    })
}

impl Drop for FxScene {
    fn drop(&mut self) {
        self.destroy();
    }
}
