use crate::cursor::CursorNode;
use crate::dom;
use crate::render::Painter;
use crate::scene::SceneState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: Painter,
    pub cursor: Option<CursorNode>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let dpr = dom::device_pixel_ratio();
        let mut scene = self.scene.borrow_mut();
        let realm = scene.realm;
        let (burst, trail) = scene.step(dt_sec);

        if let Some(cursor) = self.cursor.as_mut() {
            cursor.update(trail.cursor, trail.interaction);
        }
        self.painter
            .paint(&self.canvas, dpr, realm, &burst, &trail, self.cursor.is_none());
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the requestAnimationFrame chain. The tick closure holds a handle to
/// its own slot, so `stop` must run to break the cycle.
pub struct LoopHandle {
    window: web::Window,
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.alive.get()
    }

    pub fn stop(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        drop(self.tick.borrow_mut().take());
        log::info!("[frame] loop stopped");
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(window: web::Window, mut ctx: FrameContext) -> LoopHandle {
    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(None));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    let slot_tick = tick.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        ctx.frame();
        raf_tick.set(schedule(&window_tick, &slot_tick));
    }) as Box<dyn FnMut()>));

    raf_id.set(schedule(&window, &tick));
    log::info!("[frame] loop started");
    LoopHandle {
        window,
        alive,
        raf_id,
        tick,
    }
}

fn schedule(window: &web::Window, slot: &TickSlot) -> Option<i32> {
    let slot = slot.borrow();
    let cb = slot.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
