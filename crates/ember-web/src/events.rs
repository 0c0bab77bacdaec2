use crate::dom;
use crate::input;
use crate::scene::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener; removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen<F>(target: &web::EventTarget, kind: &'static str, handler: F) -> anyhow::Result<Listener>
where
    F: FnMut(web::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", kind, e))?;
    Ok(Listener {
        target: target.clone(),
        kind,
        closure,
    })
}

pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
}

pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<Vec<Listener>> {
    let window: &web::EventTarget = w.window.as_ref();
    let document: &web::EventTarget = w.document.as_ref();
    let mut listeners = Vec::with_capacity(7);

    // pointermove: spring target + one trail particle
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        listeners.push(listen(window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let pos = input::pointer_local(ev, &canvas);
            let mut s = scene.borrow_mut();
            s.trail.set_target(pos);
            s.trail.record_move(pos);
        })?);
    }

    // pointerdown
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        listeners.push(listen(window, "pointerdown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if !input::is_primary_press(ev) {
                return;
            }
            let pos = input::pointer_local(ev, &canvas);
            let mut s = scene.borrow_mut();
            s.trail.set_target(pos);
            s.trail.press(pos);
            log::debug!("[pointer] press at ({:.0}, {:.0})", pos.x, pos.y);
        })?);
    }

    // pointerup / pointercancel
    for kind in ["pointerup", "pointercancel"] {
        let scene = w.scene.clone();
        listeners.push(listen(window, kind, move |_ev| {
            scene.borrow_mut().trail.release();
        })?);
    }

    // Hover over interactive elements, delegated from the document.
    {
        let scene = w.scene.clone();
        listeners.push(listen(document, "pointerover", move |ev| {
            let over = dom::interactive_ancestor(ev.target()).is_some();
            let mut s = scene.borrow_mut();
            if over {
                s.trail.hover_enter();
            } else {
                s.trail.hover_leave();
            }
        })?);
    }
    {
        let scene = w.scene.clone();
        listeners.push(listen(document, "pointerout", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            // Leaving the page entirely reports no related target.
            if dom::interactive_ancestor(ev.related_target()).is_none() {
                scene.borrow_mut().trail.hover_leave();
            }
        })?);
    }

    // resize: keep the backing store and the burst center in sync
    {
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        listeners.push(listen(window, "resize", move |_ev| {
            let viewport = dom::sync_canvas_backing_size(&canvas);
            scene.borrow_mut().viewport = viewport;
        })?);
    }

    Ok(listeners)
}
