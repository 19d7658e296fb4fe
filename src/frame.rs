use crate::bridge::SceneBindings;
use choreo_core::{Choreographer, InstantClock, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<Choreographer>>,
    pub bindings: SceneBindings,
    pub clock: InstantClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let clock = self.clock.tick();
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.tick(clock, &mut self.bindings),
            Err(_) => log::debug!("[frame] engine busy, skipping tick"),
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The running `requestAnimationFrame` chain. Cancelling stops the pending
/// frame and releases the callback.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl Subscription for FrameLoop {
    fn cancel(&mut self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure -> tick cell cycle.
        drop(self.tick.borrow_mut().take());
        log::debug!("[frame] loop stopped");
    }
}

fn request(tick: &Tick, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {e:?}"),
        }
    }
}

pub fn start_loop(mut ctx: FrameContext) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_next = tick.clone();
    let handle_next = handle.clone();
    let stopped_next = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped_next.get() {
            return;
        }
        ctx.frame();
        if !stopped_next.get() {
            request(&tick_next, &handle_next);
        }
    }) as Box<dyn FnMut()>));

    request(&tick, &handle);
    FrameLoop {
        tick,
        handle,
        stopped,
    }
}
