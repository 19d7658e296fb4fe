#![cfg(target_arch = "wasm32")]
use anyhow::{anyhow, Context};
use choreo_core::{steve_scene, Choreographer, EventSink, InstantClock, PoseBuffer, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod bridge;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("steve-experience starting");
    Ok(())
}

/// One mounted scroll experience. Dropping it (or calling `teardown`) removes
/// every listener and stops the frame loop.
#[wasm_bindgen]
pub struct Experience {
    engine: Rc<RefCell<Choreographer>>,
    sink: EventSink,
}

#[wasm_bindgen]
impl Experience {
    /// `nodes` maps actor ids to scene objects; ids missing from it are looked
    /// up as DOM panels. `scene_json` replaces the built-in scene.
    #[wasm_bindgen(constructor)]
    pub fn new(nodes: JsValue, scene_json: Option<String>) -> Result<Experience, JsValue> {
        mount(&nodes, scene_json.as_deref()).map_err(|e| {
            log::error!("mount error: {e:#}");
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    pub fn teardown(&self) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.teardown(),
            Err(_) => {
                log::debug!("[experience] frame running, teardown deferred to next tick");
                self.sink.request_teardown();
            }
        }
    }

    /// For pages that drive scroll progress with their own library.
    #[wasm_bindgen(js_name = setProgress)]
    pub fn set_progress(&self, t: f32) {
        self.sink.progress(t);
    }

    pub fn progress(&self) -> f32 {
        self.engine.borrow().progress()
    }

    /// Last frame as 11 floats per actor, in `actorIds` order.
    pub fn poses(&self) -> js_sys::Float32Array {
        let engine = self.engine.borrow();
        let mut buffer = PoseBuffer::new(engine.actor_ids().cloned());
        choreo_core::write_frame(engine.frame(), &mut buffer);
        js_sys::Float32Array::from(buffer.as_floats())
    }

    #[wasm_bindgen(js_name = actorIds)]
    pub fn actor_ids(&self) -> js_sys::Array {
        self.engine
            .borrow()
            .actor_ids()
            .map(|id| JsValue::from_str(id.as_str()))
            .collect()
    }
}

impl Drop for Experience {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn load_scene(scene_json: Option<&str>) -> anyhow::Result<Scene> {
    let scene = match scene_json {
        Some(json) => Scene::from_json(json).context("custom scene")?,
        None => steve_scene().context("built-in scene")?,
    };
    Ok(scene)
}

fn mount(nodes: &JsValue, scene_json: Option<&str>) -> anyhow::Result<Experience> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let mut engine = Choreographer::new(load_scene(scene_json)?);
    let sink = engine.sink();
    let mut bindings = bridge::SceneBindings::bind(nodes, &document, engine.actor_ids());

    let mut scroll = events::WindowScrollSource::new(&window, &document);
    let mut pointer = events::WindowPointerSource::new(&window);
    engine.mount(&mut scroll, &mut pointer);
    engine.reset_to_start(&mut bindings);

    let engine = Rc::new(RefCell::new(engine));
    let frame_loop = frame::start_loop(frame::FrameContext {
        engine: engine.clone(),
        bindings,
        clock: InstantClock::new(),
    });
    engine.borrow_mut().attach(Box::new(frame_loop));

    Ok(Experience { engine, sink })
}
