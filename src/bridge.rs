use crate::constants::{PANEL_INTERACTIVE_OPACITY, PANEL_POSITION_UNIT};
use crate::dom;
use crate::input;
use choreo_core::{ActorId, RenderNode, RenderTarget};
use fnv::FnvHashMap;
use glam::Vec3;
use js_sys::{Function, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn call_set3(object: &JsValue, prop: &str, v: Vec3) -> Result<(), JsValue> {
    let target = Reflect::get(object, &JsValue::from_str(prop))?;
    let set: Function = Reflect::get(&target, &JsValue::from_str("set"))?.dyn_into()?;
    set.call3(
        &target,
        &JsValue::from_f64(v.x as f64),
        &JsValue::from_f64(v.y as f64),
        &JsValue::from_f64(v.z as f64),
    )?;
    Ok(())
}

/// Every material reachable from `object`, gathered once at bind time.
fn collect_materials(object: &JsValue) -> Vec<JsValue> {
    let found = Rc::new(RefCell::new(Vec::new()));
    let sink = found.clone();
    let visit = Closure::wrap(Box::new(move |child: JsValue| {
        let Ok(material) = Reflect::get(&child, &JsValue::from_str("material")) else {
            return;
        };
        if material.is_undefined() || material.is_null() {
            return;
        }
        let mut out = sink.borrow_mut();
        if js_sys::Array::is_array(&material) {
            out.extend(js_sys::Array::from(&material).iter());
        } else {
            out.push(material);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let traversed = Reflect::get(object, &JsValue::from_str("traverse"))
        .and_then(|f| f.dyn_into::<Function>())
        .and_then(|f| f.call1(object, visit.as_ref()));
    if let Err(e) = traversed {
        log::debug!("[bridge] traverse failed: {e:?}");
    }
    drop(visit);
    found.take()
}

/// A three.js-style scene object.
pub struct Object3dNode {
    object: JsValue,
    materials: Vec<JsValue>,
    last_opacity: Option<f32>,
}

impl Object3dNode {
    pub fn new(object: JsValue) -> Self {
        let materials = collect_materials(&object);
        Self {
            object,
            materials,
            last_opacity: None,
        }
    }

    fn report(&self, what: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::debug!("[bridge] {what} failed: {e:?}");
        }
    }
}

impl RenderNode for Object3dNode {
    fn set_position(&mut self, position: Vec3) {
        self.report("position", call_set3(&self.object, "position", position));
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.report("rotation", call_set3(&self.object, "rotation", rotation));
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.report("scale", call_set3(&self.object, "scale", scale));
    }

    fn set_opacity(&mut self, opacity: f32) {
        if self.last_opacity == Some(opacity) {
            return;
        }
        self.last_opacity = Some(opacity);
        let value = JsValue::from_f64(opacity as f64);
        let translucent = JsValue::from_bool(opacity < 1.0);
        for material in &self.materials {
            let _ = Reflect::set(material, &JsValue::from_str("opacity"), &value);
            let _ = Reflect::set(material, &JsValue::from_str("transparent"), &translucent);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let result = Reflect::set(
            &self.object,
            &JsValue::from_str("visible"),
            &JsValue::from_bool(visible),
        )
        .map(|_| ());
        self.report("visible", result);
    }
}

/// An HTML overlay panel. Position x/y are CSS pixels; rotation and scale
/// are not applied.
pub struct DomPanelNode {
    element: web::HtmlElement,
}

impl DomPanelNode {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl RenderNode for DomPanelNode {
    fn set_position(&mut self, position: Vec3) {
        let transform = input::panel_transform(position, PANEL_POSITION_UNIT);
        dom::set_style(&self.element, "transform", &transform);
    }

    fn set_rotation(&mut self, _rotation: Vec3) {}

    fn set_scale(&mut self, _scale: Vec3) {}

    fn set_opacity(&mut self, opacity: f32) {
        dom::set_style(&self.element, "opacity", &input::css_opacity(opacity));
        dom::set_style(
            &self.element,
            "pointer-events",
            input::panel_pointer_events(opacity, PANEL_INTERACTIVE_OPACITY),
        );
    }

    fn set_visible(&mut self, visible: bool) {
        dom::set_style(&self.element, "visibility", input::css_visibility(visible));
    }
}

pub enum BoundNode {
    Object(Object3dNode),
    Panel(DomPanelNode),
}

impl RenderNode for BoundNode {
    fn set_position(&mut self, position: Vec3) {
        match self {
            BoundNode::Object(n) => n.set_position(position),
            BoundNode::Panel(n) => n.set_position(position),
        }
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        match self {
            BoundNode::Object(n) => n.set_rotation(rotation),
            BoundNode::Panel(n) => n.set_rotation(rotation),
        }
    }

    fn set_scale(&mut self, scale: Vec3) {
        match self {
            BoundNode::Object(n) => n.set_scale(scale),
            BoundNode::Panel(n) => n.set_scale(scale),
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        match self {
            BoundNode::Object(n) => n.set_opacity(opacity),
            BoundNode::Panel(n) => n.set_opacity(opacity),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            BoundNode::Object(n) => n.set_visible(visible),
            BoundNode::Panel(n) => n.set_visible(visible),
        }
    }
}

/// Actor id to renderer node. Scene objects come from the `nodes` object the
/// page hands over; anything not found there is looked up as a DOM id.
#[derive(Default)]
pub struct SceneBindings {
    nodes: FnvHashMap<ActorId, BoundNode>,
}

impl SceneBindings {
    pub fn bind<'a>(
        nodes: &JsValue,
        document: &web::Document,
        ids: impl IntoIterator<Item = &'a ActorId>,
    ) -> Self {
        let mut bound = FnvHashMap::default();
        for id in ids {
            let object = Reflect::get(nodes, &JsValue::from_str(id.as_str()))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null());
            let node = match object {
                Some(object) => BoundNode::Object(Object3dNode::new(object)),
                None => match dom::html_element_by_id(document, id.as_str()) {
                    Some(el) => BoundNode::Panel(DomPanelNode::new(el)),
                    None => continue,
                },
            };
            bound.insert(id.clone(), node);
        }
        log::info!("[bridge] bound {} actor(s)", bound.len());
        Self { nodes: bound }
    }
}

impl RenderTarget for SceneBindings {
    fn node_mut(&mut self, id: &ActorId) -> Option<&mut dyn RenderNode> {
        self.nodes.get_mut(id).map(|n| n as &mut dyn RenderNode)
    }
}
