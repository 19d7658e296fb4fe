use crate::constants::{
    PIN_ELEMENT_ID, PIN_SCROLL_LENGTH_VIEWPORTS, POINTER_MOVE_EVENT, RESIZE_EVENT, SCROLL_EVENT,
};
use crate::dom;
use crate::input::ScrollGeometry;
use choreo_core::{EventSink, PointerSource, ScrollProgressSource, Subscription};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// One `addEventListener` registration. Cancelling removes the listener and
/// drops the closure.
pub struct DomListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Handler>,
}

impl DomListener {
    pub fn add(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure: Some(closure),
            }),
            Err(e) => {
                log::warn!("[events] could not listen for `{event}`: {e:?}");
                None
            }
        }
    }
}

impl Subscription for DomListener {
    fn cancel(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
pub struct ListenerGroup {
    listeners: Vec<DomListener>,
}

impl ListenerGroup {
    pub fn push(&mut self, listener: Option<DomListener>) {
        self.listeners.extend(listener);
    }
}

impl Subscription for ListenerGroup {
    fn cancel(&mut self) {
        for l in &mut self.listeners {
            l.cancel();
        }
        self.listeners.clear();
    }
}

/// Progress from the window scroll position across the pinned section.
///
/// Without a pin element nothing is subscribed and the page is expected to
/// drive progress itself.
pub struct WindowScrollSource {
    window: web::Window,
    pin: Option<web::Element>,
    geometry: Rc<Cell<ScrollGeometry>>,
}

impl WindowScrollSource {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        let pin = document.get_element_by_id(PIN_ELEMENT_ID);
        if pin.is_none() {
            log::info!("[events] no #{PIN_ELEMENT_ID}; progress comes from setProgress");
        }
        Self {
            window: window.clone(),
            pin,
            geometry: Rc::new(Cell::new(ScrollGeometry::default())),
        }
    }

    fn measure(&self) -> Option<ScrollGeometry> {
        let pin = self.pin.as_ref()?;
        let g = dom::measure_pin(&self.window, pin, PIN_SCROLL_LENGTH_VIEWPORTS);
        self.geometry.set(g);
        Some(g)
    }
}

impl ScrollProgressSource for WindowScrollSource {
    fn subscribe(&mut self, sink: EventSink) -> Box<dyn Subscription> {
        let mut group = ListenerGroup::default();
        let Some(initial) = self.measure() else {
            return Box::new(group);
        };
        sink.progress(initial.progress(dom::scroll_y(&self.window)));

        let target: &web::EventTarget = self.window.as_ref();

        let window = self.window.clone();
        let geometry = self.geometry.clone();
        let on_scroll = sink.clone();
        group.push(DomListener::add(target, SCROLL_EVENT, move |_| {
            on_scroll.progress(geometry.get().progress(dom::scroll_y(&window)));
        }));

        let window = self.window.clone();
        let geometry = self.geometry.clone();
        let pin = self.pin.clone();
        group.push(DomListener::add(target, RESIZE_EVENT, move |_| {
            let Some(pin) = pin.as_ref() else {
                return;
            };
            let g = dom::measure_pin(&window, pin, PIN_SCROLL_LENGTH_VIEWPORTS);
            geometry.set(g);
            sink.refresh();
            sink.progress(g.progress(dom::scroll_y(&window)));
        }));

        Box::new(group)
    }
}

pub struct WindowPointerSource {
    window: web::Window,
}

impl WindowPointerSource {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl PointerSource for WindowPointerSource {
    fn subscribe(&mut self, sink: EventSink) -> Box<dyn Subscription> {
        let mut group = ListenerGroup::default();
        let window = self.window.clone();
        group.push(DomListener::add(
            self.window.as_ref(),
            POINTER_MOVE_EVENT,
            move |ev| {
                let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let (w, h) = dom::viewport_size(&window);
                sink.pointer_moved(
                    Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32),
                    Vec2::new(w, h),
                );
            },
        ));
        Box::new(group)
    }
}
