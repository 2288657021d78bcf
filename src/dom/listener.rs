use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, IntersectionObserver};
use web_sys::js_sys::Array;

/// An event listener that is removed again when dropped.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An intersection observer that is disconnected when dropped.
pub struct ObserverBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverBinding {
    pub fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    ) -> Self {
        Self {
            observer,
            _callback: callback,
        }
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything one behavior registered with the page.
#[derive(Default)]
pub struct Attached {
    listeners: Vec<EventBinding>,
    observers: Vec<ObserverBinding>,
}

impl Attached {
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(EventBinding::new(target, event, handler)?);
        Ok(())
    }

    pub fn observe(&mut self, binding: ObserverBinding) {
        self.observers.push(binding);
    }

    pub fn count(&self) -> usize {
        self.listeners.len() + self.observers.len()
    }

    pub fn detach(self) {
        drop(self);
    }
}
