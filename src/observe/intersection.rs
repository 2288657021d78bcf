use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::listener::ObserverBinding;
use crate::observe::one_shot::{OnVisible, OneShotWatcher};

/// Observes `elements` against the viewport and runs `action` once per
/// element when at least `threshold` of it is visible within the viewport
/// grown by `root_margin`.
pub fn observe_once<A>(
    elements: Vec<Element>,
    threshold: f64,
    root_margin: &str,
    action: A,
) -> Result<ObserverBinding, JsValue>
where
    A: OnVisible<Element> + 'static,
{
    let watcher = Rc::new(RefCell::new(OneShotWatcher::new(action)));

    let callback = {
        let watcher = watcher.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if watcher.borrow_mut().notify(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for element in elements {
        observer.observe(&element);
        watcher.borrow_mut().watch(element);
    }
    debug!("Observing {} elements", watcher.borrow().pending());

    Ok(ObserverBinding::new(observer, callback))
}
