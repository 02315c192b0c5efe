//! Owned browser subscriptions. Dropping one removes it from the page.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::reveal::Cancel;

/// A `window` event listener that lives exactly as long as this value.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(
        window: &Window,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            event,
            callback,
        })
    }

    /// Run the handler once by hand, e.g. to pick up the initial scroll position.
    pub fn trigger(&self) {
        let handler: &web_sys::js_sys::Function = self.callback.as_ref().unchecked_ref();
        if let Err(err) = handler.call0(&JsValue::NULL) {
            warn!("Initial {} handler threw: {:?}", self.event, err);
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// One element watched by its own `IntersectionObserver`.
///
/// `cancel` disconnects but keeps the callback alive, so it is safe to call
/// from inside that callback. The closure itself is freed on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_change: impl FnMut(bool, f64) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting(), entry.intersection_ratio());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        // Throws where the API is missing; callers fall back to static content.
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Cancel for ViewportObserver {
    fn cancel(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
