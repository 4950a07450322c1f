use js_sys::Array;
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::IntersectionReport;
use crate::telemetry::{log_event, LogLevel};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    // Entries whose element `key` maps to `None` are skipped.
    pub fn new<K, F, C>(threshold: f64, key: F, mut on_batch: C) -> Option<Self>
    where
        K: 'static,
        F: Fn(&Element) -> Option<K> + 'static,
        C: FnMut(Vec<IntersectionReport<K>>) + 'static,
    {
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let id = key(&entry.target())?;
                        Some(IntersectionReport::new(
                            id,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ))
                    })
                    .collect::<Vec<_>>();

                if !reports.is_empty() {
                    on_batch(reports);
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(error) => {
                log_event(
                    LogLevel::Warn,
                    "observer_unavailable",
                    json!({ "threshold": threshold, "error": format!("{error:?}") }),
                );
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn tagged_descendants(root: &Element) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all("[data-reveal-id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn reveal_id(element: &Element) -> Option<String> {
    element.get_attribute("data-reveal-id")
}
