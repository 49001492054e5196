use leptos::*;
use portfolio_core::SeenLatch;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Elements count as seen once they are 100px inside the viewport.
const ROOT_MARGIN: &str = "-100px";

type ObserverSlot = Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)>;

/// Returns a signal that flips to `true` the first time `target` enters the
/// viewport and never flips back. The observer is disconnected as soon as it
/// fires, or when the owning component is torn down.
pub fn use_seen_once(target: NodeRef<html::Div>) -> Signal<bool> {
    let (seen, set_seen) = create_signal(false);
    let latch = store_value(SeenLatch::default());
    let slot = store_value::<ObserverSlot>(None);

    target.on_load(move |el| {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|e| e.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if latch.try_update_value(|l| l.observe(visible)).unwrap_or(false) {
                    observer.disconnect();
                    set_seen.set(true);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&el);
                slot.set_value(Some((observer, callback)));
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable ({err:?}); showing content immediately");
                latch.update_value(|l| {
                    l.observe(true);
                });
                set_seen.set(true);
            }
        }
    });

    on_cleanup(move || {
        if let Some((observer, _callback)) = slot.try_update_value(Option::take).flatten() {
            observer.disconnect();
        }
    });

    seen.into()
}
