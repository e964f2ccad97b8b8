//! Scroll-triggered reveal.
//!
//! Each `Reveal` block owns an IntersectionObserver. The first time the block
//! enters the viewport it gets the `visible` class and the observer is
//! disconnected, so the transition runs once per mount. Unmounting the block
//! disconnects the observer and frees its callback.

use leptos::html;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos::web_sys;

/// Class toggled on a block once it has been seen
pub const VISIBLE_CLASS: &str = "visible";

#[component]
pub fn Reveal(
    /// Extra CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Optional fragment id carried by the block
    #[prop(optional)]
    id: Option<&'static str>,
    /// Transition delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let watch = watch_slot::<Observation>();

        Effect::new(move |observed: Option<bool>| {
            if observed == Some(true) {
                return true;
            }
            match node_ref.get() {
                Some(element) => {
                    watch.set_value(Observation::start(&element));
                    true
                }
                None => false,
            }
        });
    }

    let class = format!("reveal {class}").trim_end().to_string();
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms;"));

    view! {
        <div node_ref=node_ref id=id class=class style=style>
            {children()}
        </div>
    }
}

/// Active watch on a block that must be released when the block unmounts
trait Disconnect {
    fn disconnect(&self);
}

/// Slot for the current owner's watch. Cleaning the owner up disconnects
/// whatever the slot holds, then drops it.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn watch_slot<W: Disconnect + 'static>() -> StoredValue<Option<W>, LocalStorage> {
    let slot = StoredValue::new_local(None::<W>);
    on_cleanup(move || {
        if let Some(watch) = slot.try_update_value(Option::take).flatten() {
            watch.disconnect();
        }
    });
    slot
}

#[cfg(feature = "csr")]
type ObserverCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(feature = "csr")]
struct Observation {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(feature = "csr")]
impl Observation {
    /// Observe `element` until it first intersects the viewport.
    ///
    /// Returns `None` when the browser has no observer support; the block is
    /// shown right away in that case.
    fn start(element: &web_sys::Element) -> Option<Self> {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                        observer.disconnect();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
                let _ = element.class_list().add_1(VISIBLE_CLASS);
                None
            }
        }
    }
}

#[cfg(feature = "csr")]
impl Disconnect for Observation {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Counts disconnects of one watch
    struct CountingWatch(Arc<AtomicUsize>);

    impl Disconnect for CountingWatch {
        fn disconnect(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    #[test]
    fn test_reveal_starts_hidden() {
        let html = render(|| view! { <Reveal>"hello"</Reveal> }.into_any());

        assert!(html.contains("class=\"reveal\""));
        assert!(!html.contains(VISIBLE_CLASS));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_reveal_carries_id_and_delay() {
        let html = render(|| {
            view! { <Reveal id="master" delay_ms=200 class="card">"x"</Reveal> }.into_any()
        });

        assert!(html.contains("id=\"master\""));
        assert!(html.contains("transition-delay: 200ms;"));
        assert!(html.contains("reveal card"));
    }

    #[test]
    fn test_reveal_without_delay_has_no_style() {
        let html = render(|| view! { <Reveal>"x"</Reveal> }.into_any());
        assert!(!html.contains("style="));
        assert!(!html.contains("id="));
    }

    #[test]
    fn test_watch_disconnected_on_unmount() {
        let disconnects = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();

        owner.with(|| {
            let slot = watch_slot::<CountingWatch>();
            slot.set_value(Some(CountingWatch(disconnects.clone())));
        });
        assert_eq!(disconnects.load(Ordering::SeqCst), 0);

        owner.cleanup();
        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_watch_slot_cleans_up() {
        let owner = Owner::new();
        owner.with(|| {
            watch_slot::<CountingWatch>();
        });
        owner.cleanup();
    }

    #[test]
    fn test_remounts_release_every_previous_watch() {
        let disconnects = Arc::new(AtomicUsize::new(0));
        let root = Owner::new();

        for _ in 0..3 {
            let mount = root.child();
            mount.with(|| {
                for _ in 0..4 {
                    let slot = watch_slot::<CountingWatch>();
                    slot.set_value(Some(CountingWatch(disconnects.clone())));
                }
            });
            mount.cleanup();
        }

        assert_eq!(disconnects.load(Ordering::SeqCst), 12);
    }
}
