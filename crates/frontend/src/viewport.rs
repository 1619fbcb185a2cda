//! Viewport width access and the resize subscription lifecycle.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use sweetshop_layout::{LayoutObserver, LayoutTier};

/// Current viewport width in CSS pixels.
///
/// The resize notification itself carries no payload; this is the only
/// information read when one arrives.
pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Scoped `resize` subscription: attached on construction, detached on drop.
///
/// Keeping detachment in `Drop` means a torn-down component can never keep
/// receiving resize updates (dangling-listener bug class).
struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    fn attach(handler: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(err) =
            window().add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&err);
        }
        Self { callback }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = window()
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

/// Track the active layout tier for the lifetime of the current scope.
///
/// Re-classifies on every resize notification, but only writes the signal
/// when the tier actually changed: consumers see mobile to desktop as a
/// single transition however many resize events fired in between.
pub fn use_layout_tier() -> ReadSignal<LayoutTier> {
    let mut observer = LayoutObserver::new(viewport_width());
    let (tier, set_tier) = create_signal(observer.tier());

    let listener = ResizeListener::attach(move || {
        if observer.on_resize(viewport_width()) {
            set_tier.set(observer.tier());
        }
    });
    on_cleanup(move || drop(listener));

    tier
}
