//! WASM utilities for browser interop
//!
//! Browser side effects the overlay needs while it is open (a document
//! `keydown` listener and a scroll lock on `<body>`) are held in guards that
//! undo themselves on `Drop`. Store a guard in a `Signal<Option<_>>` and set it
//! to `None` to release it; unmounting the owning component drops it too.

use wasm_bindgen_x::prelude::*;

/// A document `keydown` listener that removes itself when dropped.
///
/// Holding the `Closure` here (instead of `Closure::forget`) keeps exactly one
/// listener attached per guard, no matter how often the overlay is reopened.
pub struct KeydownListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl KeydownListener {
    const EVENT: &'static str = "keydown";

    /// Attach `on_key` to the current document. Returns `None` outside a browser.
    pub fn attach(mut on_key: impl FnMut(String) + 'static) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;

        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |event: JsValue| {
            if let Ok(event) = event.dyn_into::<web_sys_x::KeyboardEvent>() {
                on_key(event.key());
            }
        }));

        if let Err(e) =
            document.add_event_listener_with_callback(Self::EVENT, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach keydown listener: {:?}", e);
            return None;
        }

        Some(Self { document, callback })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(Self::EVENT, self.callback.as_ref().unchecked_ref());
    }
}

/// Hides page scrollbars while held; restores `overflow: unset` on drop.
pub struct BodyScrollLock {
    body: web_sys_x::HtmlElement,
}

impl BodyScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = web_sys_x::window()?.document()?.body()?;
        let _ = body.style().set_property("overflow", "hidden");
        Some(Self { body })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        let _ = self.body.style().set_property("overflow", "unset");
    }
}

/// Smooth-scroll the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::debug!("No section with id {id}");
        return;
    };

    let options = web_sys_x::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
