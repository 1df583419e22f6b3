//! Modal overlay built on the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and `::backdrop`
//! styling for free. The dialog's own `display` is left alone; layout lives on
//! an inner fixed container that also acts as the click-to-close backdrop.
//!
//! `showModal()` throws if the dialog is already open, so the effect checks the
//! `open` attribute before toggling.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method (`showModal` / `close`) on a dialog element
fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    let Ok(value) = js_sys_x::Reflect::get(element, &method.into()) else {
        return;
    };
    if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
        if let Err(e) = func.call0(element) {
            tracing::warn!("dialog.{method}() failed: {:?}", e);
        }
    }
}

/// Wraps content in a native `<dialog>`.
///
/// Clicking the dimmed area around `children` or pressing Escape calls
/// `on_close`. Clicks inside `children` never reach the backdrop handler.
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    children: Element,
    /// Accessible name for the dialog
    #[props(default)]
    label: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{id}")
    });
    let effect_id = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&effect_id))
        else {
            return;
        };

        let is_dialog_open = element.has_attribute("open");
        match (is_open, is_dialog_open) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent max-w-none max-h-none backdrop:bg-black/80 backdrop:backdrop-blur-sm",
            aria_label: label.as_deref(),
            // Escape fires 'cancel'; keep the element open until state says otherwise
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "contents",
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
