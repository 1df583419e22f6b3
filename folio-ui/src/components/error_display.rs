//! Error display component

use dioxus::prelude::*;

/// Generic error box, used when the page content cannot be loaded
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "max-w-2xl mx-auto mt-24 bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded",
            p { "{message}" }
        }
    }
}
