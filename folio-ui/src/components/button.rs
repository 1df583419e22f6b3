//! Button components

use dioxus::prelude::*;

/// Unstyled button: accessibility attributes and click wiring only.
/// Used for icon buttons, thumbnails and as the base of `Button`.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            aria_label: aria_label.as_deref(),
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Blue to purple gradient, the hero call to action
    Gradient,
    /// Bordered, transparent background
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Gradient => {
                "px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-500 rounded-xl font-semibold hover:from-blue-600 hover:to-purple-600 transform hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-xl"
            }
            Self::Outline => {
                "px-8 py-4 border-2 border-slate-700 rounded-xl font-semibold hover:bg-slate-800 hover:border-slate-600 transition-all duration-300"
            }
        }
    }
}

/// Styled button
#[component]
pub fn Button(
    variant: ButtonVariant,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        ChromelessButton { class: Some(variant.class().to_string()), onclick, {children} }
    }
}
