use crate::components::{Button, ButtonVariant};
use dioxus::prelude::*;
use folio_common::portfolio::Profile;

/// Full-height intro with name, role and the two calls to action
#[component]
pub fn HeroView(profile: Profile, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        section { class: "min-h-screen flex items-center justify-center relative overflow-hidden",
            div { class: "absolute inset-0 bg-gradient-to-br from-blue-900/20 via-purple-900/20 to-emerald-900/20" }
            div { class: "relative z-10 text-center px-4 sm:px-6 lg:px-8",
                h1 { class: "text-5xl md:text-7xl font-extrabold mb-6",
                    span { class: "bg-gradient-to-r from-blue-400 via-purple-400 to-emerald-400 bg-clip-text text-transparent",
                        "{profile.name}"
                    }
                }
                h2 { class: "text-2xl md:text-3xl text-slate-300 mb-8 font-medium", "{profile.role}" }
                p { class: "text-xl text-slate-400 mb-12 max-w-2xl mx-auto leading-relaxed",
                    "{profile.tagline}"
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    Button {
                        variant: ButtonVariant::Gradient,
                        onclick: move |_| on_navigate.call("projects".to_string()),
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_navigate.call("contact".to_string()),
                        "Get In Touch"
                    }
                }
            }
            // Scroll hint
            div { class: "absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce",
                div { class: "w-6 h-10 border-2 border-slate-400 rounded-full flex justify-center",
                    div { class: "w-1 h-3 bg-slate-400 rounded-full mt-2 animate-pulse" }
                }
            }
        }
    }
}
