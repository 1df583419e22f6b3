use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Nav labels; each scrolls to the section whose id is the lowercased label
pub const NAV_SECTIONS: [&str; 4] = ["About", "Skills", "Projects", "Contact"];

/// Fixed top navigation bar
#[component]
pub fn NavBarView(initials: String, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-40 bg-slate-900/80 backdrop-blur-md border-b border-slate-700/50",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center py-4",
                    div { class: "text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent",
                        "{initials}"
                    }
                    div { class: "hidden md:flex space-x-8",
                        for item in NAV_SECTIONS {
                            ChromelessButton {
                                key: "{item}",
                                class: Some(
                                    "text-slate-300 hover:text-white transition-colors duration-300 font-medium"
                                        .to_string(),
                                ),
                                onclick: move |_| on_navigate.call(item.to_lowercase()),
                                "{item}"
                            }
                        }
                    }
                }
            }
        }
    }
}
