use super::SectionHeading;
use crate::components::icons::{CodeIcon, DatabaseIcon, GlobeIcon, MapPinIcon};
use dioxus::prelude::*;
use folio_common::portfolio::{About, Highlight, HighlightIcon};

#[component]
pub fn AboutView(about: About, location: String) -> Element {
    rsx! {
        section { id: "about", class: "py-20 px-4 sm:px-6 lg:px-8",
            div { class: "max-w-7xl mx-auto",
                SectionHeading {
                    title: "About Me".to_string(),
                    gradient: "from-blue-400 to-purple-400",
                    bar: "from-blue-500 to-purple-500",
                }
                div { class: "grid lg:grid-cols-2 gap-12 items-center",
                    div { class: "space-y-6",
                        for (i , paragraph) in about.paragraphs.iter().enumerate() {
                            p { key: "{i}", class: "text-lg text-slate-300 leading-relaxed", "{paragraph}" }
                        }
                        div { class: "flex items-center space-x-2 text-emerald-400",
                            MapPinIcon { class: "w-5 h-5" }
                            span { class: "text-lg", "{location}" }
                        }
                    }
                    div { class: "grid grid-cols-2 gap-6",
                        for highlight in about.highlights.iter() {
                            HighlightCard { key: "{highlight.title}", highlight: highlight.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HighlightCard(highlight: Highlight) -> Element {
    let (icon, hover) = match highlight.icon {
        HighlightIcon::Code => (
            rsx! { CodeIcon { class: "w-12 h-12 text-blue-400 mx-auto mb-4" } },
            "hover:border-blue-500/50",
        ),
        HighlightIcon::Database => (
            rsx! { DatabaseIcon { class: "w-12 h-12 text-purple-400 mx-auto mb-4" } },
            "hover:border-purple-500/50",
        ),
        HighlightIcon::Globe => (
            rsx! { GlobeIcon { class: "w-12 h-12 text-yellow-400 mx-auto mb-4" } },
            "hover:border-yellow-500/50",
        ),
    };

    rsx! {
        div { class: "bg-slate-800/50 backdrop-blur-sm rounded-2xl p-6 border border-slate-700/50 {hover} transition-all duration-300",
            div { class: "text-center",
                {icon}
                h3 { class: "text-2xl font-bold text-white mb-2", "{highlight.title}" }
                p { class: "text-slate-400", "{highlight.detail}" }
            }
        }
    }
}
