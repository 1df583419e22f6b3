use dioxus::prelude::*;

/// Centered gradient heading with an underline bar
#[component]
pub fn SectionHeading(
    title: String,
    /// Tailwind gradient stops for the text, e.g. "from-blue-400 to-purple-400"
    gradient: &'static str,
    /// Gradient stops for the underline bar
    bar: &'static str,
    #[props(default)] subtitle: Option<String>,
) -> Element {
    rsx! {
        div { class: "text-center mb-16",
            h2 { class: "text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r {gradient} bg-clip-text text-transparent",
                "{title}"
            }
            div { class: "w-24 h-1 bg-gradient-to-r {bar} mx-auto" }
            if let Some(subtitle) = subtitle {
                p { class: "text-xl text-slate-400 mt-6 max-w-2xl mx-auto", "{subtitle}" }
            }
        }
    }
}
