//! folio-web - The portfolio site
//!
//! One page, no router. Content comes from `content/portfolio.json`, embedded
//! at build time.

pub mod content;
pub mod logging;
pub mod pages;

use dioxus::prelude::*;
use pages::PortfolioPage;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-slate-900 text-white", PortfolioPage {} }
    }
}
