use crate::components::icons::{GithubIcon, LinkedinIcon, MailIcon};
use dioxus::prelude::*;
use folio_common::portfolio::{Contact, Profile};

const SOCIAL_CLASS: &str = "w-12 h-12 bg-slate-800 hover:bg-slate-700 rounded-xl flex items-center justify-center transition-all duration-300 hover:scale-110 group";

#[component]
pub fn FooterView(profile: Profile, contact: Contact, year: i32) -> Element {
    let mailto = format!("mailto:{}", contact.email);

    rsx! {
        footer { class: "py-12 px-4 sm:px-6 lg:px-8 border-t border-slate-700/50",
            div { class: "max-w-7xl mx-auto",
                div { class: "flex flex-col md:flex-row justify-between items-center",
                    div { class: "text-center md:text-left mb-6 md:mb-0",
                        h3 { class: "text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent mb-2",
                            "{profile.name}"
                        }
                        p { class: "text-slate-400", "{profile.role}" }
                    }
                    div { class: "flex space-x-6",
                        a {
                            href: "{contact.github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "GitHub",
                            class: SOCIAL_CLASS,
                            GithubIcon { class: "w-6 h-6 text-slate-400 group-hover:text-white transition-colors duration-300" }
                        }
                        a {
                            href: "{contact.linkedin_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "LinkedIn",
                            class: SOCIAL_CLASS,
                            LinkedinIcon { class: "w-6 h-6 text-slate-400 group-hover:text-blue-400 transition-colors duration-300" }
                        }
                        a {
                            href: "{mailto}",
                            aria_label: "Email",
                            class: SOCIAL_CLASS,
                            MailIcon { class: "w-6 h-6 text-slate-400 group-hover:text-emerald-400 transition-colors duration-300" }
                        }
                    }
                }
                div { class: "mt-8 pt-8 border-t border-slate-700/50 text-center",
                    p { class: "text-slate-400", "© {year} {profile.name}. Built with Rust & Dioxus." }
                }
            }
        }
    }
}
