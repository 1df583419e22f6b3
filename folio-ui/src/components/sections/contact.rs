use super::SectionHeading;
use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon};
use dioxus::prelude::*;
use folio_common::portfolio::Contact;

#[component]
pub fn ContactView(contact: Contact) -> Element {
    rsx! {
        section { id: "contact", class: "py-20 px-4 sm:px-6 lg:px-8 bg-slate-800/30",
            div { class: "max-w-7xl mx-auto",
                SectionHeading {
                    title: "Get In Touch".to_string(),
                    gradient: "from-blue-400 to-emerald-400",
                    bar: "from-blue-500 to-emerald-500",
                    subtitle: Some(
                        "I'm always open to discussing new opportunities and interesting projects. Let's connect and build something amazing together!"
                            .to_string(),
                    ),
                }
                div { class: "grid lg:grid-cols-2 gap-12",
                    div { class: "space-y-8",
                        ContactCard {
                            label: "Email",
                            value: contact.email.clone(),
                            border_hover: "hover:border-blue-500/50",
                            tile: "bg-blue-500/20",
                            MailIcon { class: "w-7 h-7 text-blue-400" }
                        }
                        ContactCard {
                            label: "Phone",
                            value: contact.phone.clone(),
                            border_hover: "hover:border-emerald-500/50",
                            tile: "bg-emerald-500/20",
                            PhoneIcon { class: "w-7 h-7 text-emerald-400" }
                        }
                        ContactCard {
                            label: "Location",
                            value: contact.location.clone(),
                            border_hover: "hover:border-purple-500/50",
                            tile: "bg-purple-500/20",
                            MapPinIcon { class: "w-7 h-7 text-purple-400" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactCard(
    label: &'static str,
    value: String,
    border_hover: &'static str,
    /// Background of the icon tile
    tile: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex items-center space-x-4 p-6 bg-slate-800/50 backdrop-blur-sm rounded-2xl border border-slate-700/50 {border_hover} transition-all duration-300",
            div { class: "w-14 h-14 {tile} rounded-xl flex items-center justify-center",
                {children}
            }
            div {
                h3 { class: "text-lg font-semibold text-white", "{label}" }
                p { class: "text-slate-300", "{value}" }
            }
        }
    }
}
