use super::{ProjectCardView, SectionHeading};
use dioxus::prelude::*;
use folio_common::Project;

#[component]
pub fn ProjectsView(projects: Vec<Project>, on_view_gallery: EventHandler<String>) -> Element {
    rsx! {
        section { id: "projects", class: "py-20 px-4 sm:px-6 lg:px-8",
            div { class: "max-w-7xl mx-auto",
                SectionHeading {
                    title: "Featured Projects".to_string(),
                    gradient: "from-emerald-400 to-blue-400",
                    bar: "from-emerald-500 to-blue-500",
                }
                div { class: "grid md:grid-cols-2 gap-8",
                    for project in projects.iter() {
                        ProjectCardView {
                            key: "{project.title}",
                            project: project.clone(),
                            on_view_gallery,
                        }
                    }
                }
            }
        }
    }
}
