use crate::components::icons::{EyeIcon, ExternalLinkIcon, GithubIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;
use folio_common::{Project, ProjectStatus};

/// Status pill colors: green once completed, yellow while in progress
pub fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "bg-emerald-500/20 text-emerald-400 border border-emerald-500/30",
        ProjectStatus::InProgress => "bg-yellow-500/20 text-yellow-400 border border-yellow-500/30",
    }
}

const LINK_CLASS: &str = "flex items-center gap-2 text-slate-300 hover:text-white transition-colors duration-300 hover:bg-slate-700/50 px-4 py-2 rounded-lg";

/// One project: summary, tech tags, links and the gallery trigger.
///
/// `on_view_gallery` receives the project title, which is the gallery key.
#[component]
pub fn ProjectCardView(project: Project, on_view_gallery: EventHandler<String>) -> Element {
    let status_class = status_badge_class(project.status);
    let title = project.title.clone();

    rsx! {
        div { class: "bg-slate-800/50 backdrop-blur-sm rounded-2xl p-8 border border-slate-700/50 hover:border-slate-600/50 transition-all duration-300 group hover:scale-105",
            div { class: "flex justify-between items-start mb-4",
                h3 { class: "text-2xl font-bold text-white group-hover:text-blue-400 transition-colors duration-300",
                    "{project.title}"
                }
                span { class: "px-3 py-1 text-xs rounded-full font-medium whitespace-nowrap {status_class}",
                    {project.status.label().to_string()}
                }
            }

            p { class: "text-slate-300 mb-6 leading-relaxed", "{project.description}" }

            div { class: "flex flex-wrap gap-2 mb-6",
                for (i , tech) in project.tech.iter().enumerate() {
                    span {
                        key: "{i}",
                        class: "px-3 py-1 bg-slate-700/50 text-slate-300 rounded-lg text-sm font-medium hover:bg-slate-600/50 transition-colors duration-300",
                        "{tech}"
                    }
                }
            }

            if let Some(deploy) = &project.deploy {
                div { class: "mb-6 text-sm text-slate-400",
                    span { class: "font-medium text-slate-300", "Deploy: " }
                    "{deploy}"
                }
            }

            div { class: "flex flex-wrap gap-4",
                a {
                    href: "{project.github}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: LINK_CLASS,
                    GithubIcon { class: "w-5 h-5" }
                    span { "GitHub" }
                }
                if let Some(live_demo) = &project.live_demo {
                    a {
                        href: "{live_demo}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: LINK_CLASS,
                        ExternalLinkIcon { class: "w-5 h-5" }
                        span { "Live Demo" }
                    }
                }
                ChromelessButton {
                    class: Some(
                        "flex items-center gap-2 text-slate-300 hover:text-white transition-all duration-300 hover:bg-blue-600/20 hover:border-blue-500/30 border border-slate-600/30 px-4 py-2 rounded-lg"
                            .to_string(),
                    ),
                    onclick: move |_| on_view_gallery.call(title.clone()),
                    EyeIcon { class: "w-5 h-5" }
                    span { "View Details" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_colors() {
        assert!(status_badge_class(ProjectStatus::Completed).contains("emerald"));
        assert!(status_badge_class(ProjectStatus::InProgress).contains("yellow"));
    }
}
