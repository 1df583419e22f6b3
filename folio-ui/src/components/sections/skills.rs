use super::SectionHeading;
use crate::components::icons::{DatabaseIcon, MonitorIcon, ServerIcon};
use dioxus::prelude::*;
use folio_common::portfolio::{Skill, SkillBadge, SkillGroups};

/// Color theme of a skill group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillAccent {
    Blue,
    Emerald,
    Purple,
}

impl SkillAccent {
    pub fn level_class(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-300/20 text-blue-300 border border-blue-300/30",
            Self::Emerald => "bg-emerald-300/20 text-emerald-300 border border-emerald-300/30",
            Self::Purple => "bg-purple-300/20 text-purple-300 border border-purple-300/30",
        }
    }

    fn card_hover(&self) -> &'static str {
        match self {
            Self::Blue => "hover:border-blue-500/50",
            Self::Emerald => "hover:border-emerald-500/50",
            Self::Purple => "hover:border-purple-500/50",
        }
    }
}

/// Badge pill colors: green for new skills, yellow while still learning
pub fn badge_class(badge: SkillBadge) -> &'static str {
    match badge {
        SkillBadge::New => "bg-emerald-500/20 text-emerald-400 border border-emerald-500/30",
        SkillBadge::Learning => "bg-yellow-500/20 text-yellow-400 border border-yellow-500/30",
    }
}

#[component]
pub fn SkillsView(skills: SkillGroups) -> Element {
    rsx! {
        section { id: "skills", class: "py-20 px-4 sm:px-6 lg:px-8 bg-slate-800/30",
            div { class: "max-w-7xl mx-auto",
                SectionHeading {
                    title: "Skills & Expertise".to_string(),
                    gradient: "from-purple-400 to-emerald-400",
                    bar: "from-purple-500 to-emerald-500",
                }
                div { class: "grid lg:grid-cols-3 gap-8",
                    SkillGroupCard {
                        title: "Frontend",
                        accent: SkillAccent::Blue,
                        skills: skills.frontend.clone(),
                        MonitorIcon { class: "w-8 h-8 text-blue-400 mr-3" }
                    }
                    SkillGroupCard {
                        title: "Backend",
                        accent: SkillAccent::Emerald,
                        skills: skills.backend.clone(),
                        ServerIcon { class: "w-8 h-8 text-emerald-400 mr-3" }
                    }
                    SkillGroupCard {
                        title: "Tools & DevOps",
                        accent: SkillAccent::Purple,
                        skills: skills.tools.clone(),
                        DatabaseIcon { class: "w-8 h-8 text-purple-400 mr-3" }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillGroupCard(
    title: &'static str,
    accent: SkillAccent,
    skills: Vec<Skill>,
    /// Group icon
    children: Element,
) -> Element {
    let hover = accent.card_hover();
    let level_class = accent.level_class();

    rsx! {
        div { class: "bg-slate-800/50 backdrop-blur-sm rounded-2xl p-8 border border-slate-700/50 {hover} transition-all duration-300",
            div { class: "flex items-center mb-6",
                {children}
                h3 { class: "text-2xl font-bold text-white", "{title}" }
            }
            div { class: "grid grid-cols-2 gap-4",
                for skill in skills.iter() {
                    div {
                        key: "{skill.name}",
                        class: "flex flex-col items-center p-4 bg-slate-700/30 rounded-xl hover:bg-slate-700/50 transition-all duration-300",
                        span { class: "text-slate-200 font-medium text-sm mb-2 block text-center",
                            "{skill.name}"
                        }
                        div { class: "flex items-center justify-center gap-2",
                            span { class: "px-3 py-1 rounded-full text-xs font-semibold {level_class}",
                                {skill.level.label().to_string()}
                            }
                            if let Some(badge) = skill.badge {
                                span { class: format!("px-2 py-1 text-xs rounded-full {}", badge_class(badge)),
                                    {badge.label().to_string()}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_colors() {
        assert!(badge_class(SkillBadge::New).contains("emerald"));
        assert!(badge_class(SkillBadge::Learning).contains("yellow"));
    }

    #[test]
    fn test_accents_are_distinct() {
        let classes = [
            SkillAccent::Blue.level_class(),
            SkillAccent::Emerald.level_class(),
            SkillAccent::Purple.level_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }
}
