//! Page sections, each fed from the site content

mod about;
mod contact;
mod footer;
mod hero;
mod nav_bar;
mod project_card;
mod projects;
mod section_heading;
mod skills;

pub use about::AboutView;
pub use contact::ContactView;
pub use footer::FooterView;
pub use hero::HeroView;
pub use nav_bar::{NavBarView, NAV_SECTIONS};
pub use project_card::{status_badge_class, ProjectCardView};
pub use projects::ProjectsView;
pub use section_heading::SectionHeading;
pub use skills::{SkillAccent, SkillsView};
