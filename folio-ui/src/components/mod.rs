//! Shared UI components

pub mod button;
pub mod error_display;
pub mod gallery_modal;
pub mod icons;
pub mod modal;
pub mod sections;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use error_display::ErrorDisplay;
pub use gallery_modal::GalleryModal;
pub use modal::Modal;
pub use sections::{
    AboutView, ContactView, FooterView, HeroView, NavBarView, ProjectCardView, ProjectsView,
    SkillsView,
};
