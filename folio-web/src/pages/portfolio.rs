use crate::content;
use dioxus::prelude::*;
use folio_common::{GalleryState, Portfolio};
use folio_ui::wasm_utils::scroll_to_section;
use folio_ui::{
    AboutView, ContactView, ErrorDisplay, FooterView, GalleryModal, HeroView, NavBarView,
    ProjectsView, SkillsView,
};
use tracing::{error, info};

/// The whole site. Owns the gallery selection: project cards open it here,
/// `GalleryModal` navigates and closes it.
#[component]
pub fn PortfolioPage() -> Element {
    let content: Result<Portfolio, String> = use_hook(|| {
        content::load_portfolio().map_err(|e| {
            error!("Failed to load portfolio content: {e}");
            e.to_string()
        })
    });
    let mut gallery = use_signal(GalleryState::new);

    let portfolio = match content {
        Ok(portfolio) => portfolio,
        Err(message) => {
            return rsx! {
                ErrorDisplay { message }
            };
        }
    };

    let catalog = portfolio.gallery.clone();
    let year = js_sys_x::Date::new_0().get_full_year() as i32;

    rsx! {
        NavBarView {
            initials: portfolio.profile.initials.clone(),
            on_navigate: move |id: String| scroll_to_section(&id),
        }
        HeroView {
            profile: portfolio.profile.clone(),
            on_navigate: move |id: String| scroll_to_section(&id),
        }
        AboutView {
            about: portfolio.about.clone(),
            location: portfolio.profile.location.clone(),
        }
        SkillsView { skills: portfolio.skills.clone() }
        ProjectsView {
            projects: portfolio.projects.clone(),
            on_view_gallery: move |title: String| {
                let mut state = gallery.write();
                state.open(title, &catalog);
                info!("Opening gallery for {} ({} images)", state.selected_key(), state.len());
            },
        }
        ContactView { contact: portfolio.contact.clone() }
        FooterView {
            profile: portfolio.profile.clone(),
            contact: portfolio.contact.clone(),
            year,
        }
        GalleryModal { gallery }
    }
}
