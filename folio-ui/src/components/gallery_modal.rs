//! Project gallery overlay
//!
//! Full-screen viewer over a project's screenshots with prev/next arrows, a
//! counter, a thumbnail strip and keyboard navigation.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, ImageIcon, XIcon};
use crate::components::{ChromelessButton, Modal};
use crate::wasm_utils::{BodyScrollLock, KeydownListener};
use dioxus::prelude::*;
use folio_common::{GalleryCommand, GalleryState};
use tracing::{debug, info};

/// Ring style for a thumbnail, highlighted when it is the image on screen
pub fn thumbnail_class(is_active: bool) -> &'static str {
    if is_active {
        "flex-shrink-0 w-16 h-16 rounded-lg overflow-hidden border-2 transition-all duration-200 hover:scale-105 border-blue-500 opacity-100 shadow-lg"
    } else {
        "flex-shrink-0 w-16 h-16 rounded-lg overflow-hidden border-2 transition-all duration-200 hover:scale-105 border-slate-600 opacity-60 hover:opacity-80"
    }
}

/// What to do with the overlay's keydown listener and scroll lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    Attach,
    Release,
    Keep,
}

/// Attach only when opening without guards, release only when closing with
/// them. Anything else leaves the guards as they are, so re-running the
/// effect never stacks a second listener.
pub fn guard_action(is_open: bool, held: bool) -> GuardAction {
    match (is_open, held) {
        (true, false) => GuardAction::Attach,
        (false, true) => GuardAction::Release,
        _ => GuardAction::Keep,
    }
}

/// Command for a key seen by the document listener.
///
/// Escape is left out: the dialog's `cancel` event already closes the
/// overlay, and closing must happen once per keypress.
pub fn listener_command(key: &str) -> Option<GalleryCommand> {
    GalleryCommand::from_key(key).filter(|command| *command != GalleryCommand::Close)
}

/// Gallery overlay bound to the page's `GalleryState`.
///
/// Always rendered by the page; visibility follows `gallery.is_open()`. The
/// page opens it, this component navigates and closes it. While open it holds
/// a document keydown listener for the arrow keys and a body scroll lock, both
/// released as soon as it closes or unmounts.
#[component]
pub fn GalleryModal(gallery: Signal<GalleryState>) -> Element {
    let mut gallery = gallery;
    let is_open = use_memo(move || gallery.read().is_open());
    let mut keydown = use_signal(|| None::<KeydownListener>);
    let mut scroll_lock = use_signal(|| None::<BodyScrollLock>);

    use_effect(move || {
        let held = keydown.peek().is_some() || scroll_lock.peek().is_some();
        match guard_action(is_open(), held) {
            GuardAction::Attach => {
                keydown.set(KeydownListener::attach(move |key| {
                    let Some(command) = listener_command(&key) else {
                        return;
                    };
                    if gallery.write().apply(command) {
                        debug!("Gallery key {key} -> {command:?}");
                    }
                }));
                scroll_lock.set(BodyScrollLock::acquire());
            }
            GuardAction::Release => {
                info!("Gallery closed");
                keydown.set(None);
                scroll_lock.set(None);
            }
            GuardAction::Keep => {}
        }
    });

    let state = gallery.read();
    let title = state.selected_key().to_string();

    rsx! {
        Modal {
            is_open,
            on_close: move |_| gallery.write().close(),
            label: Some(title.clone()),
            div { class: "relative w-full h-full max-w-7xl max-h-[95vh] mx-4 flex flex-col bg-slate-900 rounded-2xl shadow-2xl border border-slate-700 overflow-hidden",

                // Header
                div { class: "flex items-center justify-between p-6 border-b border-slate-700 bg-slate-800/50",
                    h2 { class: "text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent",
                        "{title}"
                    }
                    ChromelessButton {
                        class: Some(
                            "p-2 text-slate-400 hover:text-white hover:bg-slate-700/50 rounded-lg transition-all duration-200"
                                .to_string(),
                        ),
                        aria_label: Some("Close gallery".to_string()),
                        onclick: move |_| gallery.write().close(),
                        XIcon { class: "w-6 h-6" }
                    }
                }

                match state.current_image() {
                    None => rsx! {
                        GalleryPlaceholder {}
                    },
                    Some(src) => rsx! {
                        GalleryStage {
                            title: title.clone(),
                            src: src.to_string(),
                            index: state.current_index(),
                            counter: state.counter_label(),
                            show_navigation: state.shows_navigation(),
                            on_previous: move |_| gallery.write().previous(),
                            on_next: move |_| gallery.write().next(),
                        }
                        if state.shows_thumbnails() {
                            ThumbnailStrip {
                                title: title.clone(),
                                images: state.images().to_vec(),
                                current_index: state.current_index(),
                                on_select: move |i: usize| gallery.write().jump_to(i),
                            }
                        }
                    },
                }
            }
        }
    }
}

/// Main image with arrows and counter
#[component]
fn GalleryStage(
    title: String,
    src: String,
    index: usize,
    counter: Option<String>,
    show_navigation: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let alt = format!("{title} screenshot {}", index + 1);
    let arrow_class = "absolute top-1/2 -translate-y-1/2 p-3 bg-slate-900/90 text-white rounded-full hover:bg-slate-800/90 transition-all duration-200 shadow-lg border border-slate-600";

    rsx! {
        div { class: "relative flex-1 min-h-0 bg-slate-800 flex items-center justify-center p-4",
            img {
                src: "{src}",
                alt: "{alt}",
                class: "max-w-full max-h-full object-contain rounded-lg shadow-2xl border border-slate-700",
            }

            if show_navigation {
                ChromelessButton {
                    class: Some(format!("{arrow_class} left-4")),
                    aria_label: Some("Previous image".to_string()),
                    onclick: move |_| on_previous.call(()),
                    ChevronLeftIcon { class: "w-6 h-6" }
                }
                ChromelessButton {
                    class: Some(format!("{arrow_class} right-4")),
                    aria_label: Some("Next image".to_string()),
                    onclick: move |_| on_next.call(()),
                    ChevronRightIcon { class: "w-6 h-6" }
                }
            }

            if let Some(counter) = counter {
                div { class: "absolute top-4 right-4 bg-slate-900/90 text-white px-4 py-2 rounded-full text-sm font-medium border border-slate-600",
                    "{counter}"
                }
            }
        }
    }
}

#[component]
fn ThumbnailStrip(
    title: String,
    images: Vec<String>,
    current_index: usize,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "p-4 bg-slate-800/50 border-t border-slate-700",
            div { class: "flex gap-2 justify-center overflow-x-auto",
                for (i , image) in images.iter().enumerate() {
                    {
                        let number = i + 1;
                        rsx! {
                            ChromelessButton {
                                key: "{i}-{image}",
                                class: Some(thumbnail_class(i == current_index).to_string()),
                                aria_label: Some(format!("Show image {number}")),
                                onclick: move |_| on_select.call(i),
                                img {
                                    src: "{image}",
                                    alt: "{title} thumbnail {number}",
                                    class: "w-full h-full object-cover",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shown when the selected project has no screenshots
#[component]
fn GalleryPlaceholder() -> Element {
    rsx! {
        div { class: "flex-1 min-h-[50vh] flex flex-col items-center justify-center text-slate-400",
            ImageIcon { class: "w-16 h-16 mb-4" }
            p { class: "text-lg", "No images available for this project" }
            p { class: "text-sm mt-2", "Images will be added soon..." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_thumbnail_is_highlighted() {
        assert!(thumbnail_class(true).contains("border-blue-500"));
        assert!(!thumbnail_class(true).contains("opacity-60"));
    }

    #[test]
    fn test_inactive_thumbnail_is_dimmed() {
        assert!(thumbnail_class(false).contains("border-slate-600"));
        assert!(thumbnail_class(false).contains("opacity-60"));
    }

    #[test]
    fn test_guard_action_table() {
        assert_eq!(guard_action(true, false), GuardAction::Attach);
        assert_eq!(guard_action(true, true), GuardAction::Keep);
        assert_eq!(guard_action(false, true), GuardAction::Release);
        assert_eq!(guard_action(false, false), GuardAction::Keep);
    }

    #[test]
    fn test_open_close_cycles_never_stack_listeners() {
        let mut held = false;
        let mut attached = 0;
        let mut released = 0;
        for is_open in [true, true, false, false, true, true, true, false] {
            match guard_action(is_open, held) {
                GuardAction::Attach => {
                    attached += 1;
                    held = true;
                }
                GuardAction::Release => {
                    released += 1;
                    held = false;
                }
                GuardAction::Keep => {}
            }
            assert!(attached - released <= 1);
        }
        assert_eq!(attached, 2);
        assert_eq!(released, 2);
        assert!(!held);
    }

    #[test]
    fn test_listener_handles_arrows_only() {
        assert_eq!(listener_command("ArrowRight"), Some(GalleryCommand::Next));
        assert_eq!(listener_command("ArrowLeft"), Some(GalleryCommand::Previous));
        assert_eq!(listener_command("Escape"), None);
        assert_eq!(listener_command("Enter"), None);
    }
}
