use crate::{GalleryCommand, ImageCatalog};

/// State of the project gallery overlay.
///
/// The page drives `open`/`close` from project cards; the overlay drives
/// `next`/`previous`/`jump_to`. Both go through this one holder, so a click
/// or keypress handler reads and writes it within its own event turn.
///
/// `current_index < images.len()` whenever `images` is non-empty. With no
/// images every navigation call is a no-op and the index stays at 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    is_open: bool,
    selected_key: String,
    images: Vec<String>,
    current_index: usize,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay for `key`, always starting at the first image.
    ///
    /// Images come from `catalog`. A key the catalog does not know opens an
    /// empty gallery and the overlay shows a placeholder.
    pub fn open(&mut self, key: impl Into<String>, catalog: &ImageCatalog) {
        let key = key.into();
        self.images = catalog.images_for(&key);
        self.selected_key = key;
        self.current_index = 0;
        self.is_open = true;
    }

    /// Close the overlay and forget the selection. Idempotent.
    pub fn close(&mut self) {
        self.is_open = false;
        self.selected_key.clear();
        self.images.clear();
        self.current_index = 0;
    }

    /// Advance one image, wrapping from the last to the first.
    pub fn next(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    /// Go back one image, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }

    /// Jump straight to `index` (thumbnail click). Out-of-range input clamps
    /// to the last image.
    pub fn jump_to(&mut self, index: usize) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current_index = index.min(len - 1);
    }

    /// Apply a keyboard command. Returns `true` if anything changed.
    ///
    /// Commands are ignored while the overlay is closed.
    pub fn apply(&mut self, command: GalleryCommand) -> bool {
        if !self.is_open {
            return false;
        }
        let before = self.current_index;
        match command {
            GalleryCommand::Next => self.next(),
            GalleryCommand::Previous => self.previous(),
            GalleryCommand::Close => {
                self.close();
                return true;
            }
        }
        self.current_index != before
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Key of the selected project, empty when nothing is selected
    pub fn selected_key(&self) -> &str {
        &self.selected_key
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.images.is_empty() && index == self.current_index
    }

    /// "3 / 8" style counter, only when there is more than one image
    pub fn counter_label(&self) -> Option<String> {
        if self.images.len() > 1 {
            Some(format!("{} / {}", self.current_index + 1, self.images.len()))
        } else {
            None
        }
    }

    /// Thumbnail strip is only worth showing with more than one image
    pub fn shows_thumbnails(&self) -> bool {
        self.images.len() > 1
    }

    pub fn shows_navigation(&self) -> bool {
        self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{i}.png")).collect()
    }

    fn abc() -> Vec<String> {
        vec!["a.png".into(), "b.png".into(), "c.png".into()]
    }

    fn catalog_of(key: &str, images: Vec<String>) -> ImageCatalog {
        let mut catalog = ImageCatalog::new();
        catalog.insert(key, images);
        catalog
    }

    #[test]
    fn test_default_is_closed_and_empty() {
        let g = GalleryState::new();
        assert!(!g.is_open());
        assert_eq!(g.selected_key(), "");
        assert!(g.is_empty());
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.current_image(), None);
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog_of("Gallery", abc()));
        g.next();
        assert_eq!(g.current_index(), 1);
        g.next();
        assert_eq!(g.current_index(), 2);
        g.next();
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.current_image(), Some("a.png"));
    }

    #[test]
    fn test_previous_wraps_backward() {
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog_of("Gallery", abc()));
        g.previous();
        assert_eq!(g.current_index(), 2);
        assert_eq!(g.current_image(), Some("c.png"));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for n in 1..=7 {
            let mut g = GalleryState::new();
            g.open("Gallery", &catalog_of("Gallery", images(n)));
            for _ in 0..n {
                g.next();
            }
            assert_eq!(g.current_index(), 0, "cycle of {n}");
        }
    }

    #[test]
    fn test_previous_undoes_next_from_every_index() {
        for n in 1..=5 {
            for start in 0..n {
                let mut g = GalleryState::new();
                g.open("Gallery", &catalog_of("Gallery", images(n)));
                g.jump_to(start);
                g.next();
                g.previous();
                assert_eq!(g.current_index(), start, "len {n} start {start}");
            }
        }
    }

    #[test]
    fn test_single_image_wraps_onto_itself() {
        let mut g = GalleryState::new();
        g.open("Solo", &catalog_of("Solo", images(1)));
        g.next();
        assert_eq!(g.current_index(), 0);
        g.previous();
        assert_eq!(g.current_index(), 0);
    }

    #[test]
    fn test_jump_to_sets_index() {
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog_of("Gallery", images(5)));
        for i in 0..5 {
            g.jump_to(i);
            assert_eq!(g.current_index(), i);
        }
    }

    #[test]
    fn test_jump_to_out_of_range_clamps() {
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog_of("Gallery", images(4)));
        g.jump_to(99);
        assert_eq!(g.current_index(), 3);
    }

    #[test]
    fn test_open_resets_index() {
        let catalog = catalog_of("Gallery", images(5));
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog);
        g.jump_to(3);
        g.close();
        g.open("Gallery", &catalog);
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.images(), catalog.images_for("Gallery").as_slice());
    }

    #[test]
    fn test_open_while_open_retargets_and_resets() {
        let catalog: ImageCatalog = [
            ("First".to_string(), images(5)),
            ("Second".to_string(), abc()),
        ]
        .into_iter()
        .collect();
        let mut g = GalleryState::new();
        g.open("First", &catalog);
        g.jump_to(4);
        g.open("Second", &catalog);
        assert_eq!(g.selected_key(), "Second");
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.images(), abc().as_slice());
    }

    #[test]
    fn test_images_always_belong_to_selected_key() {
        let catalog: ImageCatalog = [
            ("Gallery".to_string(), abc()),
            ("NeoShop".to_string(), images(4)),
        ]
        .into_iter()
        .collect();
        let mut g = GalleryState::new();
        for key in ["Gallery", "NeoShop", "UnknownProject", "Gallery"] {
            g.open(key, &catalog);
            assert_eq!(g.selected_key(), key);
            assert_eq!(g.images(), catalog.images_for(key).as_slice());
        }
    }

    #[test]
    fn test_unknown_project_opens_empty() {
        let catalog = catalog_of("Gallery", abc());
        let mut g = GalleryState::new();
        g.open("UnknownProject", &catalog);
        assert!(g.is_open());
        assert_eq!(g.selected_key(), "UnknownProject");
        assert!(g.is_empty());
        g.next();
        g.previous();
        g.jump_to(2);
        assert_eq!(g.current_index(), 0);
        assert_eq!(g.current_image(), None);
        assert!(!g.shows_thumbnails());
        assert_eq!(g.counter_label(), None);
    }

    #[test]
    fn test_navigation_while_closed_does_not_panic() {
        let mut g = GalleryState::new();
        g.next();
        g.previous();
        g.jump_to(0);
        assert_eq!(g, GalleryState::new());
    }

    #[test]
    fn test_close_clears_selection() {
        let mut g = GalleryState::new();
        g.open("NeoShop", &catalog_of("NeoShop", images(3)));
        g.next();
        g.close();
        assert!(!g.is_open());
        assert_eq!(g.selected_key(), "");
        assert!(g.is_empty());
        assert_eq!(g.current_index(), 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut g = GalleryState::new();
        g.close();
        g.close();
        assert_eq!(g, GalleryState::new());
    }

    #[test]
    fn test_escape_while_closed_is_ignored() {
        let mut g = GalleryState::new();
        assert!(!g.apply(GalleryCommand::Close));
        assert!(!g.apply(GalleryCommand::Next));
        assert_eq!(g, GalleryState::new());
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog_of("Gallery", abc()));
        assert!(g.apply(GalleryCommand::Next));
        assert_eq!(g.current_index(), 1);
        assert!(g.apply(GalleryCommand::Previous));
        assert!(g.apply(GalleryCommand::Previous));
        assert_eq!(g.current_index(), 2);
        assert!(g.apply(GalleryCommand::Close));
        assert!(!g.is_open());
    }

    #[test]
    fn test_apply_reports_no_change_for_single_image() {
        let mut g = GalleryState::new();
        g.open("Solo", &catalog_of("Solo", images(1)));
        assert!(!g.apply(GalleryCommand::Next));
        assert!(!g.apply(GalleryCommand::Previous));
        assert!(g.is_open());
    }

    #[test]
    fn test_counter_only_for_multiple_images() {
        let mut g = GalleryState::new();
        g.open("Solo", &catalog_of("Solo", images(1)));
        assert_eq!(g.counter_label(), None);

        g.open("Gallery", &catalog_of("Gallery", images(8)));
        assert_eq!(g.counter_label().as_deref(), Some("1 / 8"));
        g.previous();
        assert_eq!(g.counter_label().as_deref(), Some("8 / 8"));
    }

    #[test]
    fn test_thumbnails_and_navigation_visibility() {
        let mut g = GalleryState::new();
        for (n, expected) in [(0, false), (1, false), (2, true), (9, true)] {
            g.open("Gallery", &catalog_of("Gallery", images(n)));
            assert_eq!(g.shows_thumbnails(), expected, "len {n}");
            assert_eq!(g.shows_navigation(), expected, "len {n}");
        }
    }

    #[test]
    fn test_active_thumbnail_follows_index() {
        let mut g = GalleryState::new();
        g.open("Gallery", &catalog_of("Gallery", abc()));
        assert!(g.is_active(0));
        g.jump_to(2);
        assert!(g.is_active(2));
        assert!(!g.is_active(0));
        g.next();
        assert!(g.is_active(0));
    }
}
