/// Keyboard command understood by the gallery overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    /// ArrowRight
    Next,
    /// ArrowLeft
    Previous,
    /// Escape
    Close,
}

impl GalleryCommand {
    /// Map a DOM `KeyboardEvent.key` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}
