//! folio-common - Pure state and content types for the portfolio site
//!
//! Nothing in here touches the DOM, so everything is unit tested natively.

mod gallery;
mod gallery_command;
pub mod portfolio;

pub use gallery::GalleryState;
pub use gallery_command::GalleryCommand;
pub use portfolio::{ContentError, ImageCatalog, Portfolio, Project, ProjectStatus};
