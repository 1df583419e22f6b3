//! folio-ui - View components for the portfolio site
//!
//! Pure view components take content and callbacks as props. The one stateful
//! piece is `GalleryModal`, which navigates the page's `GalleryState` signal.

pub mod components;
pub mod wasm_utils;

pub use components::*;
