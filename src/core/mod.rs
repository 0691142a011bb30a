//! Core gallery modules

pub mod coordinates;
pub mod matcher;
pub mod render;

// Re-export main types
pub use coordinates::{reformat_coordinates, try_reformat_coordinates, MalformedCoordinates};
pub use matcher::{names_match, pair_archives, tokenize, ArchiveMatcher, KEY_POSITIONS};
pub use render::{local_time_label, GalleryEntry, PageRenderer, RenderParams};
