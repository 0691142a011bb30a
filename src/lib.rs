//! safeview: an HTML gallery for Sentinel-1 quicklooks
//!
//! Pairs preview images with their extracted `.SAFE` products by filename
//! tokens, pulls the footprint from `preview/map-overlay.kml` and the start
//! time from `manifest.safe`, and renders everything through a template.

pub mod types;
pub mod io;
pub mod core;
pub mod config;
pub mod gallery;

// Re-export main types and functions for easier access
pub use crate::types::{MatchRecord, ViewError, ViewResult};
pub use crate::io::{list_images, SafeReader};
pub use crate::core::{reformat_coordinates, ArchiveMatcher, PageRenderer, RenderParams};
pub use crate::config::GalleryConfig;
pub use crate::gallery::run;
