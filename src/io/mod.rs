//! I/O modules for listing previews and reading extracted products

pub mod image_lister;
pub mod safe_reader;

pub use image_lister::{list_images, normalize_extensions};
pub use safe_reader::SafeReader;
