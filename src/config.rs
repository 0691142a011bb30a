use crate::core::render::local_time_label;
use crate::io::image_lister::normalize_extensions;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["jpg", "png"];
pub const DEFAULT_TEMPLATE: &str = "template.html";
pub const DEFAULT_OUTPUT_NAME: &str = "View.html";
pub const DEFAULT_UNZIP_DIR: &str = "unzip";

/// Post-process a user supplied `--time`/`--image` label.
///
/// The value is split on `f` and only the second piece is kept, so
/// `f12:00` becomes `12:00` and `xfyfz` becomes `y`. A label without any
/// `f` is returned unchanged.
pub fn strip_format_prefix(value: &str) -> String {
    let mut pieces = value.split('f');
    pieces.next();
    match pieces.next() {
        Some(piece) => piece.to_string(),
        None => {
            log::warn!("Label '{}' has no 'f' prefix marker, using it as is", value);
            value.to_string()
        }
    }
}

/// Resolved settings for one gallery run
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Directory holding the preview images
    pub image_dir: PathBuf,
    pub time_label: String,
    /// `None` shows the number of listed images
    pub image_label: Option<String>,
    pub width: u32,
    /// Accepted image suffixes, leading dot included
    pub extensions: Vec<String>,
    pub template: PathBuf,
    /// `None` writes `View.html` into `image_dir`
    pub output: Option<PathBuf>,
    /// Directory holding the extracted `.SAFE` products
    pub unzip_dir: PathBuf,
}

impl GalleryConfig {
    /// Defaults for a gallery of `image_dir`; the start label is taken now
    pub fn new<P: AsRef<Path>>(image_dir: P) -> Self {
        Self {
            image_dir: image_dir.as_ref().to_path_buf(),
            time_label: local_time_label(),
            image_label: None,
            width: DEFAULT_WIDTH,
            extensions: normalize_extensions(&DEFAULT_EXTENSIONS),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: None,
            unzip_dir: PathBuf::from(DEFAULT_UNZIP_DIR),
        }
    }

    pub fn with_time_label(mut self, label: impl Into<String>) -> Self {
        self.time_label = label.into();
        self
    }

    pub fn with_image_label(mut self, label: impl Into<String>) -> Self {
        self.image_label = Some(label.into());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set accepted extensions, with or without their leading dot
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = normalize_extensions(extensions);
        self
    }

    pub fn with_template<P: AsRef<Path>>(mut self, template: P) -> Self {
        self.template = template.as_ref().to_path_buf();
        self
    }

    pub fn with_output<P: AsRef<Path>>(mut self, output: P) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_unzip_dir<P: AsRef<Path>>(mut self, unzip_dir: P) -> Self {
        self.unzip_dir = unzip_dir.as_ref().to_path_buf();
        self
    }

    /// Where the page is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.image_dir.join(DEFAULT_OUTPUT_NAME))
    }
}
