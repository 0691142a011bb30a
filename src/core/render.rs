use crate::types::{MatchRecord, ViewError, ViewResult};
use chrono::Local;
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Layout of the start and "now" labels on the page
pub const LABEL_TIME_FORMAT: &str = "%d %b %Y  %H:%M:%S";

const STATUS_GREEN: &str = "\x1b[92m";
const STATUS_RESET: &str = "\x1b[0m";

/// Current local time as shown on the page
pub fn local_time_label() -> String {
    Local::now().format(LABEL_TIME_FORMAT).to_string()
}

/// One gallery tile: an image and, when it was matched, its metadata
#[derive(Debug, Clone, Serialize)]
pub struct GalleryEntry {
    pub image: String,
    pub info: Option<MatchRecord>,
}

/// Everything the page template can see
#[derive(Debug, Clone, Serialize)]
pub struct RenderParams {
    /// Display width of each image in pixels
    pub width: u32,
    pub images: Vec<String>,
    /// Positionally aligned with `images`; may be shorter
    pub info: Vec<MatchRecord>,
    pub entries: Vec<GalleryEntry>,
    pub time_start: String,
    pub time_now: String,
    pub image_label: String,
    pub archive_count: usize,
}

impl RenderParams {
    pub fn new(
        width: u32,
        images: Vec<String>,
        info: Vec<MatchRecord>,
        time_start: String,
        image_label: String,
        archive_count: usize,
    ) -> Self {
        let entries = images
            .iter()
            .enumerate()
            .map(|(i, image)| GalleryEntry {
                image: image.clone(),
                info: info.get(i).cloned(),
            })
            .collect();

        Self {
            width,
            images,
            info,
            entries,
            time_start,
            time_now: local_time_label(),
            image_label,
            archive_count,
        }
    }
}

/// Renders the gallery page from a Jinja-style template file
pub struct PageRenderer {
    template_path: PathBuf,
}

impl PageRenderer {
    pub fn new<P: AsRef<Path>>(template_path: P) -> Self {
        Self {
            template_path: template_path.as_ref().to_path_buf(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Load the template and render `params` through it
    pub fn render(&self, params: &RenderParams) -> ViewResult<String> {
        log::info!("Rendering page with template {}", self.template_path.display());

        let source = fs::read_to_string(&self.template_path)
            .map_err(|e| ViewError::io(&self.template_path, e))?;

        // The file name selects auto-escaping, so `.html` templates get it
        let name = self
            .template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template.html".to_string());

        let html = render_str(&name, &source, params)?;
        println!("{}Анализ окончен{}", STATUS_GREEN, STATUS_RESET);
        Ok(html)
    }
}

/// Render a template held in memory
pub fn render_str(name: &str, source: &str, params: &RenderParams) -> ViewResult<String> {
    let env = Environment::new();
    let template = env.template_from_named_str(name, source)?;
    Ok(template.render(params)?)
}
