//! One gallery run: list, match, count, render, write

use crate::config::GalleryConfig;
use crate::core::matcher::ArchiveMatcher;
use crate::core::render::{PageRenderer, RenderParams};
use crate::io::image_lister::list_images;
use crate::types::{ViewError, ViewResult};
use std::fs;
use std::path::PathBuf;

/// Build the render parameters for `config` without writing anything
pub fn collect(config: &GalleryConfig) -> ViewResult<RenderParams> {
    let images = list_images(&config.image_dir, &config.extensions)?;

    let matcher = ArchiveMatcher::new(&config.unzip_dir);
    let info = matcher.match_images(&images)?;
    let archive_count = matcher.count_archives()?;
    log::info!("{} product(s) in {}", archive_count, config.unzip_dir.display());

    let image_label = config
        .image_label
        .clone()
        .unwrap_or_else(|| images.len().to_string());

    Ok(RenderParams::new(
        config.width,
        images,
        info,
        config.time_label.clone(),
        image_label,
        archive_count,
    ))
}

/// Render the gallery page and write it, replacing any existing file.
/// Returns the path written.
pub fn run(config: &GalleryConfig) -> ViewResult<PathBuf> {
    let params = collect(config)?;
    let html = PageRenderer::new(&config.template).render(&params)?;

    let output = config.output_path();
    fs::write(&output, html).map_err(|e| ViewError::io(&output, e))?;
    log::info!("Gallery written to {}", output.display());

    Ok(output)
}
