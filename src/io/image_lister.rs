use crate::types::{ViewError, ViewResult};
use std::fs;
use std::path::Path;

/// Add the leading `.` to bare extension names (`jpg` -> `.jpg`)
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| {
            let ext = ext.as_ref();
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

/// Suffix of a file name, dot included, the way a path suffix is defined:
/// `a.b.jpg` -> `.jpg`, `.hidden` and `noext` -> none.
fn file_suffix(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(pos) if pos + 1 == name.len() => None,
        Some(pos) => Some(&name[pos..]),
    }
}

/// List the preview images in `dir`.
///
/// Returns bare file names whose suffix is one of `extensions` (each given
/// with its leading dot), in the order the directory yields them. Nothing
/// is sorted and subdirectories are not descended into.
pub fn list_images<P: AsRef<Path>, S: AsRef<str>>(
    dir: P,
    extensions: &[S],
) -> ViewResult<Vec<String>> {
    let dir = dir.as_ref();
    log::info!("Listing images in {}", dir.display());

    let entries = fs::read_dir(dir).map_err(|e| ViewError::io(dir, e))?;
    let mut images = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| ViewError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        let accepted = file_suffix(&name)
            .map(|suffix| extensions.iter().any(|ext| ext.as_ref() == suffix))
            .unwrap_or(false);

        if accepted {
            images.push(name);
        } else {
            log::trace!("Skipping {}", name);
        }
    }

    log::info!("Found {} image(s)", images.len());
    Ok(images)
}
