//! Pairing of preview images with extracted `.SAFE` products
//!
//! Product folders and quicklooks share most of their name fields:
//!
//! ```text
//! S1A_IW_GRDH_1SDV_20170717T024712_20170717T024736_017505_01D444_2D47.SAFE
//! s1a-iw-grd-vv-20170717t024712-20170717t024736-017505-01d444-001.jpg
//! ```
//!
//! Mission, mode, start, stop, absolute orbit and datatake id sit at the
//! same token positions in both, so those six positions are the match key.

use crate::core::coordinates::reformat_coordinates;
use crate::io::safe_reader::{format_start_time, SafeReader};
use crate::types::{MatchRecord, ViewError, ViewResult};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Token positions compared between product and image names
pub const KEY_POSITIONS: [usize; 6] = [0, 1, 4, 5, 6, 7];

/// Extension of an extracted product folder
pub const ARCHIVE_EXTENSION: &str = "SAFE";

/// Lowercase `name` and split it on `_` and `-`.
///
/// Consecutive delimiters give empty tokens, so positions stay aligned with
/// the raw name.
pub fn tokenize(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| c == '_' || c == '-')
        .map(str::to_string)
        .collect()
}

/// Number of `positions` at which both sequences hold the same token.
/// A position past the end of either sequence never counts.
pub fn count_equal_positions<S: AsRef<str>>(a: &[S], b: &[S], positions: &[usize]) -> usize {
    positions
        .iter()
        .filter(|&&pos| match (a.get(pos), b.get(pos)) {
            (Some(x), Some(y)) => x.as_ref() == y.as_ref(),
            _ => false,
        })
        .count()
}

/// Whether a product folder name belongs to an image name
pub fn names_match(archive_name: &str, image_name: &str) -> bool {
    count_equal_positions(&tokenize(archive_name), &tokenize(image_name), &KEY_POSITIONS)
        == KEY_POSITIONS.len()
}

/// Walk `archives` in order and pair them with `images`.
///
/// Only the image currently waiting for a product is compared; a match
/// moves on to the next image. Returns, for each matched image in turn, the
/// index of its archive. Stops as soon as every image is paired, so the
/// result is shorter than `images` only when the archives run out.
pub fn pair_archives<S: AsRef<str>, T: AsRef<str>>(images: &[S], archives: &[T]) -> Vec<usize> {
    let mut pairs = Vec::with_capacity(images.len());
    if images.is_empty() {
        return pairs;
    }

    for (archive_idx, archive) in archives.iter().enumerate() {
        let image = images[pairs.len()].as_ref();
        let archive_tokens = tokenize(archive.as_ref());
        let image_tokens = tokenize(image);
        let equal = count_equal_positions(&archive_tokens, &image_tokens, &KEY_POSITIONS);

        log::debug!(
            "{} vs {}: {}/{} key fields equal",
            archive.as_ref(),
            image,
            equal,
            KEY_POSITIONS.len()
        );

        if equal == KEY_POSITIONS.len() {
            pairs.push(archive_idx);
        }

        if pairs.len() == images.len() {
            break;
        }
    }

    pairs
}

fn is_archive(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(ARCHIVE_EXTENSION))
}

/// Matches preview images against the extracted products in one directory
pub struct ArchiveMatcher {
    unzip_dir: PathBuf,
}

impl ArchiveMatcher {
    /// Create a matcher over the directory holding the extracted products
    pub fn new<P: AsRef<Path>>(unzip_dir: P) -> Self {
        Self {
            unzip_dir: unzip_dir.as_ref().to_path_buf(),
        }
    }

    pub fn unzip_dir(&self) -> &Path {
        &self.unzip_dir
    }

    /// `.SAFE` entries of the directory, in the order it yields them
    fn list_archives(&self) -> ViewResult<Vec<(String, PathBuf)>> {
        let entries =
            fs::read_dir(&self.unzip_dir).map_err(|e| ViewError::io(&self.unzip_dir, e))?;

        let mut archives = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ViewError::io(&self.unzip_dir, e))?;
            let path = entry.path();
            if is_archive(&path) {
                archives.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }
        Ok(archives)
    }

    /// Recover footprint and start time for each image.
    ///
    /// Records come back in image order. Any unreadable product of a matched
    /// pair aborts the whole run. Running out of products before every image
    /// is matched is not an error: the short list is returned and a warning
    /// is logged.
    pub fn match_images<S: AsRef<str>>(&self, images: &[S]) -> ViewResult<Vec<MatchRecord>> {
        let expected = images.len();
        if expected == 0 {
            log::info!("No images to match");
            return Ok(Vec::new());
        }

        log::info!(
            "Matching {} image(s) against products in {}",
            expected,
            self.unzip_dir.display()
        );

        let archives = self.list_archives()?;
        let names: Vec<&str> = archives.iter().map(|(name, _)| name.as_str()).collect();
        let pairs = pair_archives(images, &names);

        let mut info = Vec::with_capacity(pairs.len());
        for (image, &archive_idx) in images.iter().zip(&pairs) {
            let (name, path) = &archives[archive_idx];
            log::debug!("{} -> {}", image.as_ref(), name);
            info.push(Self::read_record(path)?);
        }

        if info.len() < expected {
            log::warn!(
                "Only {} of {} image(s) matched a product; first unmatched image: {}",
                info.len(),
                expected,
                images[info.len()].as_ref()
            );
        } else {
            log::info!("Matched all {} image(s)", expected);
        }

        Ok(info)
    }

    fn read_record(safe_dir: &Path) -> ViewResult<MatchRecord> {
        let reader = SafeReader::new(safe_dir);
        let coordinates = reformat_coordinates(&reader.read_coordinates()?);
        let start_time = format_start_time(&reader.read_start_time()?);
        Ok(MatchRecord::new(coordinates, start_time))
    }

    /// Number of products in the directory.
    ///
    /// Every product leaves two entries behind (the downloaded request file
    /// and its extracted folder), so this is half the entry count.
    pub fn count_archives(&self) -> ViewResult<usize> {
        let entries =
            fs::read_dir(&self.unzip_dir).map_err(|e| ViewError::io(&self.unzip_dir, e))?;

        let mut count = 0;
        for entry in entries {
            entry.map_err(|e| ViewError::io(&self.unzip_dir, e))?;
            count += 1;
        }

        log::debug!("{} entries in {}", count, self.unzip_dir.display());
        Ok(count / 2)
    }
}
