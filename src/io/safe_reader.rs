use crate::types::{ViewError, ViewResult};
use chrono::NaiveDateTime;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs;
use std::path::{Path, PathBuf};

/// Footprint overlay inside an extracted product
pub const OVERLAY_FILE: &str = "preview/map-overlay.kml";
/// Product manifest inside an extracted product
pub const MANIFEST_FILE: &str = "manifest.safe";

pub const COORDINATES_ELEMENT: &str = "coordinates";
pub const START_TIME_ELEMENT: &str = "safe:startTime";

/// Timestamp layout used by `safe:startTime`
pub const MANIFEST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Layout shown in the gallery
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reader for the metadata of an extracted Sentinel-1 `.SAFE` folder
pub struct SafeReader {
    safe_dir: PathBuf,
}

impl SafeReader {
    /// Create a reader for an extracted product folder
    pub fn new<P: AsRef<Path>>(safe_dir: P) -> Self {
        Self {
            safe_dir: safe_dir.as_ref().to_path_buf(),
        }
    }

    pub fn safe_dir(&self) -> &Path {
        &self.safe_dir
    }

    pub fn overlay_path(&self) -> PathBuf {
        self.safe_dir.join(OVERLAY_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.safe_dir.join(MANIFEST_FILE)
    }

    /// Raw footprint string from the first `<coordinates>` of the overlay
    pub fn read_coordinates(&self) -> ViewResult<String> {
        let path = self.overlay_path();
        Self::read_element(&path, COORDINATES_ELEMENT)
    }

    /// Acquisition start from the first `<safe:startTime>` of the manifest
    pub fn read_start_time(&self) -> ViewResult<NaiveDateTime> {
        let path = self.manifest_path();
        let value = Self::read_element(&path, START_TIME_ELEMENT)?;
        parse_start_time(&value)
    }

    fn read_element(path: &Path, element: &str) -> ViewResult<String> {
        log::debug!("Reading <{}> from {}", element, path.display());

        let xml_content = fs::read_to_string(path).map_err(|e| ViewError::io(path, e))?;

        extract_first_text(&xml_content, element)
            .map_err(|e| match e {
                ViewError::XmlParsing(msg) => {
                    ViewError::XmlParsing(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })?
            .ok_or_else(|| ViewError::MissingElement {
                element: element.to_string(),
                path: path.to_path_buf(),
            })
    }
}

/// Text of the first element named `element` (qualified name, prefix
/// included) anywhere in the document.
///
/// Returns `Ok(None)` when the element is absent or holds no text.
pub fn extract_first_text(xml: &str, element: &str) -> ViewResult<Option<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let tag = element.as_bytes();
    let mut inside = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if !inside && e.name().as_ref() == tag => {
                inside = true;
            }
            Ok(Event::Empty(e)) if !inside && e.name().as_ref() == tag => {
                return Ok(None);
            }
            Ok(Event::Text(t)) if inside => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| ViewError::XmlParsing(format!("bad text in <{}>: {}", element, e)))?;
                text.push_str(&unescaped);
            }
            Ok(Event::CData(c)) if inside => {
                text.push_str(&String::from_utf8_lossy(&c));
            }
            Ok(Event::End(e)) if inside && e.name().as_ref() == tag => {
                let text = text.trim();
                return Ok(if text.is_empty() { None } else { Some(text.to_string()) });
            }
            Ok(Event::Eof) => {
                if inside {
                    return Err(ViewError::XmlParsing(format!(
                        "document ended inside <{}>",
                        element
                    )));
                }
                return Ok(None);
            }
            Err(e) => {
                return Err(ViewError::XmlParsing(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }
}

/// Parse a manifest timestamp such as `2017-07-17T02:47:12.123456`
pub fn parse_start_time(value: &str) -> ViewResult<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, MANIFEST_TIME_FORMAT).map_err(|source| {
        ViewError::TimeFormat {
            value: value.to_string(),
            source,
        }
    })
}

/// Format a start time for display, dropping the fractional seconds
pub fn format_start_time(time: &NaiveDateTime) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}
