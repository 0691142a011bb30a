//! Fixture builders shared by the integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Extracted product folder name for an absolute orbit and datatake id
pub fn product_name(orbit: &str, datatake: &str) -> String {
    format!(
        "S1A_IW_GRDH_1SDV_20170717T024712_20170717T024736_{}_{}_2D47.SAFE",
        orbit,
        datatake.to_uppercase()
    )
}

/// Quicklook name that belongs to `product_name(orbit, datatake)`
pub fn image_name(orbit: &str, datatake: &str) -> String {
    format!(
        "s1a-iw-grd-vv-20170717t024712-20170717t024736-{}-{}-001.jpg",
        orbit,
        datatake.to_lowercase()
    )
}

pub fn overlay_xml(coordinates: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Document>
    <Folder>
      <GroundOverlay>
        <Icon><href>quick-look.png</href></Icon>
        <gx:LatLonQuad>
          <coordinates>{}</coordinates>
        </gx:LatLonQuad>
      </GroundOverlay>
    </Folder>
  </Document>
</kml>"#,
        coordinates
    )
}

pub fn manifest_xml(start_time: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xfdu:XFDU xmlns:xfdu="urn:ccsds:schema:xfdu:1" xmlns:safe="http://www.esa.int/safe/sentinel-1.0">
  <metadataSection>
    <metadataObject ID="acquisitionPeriod">
      <metadataWrap>
        <xmlData>
          <safe:acquisitionPeriod>
            <safe:startTime>{}</safe:startTime>
          </safe:acquisitionPeriod>
        </xmlData>
      </metadataWrap>
    </metadataObject>
  </metadataSection>
</xfdu:XFDU>"#,
        start_time
    )
}

/// Write an extracted product folder with raw overlay and manifest
/// documents, next to its downloaded `.zip`.
pub fn write_product_files(unzip_dir: &Path, name: &str, overlay: &str, manifest: &str) -> PathBuf {
    let safe_dir = unzip_dir.join(name);
    fs::create_dir_all(safe_dir.join("preview")).expect("Failed to create product folder");
    fs::write(safe_dir.join("preview").join("map-overlay.kml"), overlay)
        .expect("Failed to write overlay");
    fs::write(safe_dir.join("manifest.safe"), manifest).expect("Failed to write manifest");

    let request = unzip_dir.join(name.replace(".SAFE", ".zip"));
    fs::write(request, b"PK").expect("Failed to write request file");

    safe_dir
}

pub fn write_product(unzip_dir: &Path, name: &str, coordinates: &str, start_time: &str) -> PathBuf {
    write_product_files(
        unzip_dir,
        name,
        &overlay_xml(coordinates),
        &manifest_xml(start_time),
    )
}

/// `.SAFE` entry names in the order the directory yields them
pub fn product_order(unzip_dir: &Path) -> Vec<String> {
    fs::read_dir(unzip_dir)
        .expect("Failed to read unzip dir")
        .map(|entry| entry.expect("Bad entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".SAFE"))
        .collect()
}
