//! Build script for basin-dashboard.
//!
//! Copies the basin boundary GeoJSON to OUT_DIR so it can be embedded via
//! `include_str!`. A missing file becomes an empty placeholder, which the
//! app reports as an unavailable boundary overlay.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let src_path = "../Godavari_Geojon.geojson";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("boundary.geojson");
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").unwrap();
        println!(
            "cargo:warning=Boundary file {} not found, using empty placeholder",
            src_path
        );
    }
    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
