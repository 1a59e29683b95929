use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    default_slug: Option<String>,
    puzzles: Vec<PuzzleEntry>,
}

#[derive(Deserialize)]
struct PuzzleEntry {
    label: String,
    slug: String,
    src: String,
    width: Option<u32>,
    height: Option<u32>,
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf();

    let _ = dotenvy::from_filename(workspace_root.join(".env.local"));
    let _ = dotenvy::from_filename(workspace_root.join(".env"));

    println!("cargo:rerun-if-env-changed=PUZZLE_CATALOG_PATH");

    let catalog_path = catalog_path(&workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read puzzle catalog at {}: {err}",
            catalog_path.display()
        )
    });
    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse puzzle catalog at {}: {err}",
            catalog_path.display()
        )
    });
    if catalog.puzzles.is_empty() {
        panic!("puzzle catalog {} has no entries", catalog_path.display());
    }

    let default_slug = catalog
        .default_slug
        .as_deref()
        .unwrap_or(catalog.puzzles[0].slug.as_str());
    let default_entry = catalog
        .puzzles
        .iter()
        .find(|entry| entry.slug == default_slug)
        .unwrap_or_else(|| {
            panic!(
                "default_slug '{default_slug}' not found in {}",
                catalog_path.display()
            )
        });

    let mut seen_slugs = HashSet::new();
    let mut seen_srcs = HashSet::new();
    let mut body = String::new();
    writeln!(
        &mut body,
        "pub const DEFAULT_PUZZLE_SLUG: &str = {default_slug:?};"
    )
    .unwrap();
    writeln!(
        &mut body,
        "pub const DEFAULT_PUZZLE_SRC: &str = {:?};",
        default_entry.src
    )
    .unwrap();
    writeln!(&mut body).unwrap();
    writeln!(&mut body, "pub const PUZZLE_CATALOG: &[PuzzleCatalogEntry] = &[").unwrap();
    for entry in &catalog.puzzles {
        check_entry(entry, &catalog_path);
        if !seen_slugs.insert(entry.slug.as_str()) {
            panic!(
                "duplicate puzzle slug '{}' in {}",
                entry.slug,
                catalog_path.display()
            );
        }
        if !seen_srcs.insert(entry.src.as_str()) {
            panic!(
                "duplicate puzzle src '{}' in {}",
                entry.src,
                catalog_path.display()
            );
        }
        let (width, height) = probe_dimensions(entry, &workspace_root);
        writeln!(&mut body, "    PuzzleCatalogEntry {{").unwrap();
        writeln!(&mut body, "        label: {:?},", entry.label).unwrap();
        writeln!(&mut body, "        slug: {:?},", entry.slug).unwrap();
        writeln!(&mut body, "        src: {:?},", entry.src).unwrap();
        writeln!(&mut body, "        width: {width},").unwrap();
        writeln!(&mut body, "        height: {height},").unwrap();
        writeln!(&mut body, "    }},").unwrap();
    }
    writeln!(&mut body, "];").unwrap();

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"))
        .join("puzzle_catalog.rs");
    fs::write(&out_path, body)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_path.display()));
}

fn catalog_path(workspace_root: &Path) -> PathBuf {
    match env::var("PUZZLE_CATALOG_PATH") {
        Ok(value) if !value.trim().is_empty() => {
            let raw = PathBuf::from(value);
            if raw.is_relative() {
                workspace_root.join(raw)
            } else {
                raw
            }
        }
        _ => workspace_root.join("puzzles/catalog.toml"),
    }
}

fn check_entry(entry: &PuzzleEntry, catalog_path: &Path) {
    if entry.slug.trim().is_empty() {
        panic!("puzzle slug cannot be empty in {}", catalog_path.display());
    }
    if entry.src.trim().is_empty() {
        panic!(
            "puzzle '{}' src cannot be empty in {}",
            entry.slug,
            catalog_path.display()
        );
    }
    if entry.src.contains("://") || entry.src.starts_with("data:") {
        panic!(
            "puzzle '{}' src must be a bundle-relative path in {}",
            entry.slug,
            catalog_path.display()
        );
    }
    if entry.width.is_some() != entry.height.is_some() {
        panic!(
            "puzzle '{}' must declare both width and height or neither in {}",
            entry.slug,
            catalog_path.display()
        );
    }
    if entry.width == Some(0) || entry.height == Some(0) {
        panic!(
            "puzzle '{}' has zero dimensions in {}",
            entry.slug,
            catalog_path.display()
        );
    }
}

fn probe_dimensions(entry: &PuzzleEntry, workspace_root: &Path) -> (u32, u32) {
    let src_path = workspace_root.join(entry.src.trim_start_matches('/'));
    println!("cargo:rerun-if-changed={}", src_path.display());
    match imagesize::size(&src_path) {
        Ok(size) => {
            let width = u32::try_from(size.width)
                .unwrap_or_else(|_| panic!("puzzle '{}' width overflows u32", entry.slug));
            let height = u32::try_from(size.height)
                .unwrap_or_else(|_| panic!("puzzle '{}' height overflows u32", entry.slug));
            if let (Some(expected_w), Some(expected_h)) = (entry.width, entry.height) {
                if width != expected_w || height != expected_h {
                    panic!(
                        "puzzle '{}' is {width}x{height} on disk but {expected_w}x{expected_h} in the catalog",
                        entry.slug
                    );
                }
            }
            (width, height)
        }
        Err(err) => match (entry.width, entry.height) {
            (Some(width), Some(height)) => {
                println!(
                    "cargo:warning=using declared dimensions {width}x{height} for '{}': {err}",
                    entry.slug
                );
                (width, height)
            }
            _ => panic!(
                "failed to read image size for '{}' at {}: {err}",
                entry.slug,
                src_path.display()
            ),
        },
    }
}
