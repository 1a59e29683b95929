#[derive(Clone, Copy, Debug)]
pub struct PuzzleCatalogEntry {
    pub label: &'static str,
    pub slug: &'static str,
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
}

// DEFAULT_PUZZLE_SLUG, DEFAULT_PUZZLE_SRC and PUZZLE_CATALOG are generated
// by build.rs from puzzles/catalog.toml.
include!(concat!(env!("OUT_DIR"), "/puzzle_catalog.rs"));

pub fn puzzle_by_slug(slug: &str) -> Option<&'static PuzzleCatalogEntry> {
    let trimmed = slug.trim();
    PUZZLE_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}
