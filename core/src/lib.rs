pub mod action;
pub mod catalog;
pub mod game;
pub mod layout;
pub mod model;
pub mod ring;
pub mod surface;

pub use action::CoreAction;
pub use catalog::{
    puzzle_by_slug, PuzzleCatalogEntry, DEFAULT_PUZZLE_SLUG, DEFAULT_PUZZLE_SRC, PUZZLE_CATALOG,
};
pub use layout::{LayoutError, RingLayout};
pub use model::{DragState, PuzzleModel, PuzzleRules};
pub use ring::Ring;
pub use surface::RenderSurface;
