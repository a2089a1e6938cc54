//! Slippy map picker
//!
//! - projection.rs: Web-Mercator math and the visible tile grid (pure, tested natively)
//! - tiles.rs: tile URL sources
//! - widget.rs: `MapPicker` Leptos component

pub mod projection;
pub mod tiles;
mod widget;

pub use projection::{PixelPoint, TileCoord, Viewport, VisibleTile};
pub use tiles::TileSource;
pub use widget::MapPicker;
