//! Page store, raster surface and drawing settings for papirboard.
//!
//! Everything here is platform independent; the wasm client only forwards DOM
//! events into a [`Board`] and copies its bitmap onto a canvas.

pub mod bitmap;
pub mod board;
pub mod color;
pub mod config;
pub mod geometry;
pub mod page;
pub mod raster;
pub mod settings;
pub mod surface;

pub use bitmap::Bitmap;
pub use board::{Board, Swatch};
pub use color::{Color, ColorParseError, DEFAULT_PALETTE};
pub use config::{BoardConfig, ConfigError, ResolvedConfig};
pub use geometry::{Point, Rect};
pub use page::{Page, PageEntry, PageId, PageStore};
pub use raster::{Composite, StrokeStyle};
pub use settings::{DrawingSettings, Tool, ToolEvent};
pub use surface::Surface;
