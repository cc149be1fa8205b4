//! Board data model: shapes, objects, layers and spatial indices
//!
//! # Submodules
//! - `shapes` - Drawing primitives (line, arc, polygon, text, padstack)
//! - `object` - Object arena entries and per-object flag words
//! - `layers` - Layers and layer groups
//! - `index` - R-tree entries for spatial indices
//! - `container` - The board container and insert operations
//! - `search` - Point-to-object lookup

mod container;
mod index;
mod layers;
mod object;
mod search;
mod shapes;

pub use container::Board;
pub use index::{envelope_of, IndexedBox};
pub use layers::{GroupId, Layer, LayerGroup, LayerId, LayerKind};
pub use object::{ObjFlags, ObjId, Object, Parent};
pub use shapes::{Arc, Line, Padstack, PadstackSpan, Point, Polygon, Shape, Text};
