//! Galvanic connectivity engine for multi-layer boards
//!
//! Given a seed drawing object (trace, arc, polygon, text or padstack),
//! [`FindContext`] determines the full set of objects electrically
//! connected to it purely through geometric overlap, crossing layers
//! through padstacks, optionally confined to the layer group the search
//! started in.
//!
//! Candidate pruning runs on per-layer R-tree indices, the exact overlap
//! predicate works on precomputed shape outlines, and visited state lives
//! in a per-object bit leased from a shared flag pool for the lifetime of
//! one traversal.
//!
//! ```
//! use copperfind::{Board, FindContext, LayerKind, Point};
//!
//! let mut board = Board::new();
//! let grp = board.add_group("outer");
//! let top = board.add_layer("top", LayerKind::Copper, grp);
//! let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
//! board.add_line(top, Point::new(10.0, 0.0), Point::new(10.0, 10.0), 1.0);
//!
//! let mut ctx = FindContext::new();
//! let total = ctx.find_from_obj(&mut board, a).unwrap();
//! assert_eq!(total, 2);
//! ctx.release();
//! ```

pub mod board;
pub mod find;
pub mod undo;

pub use board::{
    envelope_of, Arc, Board, GroupId, IndexedBox, Layer, LayerGroup, LayerId, LayerKind, Line,
    ObjFlags, ObjId, Object, Padstack, PadstackSpan, Parent, Point, Polygon, Shape, Text,
};
pub use find::{DynFlagPool, FindContext, FindReport, FoundObject, Mark, DYNFLAG_BITS, LOOKUP_SLOP};
pub use undo::UndoLog;
