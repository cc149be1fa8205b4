//! Board objects and their flag words
//!
//! Every drawing primitive lives in the board's object arena. Each object
//! carries two flag words: a persistent one (`ObjFlags`) shared with the
//! rest of the application, and a dynamic one whose bits are leased from
//! the flag pool for the lifetime of one traversal.

use bitflags::bitflags;
use serde::Serialize;

use super::layers::LayerId;
use super::shapes::Shape;
use crate::find::geo::Outline;

/// Index into the board's object arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjId(pub u32);

bitflags! {
    /// Persistent per-object flags, mutated by many subsystems
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ObjFlags: u32 {
        const FOUND    = 0x0001;
        const SELECTED = 0x0002;
        const WARN     = 0x0004;
        const DRC      = 0x0008;
    }
}

/// Who owns an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Per-layer objects: lines, arcs, polygons, text
    Layer(LayerId),
    /// Padstacks live at container level and span layers
    Board,
}

/// One drawing primitive in the arena
#[derive(Debug)]
pub struct Object {
    pub id: ObjId,
    pub shape: Shape,
    pub parent: Parent,
    pub flags: ObjFlags,
    pub(crate) dynflags: u64,
    pub bounds: [f64; 4],
    pub(crate) outline: Outline,
}

impl Object {
    /// Owning layer, `None` for container-level objects
    pub fn layer(&self) -> Option<LayerId> {
        match self.parent {
            Parent::Layer(l) => Some(l),
            Parent::Board => None,
        }
    }

    pub fn is_padstack(&self) -> bool {
        matches!(self.shape, Shape::Padstack(_))
    }
}
