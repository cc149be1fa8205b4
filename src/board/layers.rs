//! Layers and layer groups
//!
//! A layer belongs to exactly one group (a physical stacking unit). Each
//! layer owns one R-tree per object type so candidate lookups never scan
//! unrelated geometry.

use rstar::RTree;
use serde::Serialize;

use super::index::IndexedBox;

/// Index of a layer on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayerId(pub u32);

/// Index of a layer group on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GroupId(pub u32);

/// What a layer is made of; only copper conducts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Copper,
    Silk,
    Mask,
    Doc,
}

impl LayerKind {
    pub fn is_copper(&self) -> bool {
        matches!(self, LayerKind::Copper)
    }
}

/// One board layer with its per-type spatial indices
#[derive(Debug)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    pub group: GroupId,
    pub(crate) line_tree: RTree<IndexedBox>,
    pub(crate) arc_tree: RTree<IndexedBox>,
    pub(crate) polygon_tree: RTree<IndexedBox>,
    pub(crate) text_tree: RTree<IndexedBox>,
}

impl Layer {
    pub(crate) fn new(name: String, kind: LayerKind, group: GroupId) -> Self {
        Self {
            name,
            kind,
            group,
            line_tree: RTree::new(),
            arc_tree: RTree::new(),
            polygon_tree: RTree::new(),
            text_tree: RTree::new(),
        }
    }
}

/// A stacking unit of one or more layers
#[derive(Debug)]
pub struct LayerGroup {
    pub name: String,
    pub layers: Vec<LayerId>,
}
