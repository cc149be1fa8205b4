//! The board container: object arena, layer stack and spatial indices
//!
//! Layers and groups are created first, then geometry is inserted. Every
//! insert computes the bounding box and the intersection outline once and
//! registers the object with the right per-layer tree (padstacks go into
//! the board-wide connector tree instead).

use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use rstar::RTree;

use super::index::IndexedBox;
use super::layers::{GroupId, Layer, LayerGroup, LayerId, LayerKind};
use super::object::{ObjFlags, ObjId, Object, Parent};
use super::shapes::{Arc as ArcShape, Line, Padstack, PadstackSpan, Point, Polygon, Shape, Text};
use crate::find::flags::{DynFlagPool, Mark};
use crate::find::geo::Outline;
use crate::undo::UndoLog;

/// A board: layers, groups, and every drawing object on them
pub struct Board {
    pub(crate) objects: Vec<Object>,
    pub(crate) layers: Vec<Layer>,
    pub(crate) groups: Vec<LayerGroup>,
    layer_ids: IndexMap<String, LayerId>,
    group_ids: IndexMap<String, GroupId>,
    pub(crate) padstack_tree: RTree<IndexedBox>,
    dynflags: Arc<Mutex<DynFlagPool>>,
    pub undo: UndoLog,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            layers: Vec::new(),
            groups: Vec::new(),
            layer_ids: IndexMap::new(),
            group_ids: IndexMap::new(),
            padstack_tree: RTree::new(),
            dynflags: DynFlagPool::new_shared(),
            undo: UndoLog::default(),
        }
    }

    // --- layer stack -------------------------------------------------

    pub fn add_group(&mut self, name: &str) -> GroupId {
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(LayerGroup {
            name: name.to_string(),
            layers: Vec::new(),
        });
        self.group_ids.insert(name.to_string(), id);
        id
    }

    pub fn add_layer(&mut self, name: &str, kind: LayerKind, group: GroupId) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(Layer::new(name.to_string(), kind, group));
        self.groups[group.0 as usize].layers.push(id);
        self.layer_ids.insert(name.to_string(), id);
        id
    }

    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.0 as usize]
    }

    pub fn group(&self, id: GroupId) -> &LayerGroup {
        &self.groups[id.0 as usize]
    }

    pub fn layer_id(&self, name: &str) -> Option<LayerId> {
        self.layer_ids.get(name).copied()
    }

    pub fn group_id(&self, name: &str) -> Option<GroupId> {
        self.group_ids.get(name).copied()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    // --- objects -----------------------------------------------------

    pub fn object(&self, id: ObjId) -> &Object {
        &self.objects[id.0 as usize]
    }

    pub(crate) fn object_mut(&mut self, id: ObjId) -> &mut Object {
        &mut self.objects[id.0 as usize]
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn add_line(&mut self, layer: LayerId, p1: Point, p2: Point, width: f64) -> ObjId {
        self.insert(Shape::Line(Line { p1, p2, width }), Parent::Layer(layer))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_arc(
        &mut self,
        layer: LayerId,
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        width: f64,
    ) -> ObjId {
        self.insert(
            Shape::Arc(ArcShape {
                center,
                radius,
                start_deg,
                sweep_deg,
                width,
            }),
            Parent::Layer(layer),
        )
    }

    pub fn add_polygon(&mut self, layer: LayerId, outer: Vec<Point>, holes: Vec<Vec<Point>>) -> ObjId {
        self.insert(Shape::Polygon(Polygon { outer, holes }), Parent::Layer(layer))
    }

    pub fn add_text(&mut self, layer: LayerId, at: Point, width: f64, height: f64, value: &str) -> ObjId {
        self.insert(
            Shape::Text(Text {
                at,
                width,
                height,
                value: value.to_string(),
            }),
            Parent::Layer(layer),
        )
    }

    pub fn add_padstack(&mut self, at: Point, diameter: f64, hole: f64, span: PadstackSpan) -> ObjId {
        self.insert(
            Shape::Padstack(Padstack {
                at,
                diameter,
                hole,
                span,
            }),
            Parent::Board,
        )
    }

    fn insert(&mut self, shape: Shape, parent: Parent) -> ObjId {
        let id = ObjId(self.objects.len() as u32);
        let bounds = shape.bounds();
        let outline = Outline::of(&shape);
        let entry = IndexedBox::new(id, bounds);

        match (&shape, parent) {
            (Shape::Padstack(_), _) => self.padstack_tree.insert(entry),
            (_, Parent::Layer(lid)) => {
                let layer = &mut self.layers[lid.0 as usize];
                match &shape {
                    Shape::Line(_) => layer.line_tree.insert(entry),
                    Shape::Arc(_) => layer.arc_tree.insert(entry),
                    Shape::Polygon(_) => layer.polygon_tree.insert(entry),
                    Shape::Text(_) => layer.text_tree.insert(entry),
                    Shape::Padstack(_) => unreachable!("padstacks are board-level"),
                }
            }
            (_, Parent::Board) => {
                unreachable!("per-layer shapes need an owning layer")
            }
        }

        self.objects.push(Object {
            id,
            shape,
            parent,
            flags: ObjFlags::empty(),
            dynflags: 0,
            bounds,
            outline,
        });
        id
    }

    /// Whether the given padstack carries copper on the given layer
    pub fn padstack_on_layer(&self, id: ObjId, layer: LayerId) -> bool {
        match &self.object(id).shape {
            Shape::Padstack(p) => p.span.on_layer(layer),
            _ => false,
        }
    }

    // --- dynamic flags -----------------------------------------------

    pub(crate) fn alloc_dynflag(&self, name: &str) -> Mark {
        DynFlagPool::allocate(&self.dynflags, name)
    }

    /// Clear one mark bit on every object before a traversal reuses it
    pub(crate) fn clear_dynflag(&mut self, mark: &Mark) {
        for obj in &mut self.objects {
            mark.clear(obj);
        }
    }

    /// Roll back the flag changes of the most recent undoable traversal
    pub fn undo_last(&mut self) -> usize {
        self.undo.undo_last(&mut self.objects)
    }
}
