//! Point lookup: resolve the object under a board coordinate
//!
//! Connectors are probed first (they sit on top visually and span
//! layers), then each layer's trees in stack order. A box query collects
//! candidates, the exact outline test decides.

use crate::find::geo;

use super::container::Board;
use super::index::envelope_of;
use super::object::ObjId;

impl Board {
    /// Topmost object within `slop` of `(x, y)`, if any
    pub fn object_at(&self, x: f64, y: f64, slop: f64) -> Option<ObjId> {
        let probe = envelope_of([x - slop, y - slop, x + slop, y + slop]);

        for entry in self.padstack_tree.locate_in_envelope_intersecting(&probe) {
            if geo::hits_point(&self.object(entry.id).outline, x, y, slop) {
                return Some(entry.id);
            }
        }

        for layer in &self.layers {
            for tree in [
                &layer.line_tree,
                &layer.arc_tree,
                &layer.polygon_tree,
                &layer.text_tree,
            ] {
                for entry in tree.locate_in_envelope_intersecting(&probe) {
                    if geo::hits_point(&self.object(entry.id).outline, x, y, slop) {
                        return Some(entry.id);
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LayerKind, PadstackSpan, Point};

    #[test]
    fn test_object_at_prefers_padstack() {
        let mut board = Board::new();
        let g = board.add_group("outer");
        let top = board.add_layer("top", LayerKind::Copper, g);
        let trace = board.add_line(top, Point::new(-5.0, 0.0), Point::new(5.0, 0.0), 1.0);
        let via = board.add_padstack(Point::new(0.0, 0.0), 2.0, 0.8, PadstackSpan::All);

        assert_eq!(board.object_at(0.0, 0.0, 0.05), Some(via));
        assert_eq!(board.object_at(4.0, 0.0, 0.05), Some(trace));
        assert_eq!(board.object_at(20.0, 20.0, 0.05), None);
    }
}
