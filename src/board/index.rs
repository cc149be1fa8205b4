//! R-tree entries for the per-layer and board-wide spatial indices
//!
//! The trees store object ids with their bounding boxes; exact geometry
//! stays in the object arena. A box hit is only a candidate, the precise
//! overlap predicate decides.

use rstar::{RTreeObject, AABB};

use super::object::ObjId;

/// Entry in a spatial index: an object id plus its envelope
#[derive(Clone, Debug)]
pub struct IndexedBox {
    pub id: ObjId,
    env: AABB<[f64; 2]>,
}

impl IndexedBox {
    pub fn new(id: ObjId, bounds: [f64; 4]) -> Self {
        Self {
            id,
            env: envelope_of(bounds),
        }
    }
}

impl RTreeObject for IndexedBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.env
    }
}

/// Convert a `[min_x, min_y, max_x, max_y]` box into an rstar envelope
pub fn envelope_of(bounds: [f64; 4]) -> AABB<[f64; 2]> {
    AABB::from_corners([bounds[0], bounds[1]], [bounds[2], bounds[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstar::RTree;

    #[test]
    fn test_intersecting_query_returns_candidates() {
        let mut tree = RTree::new();
        tree.insert(IndexedBox::new(ObjId(0), [0.0, 0.0, 1.0, 1.0]));
        tree.insert(IndexedBox::new(ObjId(1), [5.0, 5.0, 6.0, 6.0]));

        let hits: Vec<_> = tree
            .locate_in_envelope_intersecting(&envelope_of([0.5, 0.5, 2.0, 2.0]))
            .map(|e| e.id)
            .collect();
        assert_eq!(hits, vec![ObjId(0)]);
    }
}
