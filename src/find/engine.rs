//! Flood-fill driver: follow galvanic connections through overlapping
//! objects
//!
//! The worklist is a stack; candidates come from per-layer R-trees (and
//! the board-wide connector tree), the exact outline predicate decides,
//! and the leased mark bit guarantees every object is enqueued at most
//! once. Layer objects only connect within their own layer; padstacks
//! fan out across layers, optionally confined to the starting group.

use anyhow::Result;
use rstar::AABB;

use crate::board::{envelope_of, Board, LayerId, ObjId, Parent, Shape};

use super::context::FindContext;
use super::flags::Mark;
use super::geo;

/// Lookup radius for point-seeded searches, in board units
pub const LOOKUP_SLOP: f64 = 0.05;

type FoundCb<'a> = Option<&'a mut dyn FnMut(&Board, ObjId) -> bool>;

impl FindContext {
    /// Find every object galvanically connected to `from`. Returns the
    /// size of the connectivity component (including the seed).
    pub fn find_from_obj(&mut self, board: &mut Board, from: ObjId) -> Result<u64> {
        self.run(board, from, None)
    }

    /// Like [`find_from_obj`](Self::find_from_obj), invoking `on_found`
    /// for each object as it is reached. Returning `true` stops the
    /// traversal early; this is also the cancellation point for
    /// interactive use on large boards.
    pub fn find_from_obj_with<F>(&mut self, board: &mut Board, from: ObjId, mut on_found: F) -> Result<u64>
    where
        F: FnMut(&Board, ObjId) -> bool,
    {
        self.run(board, from, Some(&mut on_found))
    }

    /// Resolve the object under `(x, y)` and search from it. Nothing (or
    /// a non-conductive object) under the point is not an error: the
    /// traversal degenerates to zero found objects.
    pub fn find_from_point(&mut self, board: &mut Board, x: f64, y: f64) -> Result<u64> {
        self.ensure_free()?;
        let seed = match board.object_at(x, y, LOOKUP_SLOP) {
            Some(id) => id,
            None => return Ok(0),
        };
        if !self.allow_noncopper {
            if let Some(lid) = board.object(seed).layer() {
                if !board.layer(lid).kind.is_copper() {
                    return Ok(0);
                }
            }
        }
        self.find_from_obj(board, seed)
    }

    fn run(&mut self, board: &mut Board, from: ObjId, mut cb: FoundCb<'_>) -> Result<u64> {
        let start = std::time::Instant::now();
        let mark = self.init(board)?;
        board.clear_dynflag(&mark);

        self.add_obj(board, &mark, from);
        // a per-layer seed anchors the starting group up front
        if let Some(lid) = board.object(from).layer() {
            self.start_group = Some(board.layer(lid).group);
        }

        let total = self.exec(board, &mark, &mut cb);

        if self.flag_set_undoable && !self.flag_set.is_empty() {
            board.undo.inc_serial();
        }
        self.mark = Some(mark);

        eprintln!(
            "[find] traversal from {:?}: {} objects in {:?}",
            from,
            total,
            start.elapsed()
        );
        Ok(total)
    }

    fn exec(&mut self, board: &mut Board, mark: &Mark, cb: &mut FoundCb<'_>) -> u64 {
        while let Some(curr) = self.open.pop() {
            if self.visit(board, curr, cb) {
                break;
            }

            let sb = envelope_of(board.object(curr).bounds);

            // connectors can touch anything, so every object checks the
            // board-wide padstack tree
            let mut cand = std::mem::take(&mut self.scratch);
            cand.clear();
            cand.extend(
                board
                    .padstack_tree
                    .locate_in_envelope_intersecting(&sb)
                    .map(|e| e.id),
            );
            for id in cand.drain(..) {
                self.check(board, mark, curr, id);
            }
            self.scratch = cand;

            match board.object(curr).parent {
                // layer objects connect within their own layer only
                Parent::Layer(lid) => {
                    self.find_on_layer(board, mark, lid, curr, &sb);
                }
                Parent::Board => self.padstack_fanout(board, mark, curr, &sb),
            }
        }
        self.nfound
    }

    /// Everything that needs to happen for one found object
    fn visit(&mut self, board: &mut Board, curr: ObjId, cb: &mut FoundCb<'_>) -> bool {
        if self.list_found {
            self.found.push(curr);
        }
        if !self.flag_set.is_empty() {
            if self.flag_set_undoable {
                let old = board.object(curr).flags;
                board.undo.record(curr, old);
            }
            board.object_mut(curr).flags |= self.flag_set;
        }
        self.nfound += 1;

        if let Some(f) = cb {
            if f(board, curr) {
                self.aborted = true;
                return true;
            }
        }
        false
    }

    /// Fan a connector out over the layers it carries copper on,
    /// honoring the confinement policy
    fn padstack_fanout(&mut self, board: &mut Board, mark: &Mark, curr: ObjId, sb: &AABB<[f64; 2]>) {
        for li in 0..board.layer_count() as u32 {
            let lid = LayerId(li);
            let (copper, grp) = {
                let l = board.layer(lid);
                (l.kind.is_copper(), l.group)
            };
            if !copper && !self.allow_noncopper {
                continue;
            }
            if self.stay_layergroup {
                if let Some(g) = self.start_group {
                    if grp != g {
                        continue;
                    }
                }
            }
            if !board.padstack_on_layer(curr, lid) {
                continue;
            }
            let added = self.find_on_layer(board, mark, lid, curr, sb);
            // a connector seed fixes the group on the first layer it
            // actually reaches
            if added > 0 && self.stay_layergroup && self.start_group.is_none() {
                self.start_group = Some(grp);
            }
        }
    }

    /// Check `curr` against one layer's four per-type trees; returns how
    /// many new objects were enqueued
    fn find_on_layer(
        &mut self,
        board: &mut Board,
        mark: &Mark,
        lid: LayerId,
        curr: ObjId,
        sb: &AABB<[f64; 2]>,
    ) -> u32 {
        let mut cand = std::mem::take(&mut self.scratch);
        cand.clear();
        {
            let layer = board.layer(lid);
            for tree in [
                &layer.line_tree,
                &layer.arc_tree,
                &layer.polygon_tree,
                &layer.text_tree,
            ] {
                cand.extend(tree.locate_in_envelope_intersecting(sb).map(|e| e.id));
            }
        }
        let mut added = 0;
        for id in cand.drain(..) {
            if self.check(board, mark, curr, id) {
                added += 1;
            }
        }
        self.scratch = cand;
        added
    }

    /// Unmarked candidate + compatible layers + exact overlap -> enqueue
    fn check(&mut self, board: &mut Board, mark: &Mark, curr: ObjId, cand: ObjId) -> bool {
        if mark.test(board.object(cand)) {
            return false;
        }
        if !layers_compatible(board, curr, cand) {
            return false;
        }
        if !geo::intersects(&board.object(curr).outline, &board.object(cand).outline) {
            return false;
        }
        self.add_obj(board, mark, cand);
        true
    }

    fn add_obj(&mut self, board: &mut Board, mark: &Mark, id: ObjId) {
        mark.set(board.object_mut(id));
        self.open.push(id);
    }
}

/// Two objects can only conduct when they share a layer: per-layer pairs
/// must be on the same layer, padstacks must carry copper where the other
/// object lives
fn layers_compatible(board: &Board, a: ObjId, b: ObjId) -> bool {
    match (board.object(a).parent, board.object(b).parent) {
        (Parent::Layer(la), Parent::Layer(lb)) => la == lb,
        (Parent::Layer(l), Parent::Board) => board.padstack_on_layer(b, l),
        (Parent::Board, Parent::Layer(l)) => board.padstack_on_layer(a, l),
        (Parent::Board, Parent::Board) => {
            match (&board.object(a).shape, &board.object(b).shape) {
                (Shape::Padstack(pa), Shape::Padstack(pb)) => pa.span.overlaps(&pb.span),
                _ => false,
            }
        }
    }
}
