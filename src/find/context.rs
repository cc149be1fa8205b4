//! Traversal context: configuration, scratch state and lifecycle
//!
//! A context is single-use: configure it, run one traversal, read the
//! results, then `release()` before reusing it. Starting a second
//! traversal on an unreleased context is a misuse error with no side
//! effects. The worklist and found list are kept as plain growable
//! vectors; popping from the tail never shrinks the backing storage.

use anyhow::{bail, Result};

use crate::board::{Board, GroupId, ObjFlags, ObjId};

use super::flags::Mark;

/// Mutable state of one connectivity traversal
#[derive(Default)]
pub struct FindContext {
    /// Restrict padstack fan-out to the layer group the search started in
    pub stay_layergroup: bool,
    /// Also fan out over non-copper layers
    pub allow_noncopper: bool,
    /// Materialize the list of found objects (`found()`)
    pub list_found: bool,
    /// Persistent flags to set on every found object (empty: none)
    pub flag_set: ObjFlags,
    /// Record flag changes on the board's undo log
    pub flag_set_undoable: bool,

    pub(crate) in_use: bool,
    pub(crate) aborted: bool,
    pub(crate) mark: Option<Mark>,
    pub(crate) open: Vec<ObjId>,
    pub(crate) found: Vec<ObjId>,
    pub(crate) scratch: Vec<ObjId>,
    pub(crate) nfound: u64,
    pub(crate) start_group: Option<GroupId>,
}

impl FindContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects in discovery order; empty unless `list_found` was set
    pub fn found(&self) -> &[ObjId] {
        &self.found
    }

    /// Number of objects reached by the last traversal
    pub fn total(&self) -> u64 {
        self.nfound
    }

    /// Whether the last traversal was stopped early by its callback
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    pub fn is_in_use(&self) -> bool {
        self.in_use
    }

    /// Layer group the last traversal was anchored to, if any
    pub fn start_group(&self) -> Option<GroupId> {
        self.start_group
    }

    pub(crate) fn ensure_free(&self) -> Result<()> {
        if self.in_use {
            bail!("find context already in use; release() it before starting another traversal");
        }
        Ok(())
    }

    /// Mark the context in use and lease a visited mark. Misuse is checked
    /// before any state is touched.
    pub(crate) fn init(&mut self, board: &Board) -> Result<Mark> {
        self.ensure_free()?;
        self.in_use = true;
        self.aborted = false;
        self.nfound = 0;
        self.found.clear();
        self.open.clear();
        self.start_group = None;
        Ok(board.alloc_dynflag("find_from_obj"))
    }

    /// Mandatory cleanup: returns the mark to the pool and frees the
    /// worklist storage. The mark also frees itself if the context is
    /// simply dropped.
    pub fn release(&mut self) {
        if !self.in_use {
            return;
        }
        self.mark = None;
        self.open = Vec::new();
        self.found = Vec::new();
        self.scratch = Vec::new();
        self.in_use = false;
    }
}
