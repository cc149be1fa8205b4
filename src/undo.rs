//! Reversible flag changes
//!
//! Traversal runs that tag their result with a persistent flag can record
//! the previous flag words here. Entries are grouped by a serial number;
//! one undo step restores the whole group written by one traversal.

use crate::board::{ObjFlags, ObjId, Object};

#[derive(Debug, Clone)]
struct FlagUndo {
    serial: u64,
    obj: ObjId,
    old: ObjFlags,
}

/// Per-board log of undoable flag changes
#[derive(Debug, Default)]
pub struct UndoLog {
    serial: u64,
    entries: Vec<FlagUndo>,
}

impl UndoLog {
    /// Record the pre-change flag word of an object under the current serial
    pub(crate) fn record(&mut self, obj: ObjId, old: ObjFlags) {
        self.entries.push(FlagUndo {
            serial: self.serial,
            obj,
            old,
        });
    }

    /// Close the current serial group; the next recordings start a new one
    pub(crate) fn inc_serial(&mut self) {
        self.serial += 1;
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restore the most recent serial group; returns how many objects were
    /// rolled back
    pub(crate) fn undo_last(&mut self, objects: &mut [Object]) -> usize {
        let last = match self.entries.last() {
            Some(e) => e.serial,
            None => return 0,
        };
        let mut n = 0;
        while self.entries.last().is_some_and(|e| e.serial == last) {
            if let Some(e) = self.entries.pop() {
                objects[e.obj.0 as usize].flags = e.old;
                n += 1;
            }
        }
        n
    }
}
