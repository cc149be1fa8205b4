//! Galvanic connectivity search
//!
//! Starting from one seed object, walk every object reachable through
//! geometric overlap, hopping layers through padstacks.
//!
//! # Submodules
//! - `flags` - Dynamic flag pool leasing visited-mark bits
//! - `geo` - Exact shape-to-shape overlap predicate
//! - `context` - Traversal configuration and lifecycle
//! - `engine` - The flood-fill driver and layer-hop policy
//! - `report` - JSON-exportable traversal summary

mod context;
mod engine;
mod report;

pub mod flags;
pub mod geo;

pub use context::FindContext;
pub use engine::LOOKUP_SLOP;
pub use flags::{DynFlagPool, Mark, DYNFLAG_BITS};
pub use report::{FindReport, FoundObject};
