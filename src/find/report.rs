//! Serializable summary of a traversal result

use serde::Serialize;

use crate::board::Board;

use super::context::FindContext;

/// One found object in a report
#[derive(Debug, Serialize)]
pub struct FoundObject {
    pub id: u32,
    pub kind: &'static str,
    /// Owning layer name; `None` for padstacks
    pub layer: Option<String>,
}

/// JSON-exportable result of one connectivity traversal
#[derive(Debug, Serialize)]
pub struct FindReport {
    pub total: u64,
    pub aborted: bool,
    pub objects: Vec<FoundObject>,
}

impl FindReport {
    /// Build a report from a finished traversal. The object list is only
    /// populated when the context materialized its found list.
    pub fn from_context(ctx: &FindContext, board: &Board) -> Self {
        let objects = ctx
            .found()
            .iter()
            .map(|&id| {
                let obj = board.object(id);
                FoundObject {
                    id: id.0,
                    kind: obj.shape.kind_name(),
                    layer: obj.layer().map(|l| board.layer(l).name.clone()),
                }
            })
            .collect();
        Self {
            total: ctx.total(),
            aborted: ctx.aborted(),
            objects,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
