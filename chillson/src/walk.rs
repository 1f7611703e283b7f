//! Resolution of a [`Path`] against a decoded JSON tree.

use serde_json::Value;
use tracing::*;

use crate::error::{ErrorKind, Result};
use crate::path::{Index, Path};
use crate::spanned::Spanned;

/// A failed walk, together with the segment that could not be applied. Unlike [`Spanned`],
/// two errors are only equal if their segments also sit at the same position in the path.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind} (at segment `[{}]`)", .segment.val)]
pub struct WalkError {
    pub kind: ErrorKind,
    pub segment: Spanned<String>,
}

impl PartialEq for WalkError {
    fn eq(&self, other: &WalkError) -> bool {
        self.kind == other.kind
            && self.segment.val == other.segment.val
            && self.segment.span == other.segment.span
    }
}

impl Eq for WalkError {}

impl From<WalkError> for ErrorKind {
    fn from(err: WalkError) -> Self {
        err.kind
    }
}

/// Apply a single segment label to `node`.
///
/// Index-versus-key is decided by the node: a label that looks like an index is only used as
/// one when `node` really is an array, otherwise it is looked up as an object key like any
/// other label.
fn step<'a>(node: &'a Value, label: &str) -> Result<&'a Value> {
    if let Value::Array(elems) = node {
        if let Some(index) = Index::classify(label) {
            return match index {
                Index::At(i) => elems.get(i).ok_or(ErrorKind::OutOfRange),
                Index::Beyond => Err(ErrorKind::OutOfRange),
            };
        }
    }

    match node {
        Value::Null => Err(ErrorKind::NullLeaf),
        Value::Object(members) => members.get(label).ok_or(ErrorKind::FieldNotFound),
        Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            Err(ErrorKind::ParentNotObject)
        }
    }
}

impl Path {
    /// Walk this path from `root`. Never modifies `root`; the same path against the same tree
    /// always gives the same answer.
    pub fn walk<'a>(&self, root: &'a Value) -> std::result::Result<&'a Value, WalkError> {
        let mut current = root;
        for segment in self.segments() {
            trace!(label = %segment.val, "walking segment");
            current = step(current, &segment.val).map_err(|kind| {
                debug!(
                    path = %self,
                    label = %segment.val,
                    ?kind,
                    "failed to resolve path"
                );
                WalkError {
                    kind,
                    segment: segment.clone(),
                }
            })?;
        }
        Ok(current)
    }
}

/// Find the value at `path` inside `root`.
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({ "arr": ["joe", "mary"] });
/// assert_eq!(chillson::resolve(&doc, "[arr][1]"), Ok(&json!("mary")));
/// assert_eq!(chillson::resolve(&doc, ""), Ok(&doc));
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    Ok(Path::parse(path)?.walk(root)?)
}
