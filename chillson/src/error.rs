/// Everything that can go wrong while resolving a path or narrowing the resolved value.
///
/// This is intentionally a closed set: callers are expected to `match` on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A non-empty path contained no `[label]` group at all.
    #[error("cannot parse nonempty value path, did you forget about square brackets?")]
    InvalidPath,
    /// An index segment was applied to an array that is too short for it.
    #[error("value's parent seems to be a JSON array, but the index is out of range")]
    OutOfRange,
    /// A key segment was applied to something that is not a JSON object.
    #[error("value's parent is neither JSON object nor array")]
    ParentNotObject,
    /// A key segment was applied to an object which does not have that key.
    #[error("value's parent seems to be a JSON object, but the field cannot be found")]
    FieldNotFound,
    /// The path resolved, but not to the shape the accessor asked for.
    #[error("retrieved value cannot be converted to the requested type")]
    BadValueType,
    /// A `null` was found where the walk still had segments left to apply.
    #[error("null leaf encountered in the structure")]
    NullLeaf,
}

pub type Result<T> = std::result::Result<T, ErrorKind>;
