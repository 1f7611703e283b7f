//! Resolving one command-line path against the input document.

use chillson::{kind_desc, ErrorKind, Path, Son, Value, WalkError};
use tracing::*;

use crate::config::OutputFormat;
use crate::edit_distance;

/// Which typed accessor the resolved value is passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shape {
    Any,
    Str,
    Int,
    Float,
    Bool,
    Obj,
    Arr,
}

impl Shape {
    pub fn desc(self) -> &'static str {
        match self {
            Shape::Any => "any value",
            Shape::Str => "string",
            Shape::Int => "integer",
            Shape::Float => "number",
            Shape::Bool => "bool",
            Shape::Obj => "object",
            Shape::Arr => "array",
        }
    }

    fn narrow(self, son: Son<'_>) -> chillson::Result<Value> {
        match self {
            Shape::Any => son.get("").cloned(),
            Shape::Str => son.get_str("").map(Value::from),
            Shape::Int => son.get_int("").map(Value::from),
            Shape::Float => son.get_float("").map(Value::from),
            Shape::Bool => son.get_bool("").map(Value::from),
            Shape::Obj => son.get_obj("").map(|members| Value::Object(members.clone())),
            Shape::Arr => son.get_arr("").map(|elems| Value::Array(elems.clone())),
        }
    }
}

#[derive(Debug)]
pub enum Failure {
    InvalidPath,
    Walk {
        err: WalkError,
        hint: Option<String>,
    },
    Shape {
        expected: &'static str,
        found: &'static str,
    },
}

impl Failure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Failure::InvalidPath => ErrorKind::InvalidPath,
            Failure::Walk { err, .. } => err.kind,
            Failure::Shape { .. } => ErrorKind::BadValueType,
        }
    }
}

pub fn query(chill: Son<'_>, path: &str, shape: Shape) -> Result<Value, Failure> {
    let parsed = Path::parse(path).map_err(|_| Failure::InvalidPath)?;
    let found = parsed.walk(chill.value()).map_err(|err| {
        let hint = hint(chill.value(), &parsed, &err);
        Failure::Walk { err, hint }
    })?;

    shape.narrow(Son::new(found)).map_err(|_| Failure::Shape {
        expected: shape.desc(),
        found: kind_desc(found),
    })
}

/// Explain a failed walk by looking at the node the failing segment was applied to.
fn hint(root: &Value, path: &Path, err: &WalkError) -> Option<String> {
    let position = path
        .segments()
        .iter()
        .position(|segment| segment.span == err.segment.span)?;
    let parent = Path::from_labels(path.labels().take(position))
        .walk(root)
        .ok()?;
    trace!(?position, parent = kind_desc(parent), "building hint");

    match (err.kind, parent) {
        (ErrorKind::FieldNotFound, Value::Object(members)) => {
            edit_distance::find_best_match_for_name(
                members.keys().map(String::as_str),
                &err.segment.val,
                None,
            )
            .map(|key| format!("did you mean `[{key}]`?"))
        }
        (ErrorKind::OutOfRange, Value::Array(elems)) => Some(match elems.len() {
            0 => "the array is empty".to_string(),
            1 => "the array only has the element `[0]`".to_string(),
            n => format!("valid indices are `[0]` to `[{}]`", n - 1),
        }),
        (ErrorKind::ParentNotObject, Value::Array(_)) => Some(format!(
            "`{}` is not an array index; indices are written like `[0]`",
            err.segment.val
        )),
        (ErrorKind::ParentNotObject, parent) => {
            Some(format!("the parent is a {}", kind_desc(parent)))
        }
        _ => None,
    }
}

pub fn render(value: &Value, format: OutputFormat) -> serde_json::Result<String> {
    match (format, value) {
        (OutputFormat::Raw, Value::String(s)) => Ok(s.clone()),
        (OutputFormat::Pretty, _) => serde_json::to_string_pretty(value),
        (OutputFormat::Compact | OutputFormat::Raw, _) => serde_json::to_string(value),
    }
}
