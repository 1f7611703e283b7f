//! [`Son`], a read-only handle into a decoded JSON tree, and its typed accessors.
//!
//! Every `get_*` accessor resolves a path and then narrows the value it found; failures are
//! reported as an [`ErrorKind`]. Every `require_*` accessor does the same but panics with the
//! error message instead, for call sites where a failed lookup is a bug.

use serde_json::{Map, Value};
use tracing::*;

use crate::error::{ErrorKind, Result};
use crate::walk::resolve;

/// A borrowed view of one node of a decoded JSON document. Cheap to copy; any number of them
/// may point into the same tree, which has to outlive all of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Son<'a> {
    data: &'a Value,
}

impl<'a> From<&'a Value> for Son<'a> {
    fn from(data: &'a Value) -> Self {
        Son { data }
    }
}

impl<'a> Son<'a> {
    pub fn new(data: &'a Value) -> Self {
        Son { data }
    }

    /// The node this handle points at.
    pub fn value(&self) -> &'a Value {
        self.data
    }

    /// The value at `path`, relative to this node. The empty path gives the node itself.
    pub fn get(&self, path: &str) -> Result<&'a Value> {
        resolve(self.data, path)
    }

    /// A new handle rooted at `path`. Resolving `q` through it is the same as resolving
    /// `path` followed by `q` through `self`.
    pub fn at(&self, path: &str) -> Result<Son<'a>> {
        self.get(path).map(Son::new)
    }

    /// One handle per element of the array at `path`.
    pub fn each(&self, path: &str) -> Result<impl Iterator<Item = Son<'a>> + 'a> {
        Ok(self.get_arr(path)?.iter().map(Son::new))
    }

    pub fn get_str(&self, path: &str) -> Result<&'a str> {
        narrow(self.get(path)?, "string", Value::as_str)
    }

    /// JSON numbers are floating point; integers, too, come out as `f64` here.
    pub fn get_float(&self, path: &str) -> Result<f64> {
        narrow(self.get(path)?, "number", Value::as_f64)
    }

    /// The number at `path`, truncated toward zero: `42.9` gives `42`, `-42.9` gives `-42`.
    /// Values outside the range of `i64` saturate. Non-numbers are a
    /// [`ErrorKind::BadValueType`], just like for [`Son::get_float`].
    pub fn get_int(&self, path: &str) -> Result<i64> {
        self.get_float(path).map(|num| num as i64)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool> {
        narrow(self.get(path)?, "bool", Value::as_bool)
    }

    /// The members of the object at `path`, borrowed from the tree.
    pub fn get_obj(&self, path: &str) -> Result<&'a Map<String, Value>> {
        narrow(self.get(path)?, "object", Value::as_object)
    }

    /// The elements of the array at `path`, borrowed from the tree.
    pub fn get_arr(&self, path: &str) -> Result<&'a Vec<Value>> {
        narrow(self.get(path)?, "array", Value::as_array)
    }

    #[track_caller]
    pub fn require(&self, path: &str) -> &'a Value {
        unwrap_or_panic(self.get(path))
    }

    #[track_caller]
    pub fn require_str(&self, path: &str) -> &'a str {
        unwrap_or_panic(self.get_str(path))
    }

    #[track_caller]
    pub fn require_float(&self, path: &str) -> f64 {
        unwrap_or_panic(self.get_float(path))
    }

    #[track_caller]
    pub fn require_int(&self, path: &str) -> i64 {
        unwrap_or_panic(self.get_int(path))
    }

    #[track_caller]
    pub fn require_bool(&self, path: &str) -> bool {
        unwrap_or_panic(self.get_bool(path))
    }

    #[track_caller]
    pub fn require_obj(&self, path: &str) -> &'a Map<String, Value> {
        unwrap_or_panic(self.get_obj(path))
    }

    #[track_caller]
    pub fn require_arr(&self, path: &str) -> &'a Vec<Value> {
        unwrap_or_panic(self.get_arr(path))
    }
}

fn narrow<'a, T>(
    value: &'a Value,
    expected: &'static str,
    convert: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<T> {
    convert(value).ok_or_else(|| {
        debug!(expected, found = kind_desc(value), "value has the wrong type");
        ErrorKind::BadValueType
    })
}

/// A short name for the shape of `value`, for messages.
pub fn kind_desc(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[track_caller]
fn unwrap_or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn gophers() -> Value {
        json!({
            "gophers": [
                { "name": "Rob", "weight": 42.9, "hungry": true },
                { "name": "Ken", "weight": -3.5, "hungry": false, "tags": ["old"] }
            ],
            "count": 2,
            "nothing": null
        })
    }

    #[test]
    fn scalars() {
        let doc = gophers();
        let son = Son::new(&doc);
        assert_eq!(son.get_str("[gophers][0][name]"), Ok("Rob"));
        assert_eq!(son.get_float("[gophers][0][weight]"), Ok(42.9));
        assert_eq!(son.get_bool("[gophers][1][hungry]"), Ok(false));
        assert_eq!(son.get_float("[count]"), Ok(2.0));
    }

    #[test]
    fn int_truncates_toward_zero() {
        let doc = gophers();
        let son = Son::new(&doc);
        assert_eq!(son.get_int("[count]"), Ok(2));
        assert_eq!(son.get_int("[gophers][0][weight]"), Ok(42));
        assert_eq!(son.get_int("[gophers][1][weight]"), Ok(-3));
        assert_eq!(Son::new(&json!(1e300)).get_int(""), Ok(i64::MAX));
    }

    #[test]
    fn wrong_shape_is_bad_value_type() {
        let doc = gophers();
        let son = Son::new(&doc);
        assert_eq!(son.get_int("[gophers][0][name]"), Err(ErrorKind::BadValueType));
        assert_eq!(son.get_str("[count]"), Err(ErrorKind::BadValueType));
        assert_eq!(son.get_bool("[nothing]"), Err(ErrorKind::BadValueType));
        assert_eq!(son.get_obj("[gophers]"), Err(ErrorKind::BadValueType));
        assert_eq!(son.get_arr("[gophers][0]"), Err(ErrorKind::BadValueType));
    }

    #[test]
    fn resolution_errors_pass_through_unchanged() {
        let doc = gophers();
        let son = Son::new(&doc);
        assert_eq!(son.get_int("[gophers][7][weight]"), Err(ErrorKind::OutOfRange));
        assert_eq!(son.get_str("weight"), Err(ErrorKind::InvalidPath));
        assert_eq!(son.get_bool("[nothing][x]"), Err(ErrorKind::NullLeaf));
        assert_eq!(son.get_obj("[nobody]"), Err(ErrorKind::FieldNotFound));
    }

    #[test]
    fn containers_are_borrowed_from_the_tree() {
        let doc = gophers();
        let son = Son::new(&doc);

        let arr = son.get_arr("[gophers]").unwrap();
        assert!(std::ptr::eq(arr, doc["gophers"].as_array().unwrap()));

        let obj = son.get_obj("[gophers][1]").unwrap();
        assert!(std::ptr::eq(obj, doc["gophers"][1].as_object().unwrap()));
        assert_eq!(obj.get("tags"), Some(&json!(["old"])));
    }

    #[test]
    fn rerooted_handles() {
        let doc = gophers();
        let son = Son::new(&doc);
        let second = son.at("[gophers][1]").unwrap();
        assert_eq!(second.get_str("[name]"), Ok("Ken"));
        assert_eq!(second.get("[tags][0]"), son.get("[gophers][1][tags][0]"));
        assert_eq!(son.at("[gophers][2]"), Err(ErrorKind::OutOfRange));
    }

    #[test]
    fn each_element() {
        let doc = gophers();
        let names: Vec<_> = Son::new(&doc)
            .each("[gophers]")
            .unwrap()
            .map(|gopher| gopher.require_str("[name]"))
            .collect();
        assert_eq!(names, ["Rob", "Ken"]);
        assert!(Son::new(&doc).each("[count]").is_err());
    }

    #[test]
    fn require_returns_the_checked_value() {
        let doc = gophers();
        let son = Son::new(&doc);
        assert_eq!(son.require(""), &doc);
        assert_eq!(son.require_int("[gophers][0][weight]"), 42);
        assert_eq!(son.require_float("[gophers][1][weight]"), -3.5);
        assert!(son.require_bool("[gophers][0][hungry]"));
        assert_eq!(son.require_obj("").len(), 3);
        assert_eq!(son.require_arr("[gophers][1][tags]").len(), 1);
    }

    #[test]
    #[should_panic(expected = "retrieved value cannot be converted to the requested type")]
    fn require_panics_with_the_error_message() {
        let doc = gophers();
        Son::new(&doc).require_bool("[count]");
    }
}
