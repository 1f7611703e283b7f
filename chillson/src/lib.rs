//! Schema-agnostic access to decoded JSON documents.
//!
//! Instead of declaring types that mirror the expected document, or matching on
//! [`serde_json::Value`] at every level, values are addressed with bracketed paths such as
//! `[gophers][0][name]`. Object keys and array indices are both written inside square brackets,
//! without quotes. Keys may be any string that does not itself contain `[` or `]`.
//!
//! ```
//! use chillson::{ErrorKind, Son};
//! use serde_json::json;
//!
//! let doc = json!({ "gophers": [ { "name": "Rob", "weight": 42.9 } ] });
//! let chill = Son::new(&doc);
//!
//! assert_eq!(chill.get_str("[gophers][0][name]"), Ok("Rob"));
//! assert_eq!(chill.get_int("[gophers][0][weight]"), Ok(42));
//!
//! for gopher in chill.each("[gophers]")? {
//!     assert_eq!(gopher.get_str("[name]"), Ok("Rob"));
//! }
//!
//! match chill.get_bool("[gophers][3]") {
//!     Err(ErrorKind::OutOfRange) => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), ErrorKind>(())
//! ```
//!
//! Decoding text into a [`serde_json::Value`] is left to `serde_json` itself; this crate only
//! ever reads an already materialized tree and never modifies it.

mod error;
mod path;
mod son;
mod spanned;
mod walk;

pub use error::{ErrorKind, Result};
pub use path::{Index, Path};
pub use serde_json::{Map, Value};
pub use son::{kind_desc, Son};
pub use spanned::Spanned;
pub use walk::{resolve, WalkError};
