//! Parsing of bracketed value paths such as `[gophers][0][name]`.
//!
//! A path is scanned left to right for `[label]` groups whose label is non-empty and free of
//! square brackets. Everything outside such groups is skipped, so `x[a]y[b]` has the same
//! segments as `[a][b]`. Labels are kept verbatim; whether a label is used as an array index
//! or an object key is only decided while walking, against the node that is actually there.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;
use tracing::*;

use crate::error::{ErrorKind, Result};
use crate::spanned::Spanned;

/// A parsed path. The empty path has no segments and denotes the root value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    segments: Vec<Spanned<String>>,
}

/// What a label means when the node it is applied to turns out to be an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    /// A canonical non-negative integer that fits in `usize`.
    At(usize),
    /// A canonical integer that can never address an element: negative, or too large for
    /// `usize`.
    Beyond,
}

impl Index {
    /// Classify a label. Only canonical base-10 integers are indices: ASCII digits without a
    /// leading `+`, whitespace or superfluous leading zeros, optionally preceded by `-`. `-0`
    /// is not canonical. Labels that are not indices can still be used as object keys.
    pub fn classify(label: &str) -> Option<Index> {
        let (negative, digits) = match label.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, label),
        };

        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical || (negative && digits == "0") {
            return None;
        }

        if negative {
            return Some(Index::Beyond);
        }

        Some(digits.parse::<usize>().map_or(Index::Beyond, Index::At))
    }
}

fn segments<'a>() -> impl Parser<'a, &'a str, Vec<Spanned<String>>, extra::Err<Rich<'a, char>>> {
    let segment = none_of("[]")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(ToString::to_string)
        .delimited_by(just('['), just(']'))
        .map_with(|val, e| Spanned {
            span: e.span(),
            val,
        })
        .labelled("path segment");

    // Anything that does not start a well-formed segment is skipped one character at a time.
    segment
        .map(Some)
        .or(any().to(None))
        .repeated()
        .collect::<Vec<_>>()
        .map(|found: Vec<Option<Spanned<String>>>| {
            found.into_iter().flatten().collect()
        })
        .then_ignore(end())
}

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Path::default()
    }

    /// Parse a path string. A non-empty string without a single `[label]` group is rejected
    /// with [`ErrorKind::InvalidPath`].
    pub fn parse(input: &str) -> Result<Self> {
        let segments = segments().parse(input).into_result().map_err(|errs| {
            debug!(?input, ?errs, "failed to scan path");
            ErrorKind::InvalidPath
        })?;

        if segments.is_empty() && !input.is_empty() {
            debug!(?input, "nonempty path without any bracketed segment");
            return Err(ErrorKind::InvalidPath);
        }

        trace!(?input, count = segments.len(), "parsed path");
        Ok(Path { segments })
    }

    /// Build a path from raw labels. Spans are those of the canonical rendering, i.e. of
    /// `self.to_string()`.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut offset = 0;
        let segments = labels
            .into_iter()
            .map(|label| {
                let val = label.into();
                let len = val.len() + 2;
                let span = SimpleSpan::from(offset..offset + len);
                offset += len;
                Spanned { span, val }
            })
            .collect();
        Path { segments }
    }

    pub fn segments(&self) -> &[Spanned<String>] {
        &self.segments
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.val.as_str())
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// `self` followed by `other`. Walking the result from some node is the same as walking
    /// `self` and then walking `other` from wherever that ended up.
    pub fn join(&self, other: &Path) -> Path {
        Path::from_labels(self.labels().chain(other.labels()))
    }
}

impl FromStr for Path {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "[{}]", segment.val)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(input: &str) -> Vec<String> {
        Path::parse(input)
            .unwrap()
            .labels()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn empty_path_is_root() {
        let path = Path::parse("").unwrap();
        assert!(path.is_root());
        assert_eq!(path, Path::root());
    }

    #[test]
    fn bracketed_segments_are_split() {
        assert_eq!(labels("[gophers][0][name]"), ["gophers", "0", "name"]);
    }

    #[test]
    fn labels_are_verbatim() {
        assert_eq!(
            labels("[ spaced key ][a.b][\"q\"]"),
            [" spaced key ", "a.b", "\"q\""]
        );
    }

    #[test]
    fn text_between_groups_is_skipped() {
        assert_eq!(labels("x[a]y[b]z"), ["a", "b"]);
        assert_eq!(labels("[[a]]"), ["a"]);
        assert_eq!(labels("[a[b]"), ["b"]);
        assert_eq!(labels("[][a]"), ["a"]);
    }

    #[test]
    fn nonempty_path_without_groups_is_invalid() {
        for input in ["foo", "foo.bar", "[]", "[", "]", "][", "[[]]", " "] {
            assert_eq!(Path::parse(input), Err(ErrorKind::InvalidPath), "{input:?}");
        }
    }

    #[test]
    fn spans_cover_the_brackets() {
        let path = Path::parse("x[ab][c]").unwrap();
        let spans: Vec<_> = path
            .segments()
            .iter()
            .map(|s| s.span.into_range())
            .collect();
        assert_eq!(spans, [1..5, 5..8]);
    }

    #[test]
    fn display_renders_canonical_form() {
        assert_eq!(Path::parse("x[a] [0]").unwrap().to_string(), "[a][0]");
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn join_concatenates_and_respans() {
        let joined = Path::parse("[a]").unwrap().join(&Path::parse("  [bc]").unwrap());
        assert_eq!(joined.to_string(), "[a][bc]");
        assert_eq!(joined.segments()[1].span.into_range(), 3..7);
        assert_eq!(joined, "[a][bc]".parse::<Path>().unwrap());
    }

    #[test]
    fn index_classification() {
        assert_eq!(Index::classify("0"), Some(Index::At(0)));
        assert_eq!(Index::classify("17"), Some(Index::At(17)));
        assert_eq!(Index::classify("-1"), Some(Index::Beyond));
        assert_eq!(
            Index::classify("99999999999999999999999999"),
            Some(Index::Beyond)
        );

        for label in ["", "-", "-0", "+1", "01", "00", " 1", "1 ", "1e3", "0x1", "one"] {
            assert_eq!(Index::classify(label), None, "{label:?}");
        }
    }
}
