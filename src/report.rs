use std::ops::Range;

use ariadne::{Color, Config as ReportConfig, Fmt, Label, Report, ReportKind};

use crate::query::Failure;

pub type DiagnosticReport<'a> = Report<'a, (&'a String, Range<usize>)>;

/// ariadne counts in `char`s while path spans are byte offsets.
fn char_range(src: &str, bytes: Range<usize>) -> Range<usize> {
    let start = src[..bytes.start].chars().count();
    start..start + src[bytes].chars().count()
}

/// Build a report for a path that could not be resolved. `src_id` names the path in the
/// output, `path` is the path text itself and is what the labels point into.
pub fn failure_report<'a>(
    src_id: &'a String,
    path: &str,
    failure: &Failure,
    color: bool,
) -> DiagnosticReport<'a> {
    let blue = color.then_some(Color::Blue);
    let whole = char_range(path, 0..path.len());
    let (span, label, help, note) = match failure {
        Failure::InvalidPath => (
            whole,
            "no `[label]` segment found".to_string(),
            Some(
                "write object keys and array indices in square brackets, e.g. `[key][0]`"
                    .to_string(),
            ),
            None,
        ),
        Failure::Walk { err, hint } => (
            char_range(path, err.segment.span.into_range()),
            format!(
                "cannot apply segment \"{}\"",
                err.segment.val.as_str().fg(blue)
            ),
            hint.clone(),
            None,
        ),
        // An empty path has nothing for the label to point at, so the detail is repeated in a
        // note.
        Failure::Shape { expected, found } => (
            whole,
            format!("expected {} but found {}", expected.fg(blue), found.fg(blue)),
            None,
            Some(format!("expected {expected} but found {found}")),
        ),
    };

    let mut report = Report::build(ReportKind::Error, src_id, span.start)
        .with_config(ReportConfig::default().with_color(color))
        .with_message(failure.kind().to_string())
        .with_label(
            Label::new((src_id, span))
                .with_message(label)
                .with_color(Color::Red),
        );
    if let Some(help) = help {
        report.set_help(help);
    }
    if let Some(note) = note {
        report.set_note(note);
    }
    report.finish()
}
