//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the spanned [`Error`] type that carries them.

#[cfg(test)]
extern crate self as exproc_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `exproc_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source text.
    ///
    /// The output contains ANSI color codes.
    pub fn render(&self, src_id: &str, source: &str) -> String {
        let mut buf = Vec::new();
        if self.build_report(src_id)
            .write((src_id, Source::from(source)), &mut buf)
            .is_err()
        {
            return String::new();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use exproc_attrs::ErrorKind;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "something went wrong",
        labels = ["right here"],
        help = "try something else",
    )]
    struct Broken;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("bad name `{}`", name),
        labels = ["this name", ""],
    )]
    struct BadName {
        name: String,
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Broken);
        assert!(err.is::<Broken>());
        assert!(!err.is::<BadName>());
        assert_eq!(err.downcast_ref::<Broken>(), Some(&Broken));
    }

    #[test]
    fn render_report() {
        let err = Error::new(vec![4..7], Broken);
        let rendered = err.render("input", "1 + foo");
        let plain = String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap();

        assert!(plain.contains("something went wrong"));
        assert!(plain.contains("right here"));
        assert!(plain.contains("try something else"));
    }

    #[test]
    fn render_report_with_fields() {
        let err = Error::new(vec![0..3, 4..5], BadName { name: "abc".to_string() });
        let rendered = err.render("input", "abc d");
        let plain = String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap();

        assert!(plain.contains("bad name `abc`"));
        assert!(plain.contains("this name"));
    }
}
