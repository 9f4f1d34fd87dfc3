//! Error adapter for converting CalloutError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Scene errors carry
//! their source and the span of the offending TOML, which render as a labeled
//! snippet; every other error renders as a plain message with a code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use callout::CalloutError;

/// Adapter for a scene parse error.
pub struct SceneDiagnosticAdapter<'a> {
    message: &'a str,
    span: Option<SourceSpan>,
    src: &'a str,
}

impl<'a> SceneDiagnosticAdapter<'a> {
    /// Create a new adapter over a scene error's parts.
    pub fn new(message: &'a str, span: Option<std::ops::Range<usize>>, src: &'a str) -> Self {
        Self {
            message,
            span: span.map(|range| SourceSpan::new(range.start.into(), range.len())),
            src,
        }
    }
}

impl fmt::Debug for SceneDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneDiagnosticAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for SceneDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SceneDiagnosticAdapter<'_> {}

impl MietteDiagnostic for SceneDiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("callout::scene"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "scenes need [container] and [anchor] tables; see demos/ for complete examples",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`CalloutError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a CalloutError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CalloutError::Io(_) => "callout::io",
            CalloutError::Config(_) => "callout::config",
            CalloutError::Scene { .. } => "callout::scene",
            CalloutError::Export(_) => "callout::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A scene error with source location information.
    Diagnostic(SceneDiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CalloutError`] into a list of reportable errors.
///
/// Every variant currently yields exactly one reportable.
pub fn to_reportables(err: &CalloutError) -> Vec<Reportable<'_>> {
    match err {
        CalloutError::Scene { message, span, src } => vec![Reportable::Diagnostic(
            SceneDiagnosticAdapter::new(message, span.clone(), src),
        )],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_is_diagnostic() {
        let err = CalloutError::Scene {
            message: "missing field `anchor`".to_string(),
            span: Some(0..5),
            src: "hello world".to_string(),
        };

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "missing field `anchor`");
                assert_eq!(d.code().unwrap().to_string(), "callout::scene");

                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert_eq!(labels[0].offset(), 0);
                assert_eq!(labels[0].len(), 5);
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_scene_error_without_span_has_no_labels() {
        let adapter = SceneDiagnosticAdapter::new("bad scene", None, "text = 1");

        assert!(adapter.labels().is_none());
        assert!(adapter.source_code().is_some());
    }

    #[test]
    fn test_non_scene_error() {
        let err = CalloutError::Config("bad value".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad value");
                assert_eq!(e.code().unwrap().to_string(), "callout::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_io_error_code() {
        let err = CalloutError::Io(std::io::Error::other("disk full"));
        let reportables = to_reportables(&err);

        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "callout::io"
        );
        assert!(reportables[0].to_string().contains("disk full"));
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = CalloutError::Scene {
            message: "invalid type".to_string(),
            span: Some(7..8),
            src: "text = 3".to_string(),
        };
        let reporter = miette::GraphicalReportHandler::new();

        let mut out = String::new();
        for reportable in to_reportables(&err) {
            reporter.render_report(&mut out, &reportable).unwrap();
        }
        assert!(out.contains("invalid type"));
    }
}
