use super::{Detail, Error};
use crate::source::{Registry, SourceId};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

/// Renders frontend errors as labeled diagnostics.
pub struct ErrorReporter<'a> {
    source_registry: &'a Registry,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(source_registry: &'a Registry) -> Self {
        Self { source_registry }
    }

    pub fn report_error(&self, e: &Error) {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();

        // an error writing the report leaves us with nothing better to do
        let _ = term::emit(
            &mut writer.lock(),
            &config,
            self.source_registry,
            &self.diagnostic(e),
        );
    }

    pub fn diagnostic(&self, e: &Error) -> Diagnostic<SourceId> {
        match e {
            Error::IoError(e) => Diagnostic::error()
                .with_code("E001")
                .with_message(format!("failure while reading input: {}", e)),
            Error::LexicalError(_, detail) => Diagnostic::error()
                .with_code("E011")
                .with_message("failed to tokenize input")
                .with_labels(vec![Self::to_label(detail)]),
            Error::ParseError(_, detail) => Diagnostic::error()
                .with_code("E012")
                .with_message("failed to parse input")
                .with_labels(vec![Self::to_label(detail)]),
            Error::Bug(message) => Diagnostic::bug().with_message(message),
        }
    }

    fn to_label(detail: &Detail) -> Label<SourceId> {
        Label::primary(detail.location.id, detail.location.span.clone())
            .with_message(detail.content.clone())
    }
}
