use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use log::{warn, error};

/// What went wrong with a piece of input. Every kind is recoverable: the
/// offending construct is skipped and translation carries on.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DiagnosticKind {
    Lexical,
    Syntactic,
    Unsupported,
    Semantic,
    Stack,
    Io
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = format!("{:?}", self).to_lowercase();
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind    : DiagnosticKind,
    pub file    : Option<PathBuf>,
    pub line    : Option<usize>,
    pub message : String
}

impl Diagnostic {
    pub fn new<S: Into<String>>(kind: DiagnosticKind, message: S) -> Self {
        Self {
            kind,
            file: None,
            line: None,
            message: message.into()
        }
    }

    pub fn lexical<S: Into<String>>(message: S) -> Self {
        Self::new(DiagnosticKind::Lexical, message)
    }

    pub fn syntactic<S: Into<String>>(message: S) -> Self {
        Self::new(DiagnosticKind::Syntactic, message)
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::new(DiagnosticKind::Unsupported, message)
    }

    pub fn semantic<S: Into<String>>(message: S) -> Self {
        Self::new(DiagnosticKind::Semantic, message)
    }

    pub fn stack<S: Into<String>>(message: S) -> Self {
        Self::new(DiagnosticKind::Stack, message)
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::new(DiagnosticKind::Io, message)
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Fills in the source location unless one is already set.
    pub fn located(mut self, file: &Path, line: usize) -> Self {
        if self.file.is_none() {
            self.file = Some(file.to_owned());
        }

        if self.line.is_none() {
            self.line = Some(line);
        }

        self
    }

    pub fn log(&self) {
        match self.kind {
            DiagnosticKind::Unsupported |
            DiagnosticKind::Stack => warn!("{}", self),
            _                     => error!("{}", self)
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}: ", file.display(), line)?,
            (Some(file), None)       => write!(f, "{}: ", file.display())?,
            (None, Some(line))       => write!(f, "line {}: ", line)?,
            (None, None)             => {}
        }

        write!(f, "{} error: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let d = Diagnostic::stack("Unmatched AttributeEnd encountered")
            .located(Path::new("scene.pbrt"), 12);

        assert_eq!(
            d.to_string(),
            "scene.pbrt:12: stack error: Unmatched AttributeEnd encountered");
    }

    #[test]
    fn located_keeps_existing_line() {
        let d = Diagnostic::lexical("bad escape")
            .with_line(3)
            .located(Path::new("a.pbrt"), 9);

        assert_eq!(d.line, Some(3));
        assert_eq!(d.file.as_deref(), Some(Path::new("a.pbrt")));
    }
}
