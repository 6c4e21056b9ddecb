//! Warning and note collection.
//!
//! Fatal failures travel as [`TriageError`](crate::TriageError) values; the
//! `Handler` exists for everything softer. The evaluator reports per-row
//! runtime problems here and keeps going, and the driver drains the handler
//! after the run to show them to the user.

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use triage_util::Level;
///
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A fatal problem. Pipeline stages normally return these as errors
    /// instead of emitting them, but the level exists for hosts that
    /// collect everything.
    Error,
    /// A per-row runtime problem; evaluation continued.
    Warning,
    /// Additional context attached to another diagnostic.
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Main message.
    pub message: String,
    /// Source location, `Span::DUMMY` when none applies.
    pub span: Span,
    /// Additional notes for context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given level.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attaches a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Collector for diagnostics emitted across the pipeline.
///
/// Shared by reference between the evaluator and its host; interior
/// mutability lets emitters hold `&Handler` only.
///
/// # Examples
///
/// ```
/// use triage_util::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.warning("row 3: type mismatch", Span::DUMMY);
/// assert_eq!(handler.warning_count(), 1);
/// assert!(!handler.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pre-built diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Records an error diagnostic.
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Records a warning diagnostic.
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::warning(message, span));
    }

    /// Returns true if any error-level diagnostic has been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Returns a copy of everything recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Discards all recorded diagnostics.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
