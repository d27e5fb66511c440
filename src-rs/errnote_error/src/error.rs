use std::{error::Error, fmt};

use crate::{AnyError, AsNotedError, Chain, ErrorObject, HasNotes, Note, NoteStore};

/// A single error object with notes
///
/// This struct is the base error of the crate. It has a kind name and a
/// message, owns exactly one [`NoteStore`], and may be chained to the error
/// that caused it or that was being handled when it was created.
///
/// # Examples
///
/// ```rust
/// use errnote_error::{HasNotes, NotedError};
///
/// let mut error = NotedError::new("ValueError", "bad type");
/// error.add_note("while parsing field 'port'");
///
/// assert_eq!(error.notes().to_strings(), vec!["while parsing field 'port'"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotedError {
    /// The kind of the error, shown before the message
    kind: String,
    /// Human-readable error message
    message: String,
    /// Notes attached after the error was created
    notes: NoteStore,
    /// Errors chained to this one
    chain: Chain,
}

impl NotedError {
    /// Creates a new error with the given kind and message and no notes.
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            notes: NoteStore::new(),
            chain: Chain::new(),
        }
    }

    /// Creates a new `NotedError` from an error that implements `AsNotedError`
    ///
    /// The kind, message and initial notes are taken from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use errnote_error::{AsNotedError, HasNotes, NotedError};
    ///
    /// struct PortError(u16);
    ///
    /// impl AsNotedError for PortError {
    ///     fn kind(&self) -> String {
    ///         "PortError".to_string()
    ///     }
    ///
    ///     fn message(&self) -> String {
    ///         format!("port {} is reserved", self.0)
    ///     }
    /// }
    ///
    /// let error = NotedError::from_error(&PortError(22));
    /// assert_eq!(error.message(), "port 22 is reserved");
    /// assert!(error.notes().is_empty());
    /// ```
    pub fn from_error(error: &impl AsNotedError) -> Self {
        let mut noted = Self::new(error.kind(), error.message());
        noted.notes.extend(error.initial_notes());
        noted
    }

    /// Creates a new `NotedError` from any standard error.
    ///
    /// The message is the error's `Display` output and each `source()` in
    /// its chain becomes the cause of the error before it. A `NotedError`
    /// passed in is cloned as is, keeping its kind and notes.
    #[must_use]
    pub fn from_std_error(error: &(dyn Error + 'static)) -> Self {
        if let Some(noted) = error.downcast_ref::<Self>() {
            return noted.clone();
        }

        let mut noted = Self::new("Error", error.to_string());
        if let Some(source) = error.source() {
            let source = source
                .downcast_ref::<AnyError>()
                .cloned()
                .unwrap_or_else(|| Self::from_std_error(source).into());
            noted.chain.set_cause(Some(source));
        }
        noted
    }

    /// Adds a note and returns the error.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<Note>) -> Self {
        self.notes.push(note);
        self
    }

    /// Sets the explicit cause and returns the error.
    ///
    /// Setting a cause suppresses the context.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<AnyError>) -> Self {
        self.chain.set_cause(Some(cause.into()));
        self
    }

    /// Sets the implicit context and returns the error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<AnyError>) -> Self {
        self.chain.set_context(Some(context.into()));
        self
    }

    /// Returns the kind of the error
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the errors chained to this one
    #[must_use]
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Returns the errors chained to this one for mutation
    pub const fn chain_mut(&mut self) -> &mut Chain {
        &mut self.chain
    }
}

impl HasNotes for NotedError {
    fn notes(&self) -> &NoteStore {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut NoteStore {
        &mut self.notes
    }
}

impl ErrorObject for NotedError {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn chain(&self) -> &Chain {
        &self.chain
    }
}

impl fmt::Display for NotedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for NotedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.chain.next().map(|(_, error)| error as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{ChainKind, Value, ValueType, value::NoteTypeError};

    #[derive(Debug)]
    struct WrappedError {
        source: io::Error,
    }

    impl fmt::Display for WrappedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not read settings")
        }
    }

    impl Error for WrappedError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.source)
        }
    }

    struct ConfigError;

    impl AsNotedError for ConfigError {
        fn kind(&self) -> String {
            "ConfigError".to_string()
        }

        fn message(&self) -> String {
            "missing key 'port'".to_string()
        }

        fn initial_notes(&self) -> Vec<String> {
            vec!["in section [server]".to_string()]
        }
    }

    #[test]
    fn test_new_error_has_no_notes() {
        let error = NotedError::new("ValueError", "bad type");

        assert!(error.notes().is_empty());
        assert_eq!(error.kind(), "ValueError");
        assert_eq!(error.message(), "bad type");
        assert_eq!(error.to_string(), "bad type");
    }

    #[test]
    fn test_add_note_appends_in_order() {
        let mut error = NotedError::new("ValueError", "bad type");

        error.add_note("a");
        error.add_note("b");
        error.add_note("a");

        assert_eq!(error.notes().to_strings(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_try_add_note_rejects_non_text() {
        let mut error = NotedError::new("ValueError", "bad type").with_note("kept");

        let result = error.try_add_note(Value::from(42_i64));

        assert_eq!(result, Err(NoteTypeError::new(ValueType::Integer)));
        assert_eq!(error.notes().to_strings(), vec!["kept"]);
    }

    #[test]
    fn test_clear_notes_then_add() {
        let mut error = NotedError::new("ValueError", "bad type")
            .with_note("a")
            .with_note("b");

        error.clear_notes();
        assert!(error.notes().is_empty());

        error.clear_notes();
        assert!(error.notes().is_empty());

        error.add_note("x");
        assert_eq!(error.notes().to_strings(), vec!["x"]);
    }

    #[test]
    fn test_from_error_copies_initial_notes() {
        let error = NotedError::from_error(&ConfigError);

        assert_eq!(error.kind(), "ConfigError");
        assert_eq!(error.message(), "missing key 'port'");
        assert_eq!(error.notes().to_strings(), vec!["in section [server]"]);
    }

    #[test]
    fn test_from_std_error_follows_sources() {
        let error = WrappedError {
            source: io::Error::new(io::ErrorKind::NotFound, "settings.toml not found"),
        };

        let noted = NotedError::from_std_error(&error);

        assert_eq!(noted.kind(), "Error");
        assert_eq!(noted.message(), "could not read settings");

        let (kind, cause) = noted.chain().next().expect("source should become the cause");
        assert_eq!(kind, ChainKind::Cause);
        assert_eq!(cause.to_string(), "settings.toml not found");
    }

    #[test]
    fn test_from_std_error_keeps_noted_error() {
        let original = NotedError::new("KeyError", "'port'").with_note("looked up in env");

        let noted = NotedError::from_std_error(&original);

        assert_eq!(noted, original);
    }

    #[test]
    fn test_source_prefers_cause() {
        let error = NotedError::new("RuntimeError", "outer")
            .with_context(NotedError::new("KeyError", "context"))
            .with_cause(NotedError::new("OSError", "cause"));

        let source = error.source().expect("cause should be the source");

        assert_eq!(source.to_string(), "cause");
    }

    #[test]
    fn test_source_falls_back_to_context() {
        let error = NotedError::new("RuntimeError", "outer")
            .with_context(NotedError::new("KeyError", "context"));

        let source = error.source().expect("context should be the source");

        assert_eq!(source.to_string(), "context");
    }
}
