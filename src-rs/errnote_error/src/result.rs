use crate::{HasNotes, Note};

/// Attaches notes to the error of a `Result` as it is passed along.
///
/// # Examples
///
/// ```rust
/// use errnote_error::{HasNotes, NotedError, ResultExt};
///
/// fn parse_port(text: &str) -> Result<u16, NotedError> {
///     text.parse()
///         .map_err(|_| NotedError::new("ValueError", format!("invalid port {text:?}")))
/// }
///
/// let error = parse_port("http")
///     .note("while reading the [server] section")
///     .unwrap_err();
///
/// assert_eq!(
///     error.notes().to_strings(),
///     vec!["while reading the [server] section"]
/// );
/// ```
pub trait ResultExt<T, E> {
    /// Adds `note` to the error, if there is one.
    ///
    /// # Errors
    ///
    /// Returns the original error with the note attached.
    fn note(self, note: impl Into<Note>) -> Result<T, E>;

    /// Adds the note built by `f` to the error, if there is one.
    ///
    /// `f` is only called on the error path.
    ///
    /// # Errors
    ///
    /// Returns the original error with the note attached.
    fn with_note<N, F>(self, f: F) -> Result<T, E>
    where
        N: Into<Note>,
        F: FnOnce() -> N;
}

impl<T, E: HasNotes> ResultExt<T, E> for Result<T, E> {
    fn note(self, note: impl Into<Note>) -> Self {
        self.map_err(|mut error| {
            error.add_note(note);
            error
        })
    }

    fn with_note<N, F>(self, f: F) -> Self
    where
        N: Into<Note>,
        F: FnOnce() -> N,
    {
        self.map_err(|mut error| {
            error.add_note(f());
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::NotedError;

    #[test]
    fn test_note_is_added_on_error() {
        let result: Result<(), NotedError> = Err(NotedError::new("KeyError", "'port'"));

        let error = result
            .note("first")
            .note("second")
            .expect_err("result should stay an error");

        assert_eq!(error.notes().to_strings(), vec!["first", "second"]);
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u16, NotedError> = Ok(8080);

        assert_eq!(result.note("unused"), Ok(8080));
    }

    #[test]
    fn test_with_note_is_lazy() {
        let calls = Cell::new(0);
        let build_note = || {
            calls.set(calls.get() + 1);
            format!("call {}", calls.get())
        };

        let ok: Result<u16, NotedError> = Ok(1);
        let _ = ok.with_note(build_note);
        assert_eq!(calls.get(), 0);

        let err: Result<u16, NotedError> = Err(NotedError::new("ValueError", "bad"));
        let error = err.with_note(build_note).expect_err("result should stay an error");
        assert_eq!(calls.get(), 1);
        assert_eq!(error.notes().to_strings(), vec!["call 1"]);
    }
}
