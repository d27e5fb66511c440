use std::error::Error;

use crate::{
    AnyError, Chain,
    note::{Note, NoteStore},
    value::{NoteTypeError, Value},
};

/// Trait for error objects that own a [`NoteStore`].
///
/// This is the attachment API shared by single errors, error groups and
/// group members. Implementors only expose their store; adding, validating
/// and clearing notes is provided here so every error type behaves the same.
pub trait HasNotes {
    /// Returns the notes attached to this error, in insertion order.
    fn notes(&self) -> &NoteStore;

    /// Returns the note store for mutation.
    ///
    /// The store itself only accepts text, so handing it out does not let
    /// callers break its invariants.
    fn notes_mut(&mut self) -> &mut NoteStore;

    /// Attaches a note to the end of this error's notes.
    fn add_note(&mut self, note: impl Into<Note>)
    where
        Self: Sized,
    {
        self.notes_mut().push(note);
    }

    /// Attaches a dynamically typed value as a note.
    ///
    /// # Errors
    ///
    /// Returns a [`NoteTypeError`] if the value is not a string. The notes
    /// are left unchanged in that case.
    fn try_add_note(&mut self, value: Value) -> Result<(), NoteTypeError> {
        self.notes_mut().try_push(value)
    }

    /// Removes every note from this error.
    fn clear_notes(&mut self) {
        self.notes_mut().clear();
    }
}

/// Trait for everything that behaves as an error object.
///
/// Single errors, error groups and [`AnyError`] implement this trait. It is
/// what split conditions receive and what renderers walk, so both can treat
/// groups and single errors alike.
pub trait ErrorObject: HasNotes + Error {
    /// Returns the kind of the error, for example `ValueError`.
    fn kind(&self) -> &str;

    /// Returns the message of the error. It may be empty.
    fn message(&self) -> &str;

    /// Returns the errors chained to this one.
    fn chain(&self) -> &Chain;

    /// Returns the members if this error is a group.
    fn exceptions(&self) -> Option<&[AnyError]> {
        None
    }
}

/// Trait for types that can be converted to noted errors.
///
/// This trait provides a standardized interface for domain error types to
/// expose a kind name, a message and any notes they already know about. It
/// is used by [`crate::NotedError::from_error`].
pub trait AsNotedError {
    /// Returns the kind of the error.
    ///
    /// This is shown before the message when the error is rendered, for
    /// example `ValueError` in `ValueError: bad type`.
    fn kind(&self) -> String;

    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went
    /// wrong. It may be empty.
    fn message(&self) -> String;

    /// Returns notes the error carries from the start.
    ///
    /// Returns an empty vector if there are none.
    fn initial_notes(&self) -> Vec<String> {
        vec![]
    }
}
