//! Notes and the ordered store that holds them.

use std::{fmt, slice};

use crate::value::{NoteTypeError, Value};

/// A human-readable note attached to an error after it was created.
///
/// A note is always text. It can be built from any string, or checked out of
/// a dynamically typed [`Value`] with `Note::try_from`.
///
/// # Examples
///
/// ```rust
/// use errnote_error::Note;
///
/// let note = Note::from("while loading 'config.toml'");
/// assert_eq!(note.as_str(), "while loading 'config.toml'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Note(String);

impl Note {
    /// Returns the text of the note.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the note and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Note {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Note {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for Note {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl TryFrom<Value> for Note {
    type Error = NoteTypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self(text)),
            other @ (Value::None
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::List(_)) => Err(NoteTypeError::new(other.type_())),
        }
    }
}

impl AsRef<str> for Note {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Note {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Note {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered notes owned by one error object.
///
/// Notes are kept in insertion order and duplicates are preserved. The store
/// can only grow through [`NoteStore::push`] and [`NoteStore::try_push`] and
/// only shrink through [`NoteStore::clear`]; readers get a shared slice.
///
/// Cloning a store copies its notes. Two clones never share storage, so a
/// group split can hand every part its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty note store.
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Appends a note to the end of the store.
    pub fn push(&mut self, note: impl Into<Note>) {
        let note = note.into();
        log::trace!("attaching note {:?}", note.as_str());
        self.notes.push(note);
    }

    /// Appends a dynamically typed value as a note.
    ///
    /// # Errors
    ///
    /// Returns a [`NoteTypeError`] if the value is not a string. The store is
    /// left unchanged in that case.
    pub fn try_push(&mut self, value: Value) -> Result<(), NoteTypeError> {
        let note = Note::try_from(value).inspect_err(|error| {
            log::debug!("rejected note: {error}");
        })?;
        self.push(note);
        Ok(())
    }

    /// Removes every note from the store.
    ///
    /// Clearing an empty store does nothing.
    pub fn clear(&mut self) {
        if !self.notes.is_empty() {
            log::trace!("clearing {} note(s)", self.notes.len());
        }
        self.notes.clear();
    }

    /// Returns the notes in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    /// Returns an iterator over the notes in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Returns the number of notes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns an owned copy of the note texts.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.notes.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a NoteStore {
    type Item = &'a Note;
    type IntoIter = slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<Note>> FromIterator<N> for NoteStore {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<N: Into<Note>> Extend<N> for NoteStore {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for note in iter {
            self.push(note);
        }
    }
}
