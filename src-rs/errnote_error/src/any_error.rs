use std::{error::Error, fmt};

use crate::{Chain, ErrorGroup, ErrorObject, HasNotes, NoteStore, NotedError};

/// Either a single error or an error group.
///
/// This is what an error group holds as members and what an error chain
/// links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyError {
    /// A single error
    Error(NotedError),
    /// A group of errors
    Group(ErrorGroup),
}

impl AnyError {
    /// Returns the single error, if this is one.
    #[must_use]
    pub const fn as_error(&self) -> Option<&NotedError> {
        match self {
            Self::Error(error) => Some(error),
            Self::Group(_) => None,
        }
    }

    /// Returns the error group, if this is one.
    #[must_use]
    pub const fn as_group(&self) -> Option<&ErrorGroup> {
        match self {
            Self::Error(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    fn as_object(&self) -> &dyn ErrorObject {
        match self {
            Self::Error(error) => error,
            Self::Group(group) => group,
        }
    }
}

impl From<NotedError> for AnyError {
    fn from(error: NotedError) -> Self {
        Self::Error(error)
    }
}

impl From<ErrorGroup> for AnyError {
    fn from(group: ErrorGroup) -> Self {
        Self::Group(group)
    }
}

impl HasNotes for AnyError {
    fn notes(&self) -> &NoteStore {
        self.as_object().notes()
    }

    fn notes_mut(&mut self) -> &mut NoteStore {
        match self {
            Self::Error(error) => error.notes_mut(),
            Self::Group(group) => group.notes_mut(),
        }
    }
}

impl ErrorObject for AnyError {
    fn kind(&self) -> &str {
        self.as_object().kind()
    }

    fn message(&self) -> &str {
        self.as_object().message()
    }

    fn chain(&self) -> &Chain {
        self.as_object().chain()
    }

    fn exceptions(&self) -> Option<&[Self]> {
        self.as_object().exceptions()
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => fmt::Display::fmt(error, f),
            Self::Group(group) => fmt::Display::fmt(group, f),
        }
    }
}

impl Error for AnyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Error(error) => error.source(),
            Self::Group(group) => group.source(),
        }
    }
}
