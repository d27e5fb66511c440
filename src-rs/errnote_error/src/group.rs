//! Error groups and how they are split.
//!
//! An error group is an error object that holds a non-empty list of member
//! errors, each either a single error or another group. Groups can be split
//! by a condition into a matching part and a remaining part. The tree shape
//! is kept: nested groups are split recursively and empty parts are dropped.
//!
//! # Notes and splitting
//!
//! Every part produced by a split receives a copy of the original group's
//! notes, taken at the time of the split, along with its cause and context.
//! The parts do not share notes with the original or with each other.

use std::{error::Error, fmt};

use crate::{AnyError, Chain, ErrorObject, HasNotes, Note, NoteStore};

/// The kind given to groups created with [`ErrorGroup::new`].
pub const DEFAULT_GROUP_KIND: &str = "ExceptionGroup";

/// Error returned when a group is created without any members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyGroupError;

impl fmt::Display for EmptyGroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("second argument (exceptions) must be a non-empty sequence")
    }
}

impl Error for EmptyGroupError {}

/// An error object holding a non-empty list of member errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorGroup {
    kind: String,
    message: String,
    exceptions: Vec<AnyError>,
    notes: NoteStore,
    chain: Chain,
}

impl ErrorGroup {
    /// Creates a new group with the given message and members.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyGroupError`] if `exceptions` yields no members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use errnote_error::{ErrorGroup, NotedError};
    ///
    /// let group = ErrorGroup::new(
    ///     "failed to load models",
    ///     [
    ///         NotedError::new("ParseError", "unexpected token"),
    ///         NotedError::new("IoError", "file not found"),
    ///     ],
    /// )
    /// .expect("group has members");
    ///
    /// assert_eq!(group.exceptions().len(), 2);
    /// ```
    pub fn new<I>(message: impl Into<String>, exceptions: I) -> Result<Self, EmptyGroupError>
    where
        I: IntoIterator,
        I::Item: Into<AnyError>,
    {
        let exceptions: Vec<AnyError> = exceptions.into_iter().map(Into::into).collect();
        if exceptions.is_empty() {
            return Err(EmptyGroupError);
        }

        Ok(Self {
            kind: DEFAULT_GROUP_KIND.to_string(),
            message: message.into(),
            exceptions,
            notes: NoteStore::new(),
            chain: Chain::new(),
        })
    }

    /// Sets the kind of the group and returns it.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Adds a note and returns the group.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<Note>) -> Self {
        self.notes.push(note);
        self
    }

    /// Sets the explicit cause and returns the group.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<AnyError>) -> Self {
        self.chain.set_cause(Some(cause.into()));
        self
    }

    /// Sets the implicit context and returns the group.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<AnyError>) -> Self {
        self.chain.set_context(Some(context.into()));
        self
    }

    /// Returns the kind of the group
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the message of the group
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the members of the group
    #[must_use]
    pub fn exceptions(&self) -> &[AnyError] {
        &self.exceptions
    }

    /// Returns the errors chained to this group
    #[must_use]
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Returns the errors chained to this group for mutation
    pub const fn chain_mut(&mut self) -> &mut Chain {
        &mut self.chain
    }

    /// Returns the number of single errors in the group, counting through
    /// nested groups.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.exceptions
            .iter()
            .map(|exception| match exception {
                AnyError::Error(_) => 1,
                AnyError::Group(group) => group.leaf_count(),
            })
            .sum()
    }

    /// Creates a group with the same kind and message but other members.
    ///
    /// The new group has no notes and no chained errors.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyGroupError`] if `exceptions` yields no members.
    pub fn derive<I>(&self, exceptions: I) -> Result<Self, EmptyGroupError>
    where
        I: IntoIterator,
        I::Item: Into<AnyError>,
    {
        Self::new(self.message.clone(), exceptions).map(|group| group.with_kind(self.kind.clone()))
    }

    /// Splits the group into the members that match `condition` and the
    /// members that do not.
    ///
    /// If the group itself matches, the whole group is the match and there is
    /// no rest. Otherwise single members are tested one by one and nested
    /// groups are split recursively. Each non-empty part is derived from this
    /// group and given a copy of its notes and chain. Empty parts are `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use errnote_error::{ErrorGroup, ErrorObject, HasNotes, NotedError};
    ///
    /// let group = ErrorGroup::new(
    ///     "request failed",
    ///     [
    ///         NotedError::new("TimeoutError", "upstream timed out"),
    ///         NotedError::new("ValueError", "bad header"),
    ///     ],
    /// )
    /// .expect("group has members")
    /// .with_note("request id 42");
    ///
    /// let (timeouts, rest) = group.split(|error| error.kind() == "TimeoutError");
    /// let timeouts = timeouts.expect("one timeout");
    /// let rest = rest.expect("one other error");
    ///
    /// assert_eq!(timeouts.exceptions().len(), 1);
    /// assert_eq!(rest.notes().to_strings(), vec!["request id 42"]);
    /// ```
    #[must_use]
    pub fn split<F>(&self, condition: F) -> (Option<Self>, Option<Self>)
    where
        F: Fn(&dyn ErrorObject) -> bool,
    {
        let (matched, rest) = self.split_with(&condition);
        log::debug!(
            "split group {:?} into {} matching and {} remaining error(s)",
            self.message,
            matched.as_ref().map_or(0, Self::leaf_count),
            rest.as_ref().map_or(0, Self::leaf_count),
        );
        (matched, rest)
    }

    /// Returns the part of the group that matches `condition`.
    ///
    /// This is the first half of [`ErrorGroup::split`].
    #[must_use]
    pub fn subgroup<F>(&self, condition: F) -> Option<Self>
    where
        F: Fn(&dyn ErrorObject) -> bool,
    {
        self.split(condition).0
    }

    /// Splits the group by kind name.
    ///
    /// An error matches if its kind is one of `kinds`. This applies to the
    /// group itself and to nested groups as well as to single errors.
    #[must_use]
    pub fn split_by_kind(&self, kinds: &[&str]) -> (Option<Self>, Option<Self>) {
        self.split(|error| kinds.contains(&error.kind()))
    }

    /// Returns the part of the group whose kind is one of `kinds`.
    #[must_use]
    pub fn subgroup_by_kind(&self, kinds: &[&str]) -> Option<Self> {
        self.split_by_kind(kinds).0
    }

    fn split_with(
        &self,
        condition: &dyn Fn(&dyn ErrorObject) -> bool,
    ) -> (Option<Self>, Option<Self>) {
        if condition(self) {
            return (Some(self.clone()), None);
        }

        let mut matched = vec![];
        let mut rest = vec![];

        for exception in &self.exceptions {
            match exception {
                AnyError::Group(group) => {
                    let (group_matched, group_rest) = group.split_with(condition);
                    matched.extend(group_matched.map(AnyError::Group));
                    rest.extend(group_rest.map(AnyError::Group));
                }
                AnyError::Error(error) => {
                    if condition(error) {
                        matched.push(exception.clone());
                    } else {
                        rest.push(exception.clone());
                    }
                }
            }
        }

        (self.split_part(matched), self.split_part(rest))
    }

    fn split_part(&self, exceptions: Vec<AnyError>) -> Option<Self> {
        let mut part = self.derive(exceptions).ok()?;
        part.notes = self.notes.clone();
        part.chain = self.chain.clone();
        Some(part)
    }
}

impl HasNotes for ErrorGroup {
    fn notes(&self) -> &NoteStore {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut NoteStore {
        &mut self.notes
    }
}

impl ErrorObject for ErrorGroup {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn chain(&self) -> &Chain {
        &self.chain
    }

    fn exceptions(&self) -> Option<&[AnyError]> {
        Some(&self.exceptions)
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.exceptions.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{} ({count} sub-exception{plural})", self.message)
    }
}

impl Error for ErrorGroup {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.chain.next().map(|(_, error)| error as &(dyn Error + 'static))
    }
}
