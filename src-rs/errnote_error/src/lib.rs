//! Error objects that carry ordered, human-readable notes
//!
//! Information about an error is often discovered after the error was
//! created: which file was being loaded, which retry attempt failed, which
//! request the error belongs to. This crate lets callers attach that
//! information as notes. Every error object owns one [`NoteStore`], which
//! keeps its notes in insertion order until they are cleared.
//!
//! Errors come in two shapes, a single [`NotedError`] and an [`ErrorGroup`]
//! holding member errors. Both implement [`HasNotes`] for the attachment API
//! and [`ErrorObject`] for everything a renderer needs. Splitting a group
//! copies the group's notes into every part.
//!
//! # Examples
//!
//! ```rust
//! use errnote_error::{HasNotes, NotedError, Value};
//!
//! let mut error = NotedError::new("TypeError", "unsupported operand");
//! error.add_note("left operand was read from 'input.csv'");
//!
//! // untyped values are checked when they are attached
//! assert!(error.try_add_note(Value::from(3_i64)).is_err());
//!
//! assert_eq!(error.notes().len(), 1);
//! ```

mod any_error;
mod chain;
mod error;
mod group;
mod note;
mod result;
mod traits;
mod value;

pub use any_error::AnyError;
pub use chain::{Chain, ChainKind};
pub use error::NotedError;
pub use group::{DEFAULT_GROUP_KIND, EmptyGroupError, ErrorGroup};
pub use note::{Note, NoteStore};
pub use result::ResultExt;
pub use traits::{AsNotedError, ErrorObject, HasNotes};
pub use value::{NoteTypeError, Value, ValueType};
