//! Explicit and implicit chaining between error objects.

use crate::AnyError;

/// How a chained error relates to the error that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// The chained error was set explicitly as the cause.
    Cause,
    /// The chained error was being handled when this error was created.
    Context,
}

/// The errors chained to one error object.
///
/// An error may have an explicit cause and an implicit context. Setting a
/// cause, even to `None`, suppresses the context, so the context is only
/// reported when nothing more specific was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    cause: Option<Box<AnyError>>,
    context: Option<Box<AnyError>>,
    suppress_context: bool,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cause: None,
            context: None,
            suppress_context: false,
        }
    }

    /// Returns the explicit cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&AnyError> {
        self.cause.as_deref()
    }

    /// Returns the implicit context, if any.
    #[must_use]
    pub fn context(&self) -> Option<&AnyError> {
        self.context.as_deref()
    }

    /// Returns whether the context is suppressed.
    #[must_use]
    pub const fn suppress_context(&self) -> bool {
        self.suppress_context
    }

    /// Sets the explicit cause and suppresses the context.
    pub fn set_cause(&mut self, cause: Option<AnyError>) {
        self.cause = cause.map(Box::new);
        self.suppress_context = true;
    }

    /// Sets the implicit context.
    pub fn set_context(&mut self, context: Option<AnyError>) {
        self.context = context.map(Box::new);
    }

    /// Sets whether the context is suppressed.
    pub const fn set_suppress_context(&mut self, suppress_context: bool) {
        self.suppress_context = suppress_context;
    }

    /// Returns the chained error that should be reported next, if any.
    ///
    /// This is the cause when one is set, otherwise the context unless it is
    /// suppressed.
    #[must_use]
    pub fn next(&self) -> Option<(ChainKind, &AnyError)> {
        if let Some(cause) = self.cause() {
            return Some((ChainKind::Cause, cause));
        }

        if self.suppress_context {
            return None;
        }

        self.context().map(|context| (ChainKind::Context, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NotedError;

    mod helper {
        use super::*;

        pub fn error(message: &str) -> AnyError {
            NotedError::new("ValueError", message).into()
        }
    }

    #[test]
    fn test_empty_chain_has_no_next() {
        let chain = Chain::new();

        assert!(chain.next().is_none());
        assert!(!chain.suppress_context());
    }

    #[test]
    fn test_context_is_reported_when_no_cause() {
        let mut chain = Chain::new();
        chain.set_context(Some(helper::error("inner")));

        let (kind, error) = chain.next().expect("context should be reported");

        assert_eq!(kind, ChainKind::Context);
        assert_eq!(error.to_string(), "inner");
    }

    #[test]
    fn test_cause_wins_over_context() {
        let mut chain = Chain::new();
        chain.set_context(Some(helper::error("context")));
        chain.set_cause(Some(helper::error("cause")));

        let (kind, error) = chain.next().expect("cause should be reported");

        assert_eq!(kind, ChainKind::Cause);
        assert_eq!(error.to_string(), "cause");
        assert!(chain.context().is_some());
    }

    #[test]
    fn test_setting_no_cause_suppresses_context() {
        let mut chain = Chain::new();
        chain.set_context(Some(helper::error("context")));
        chain.set_cause(None);

        assert!(chain.suppress_context());
        assert!(chain.next().is_none());
    }

    #[test]
    fn test_unsuppressing_restores_context() {
        let mut chain = Chain::new();
        chain.set_context(Some(helper::error("context")));
        chain.set_cause(None);
        chain.set_suppress_context(false);

        let (kind, _) = chain.next().expect("context should be reported");
        assert_eq!(kind, ChainKind::Context);
    }
}
