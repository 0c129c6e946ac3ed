use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};
use std::sync::{Arc, OnceLock};

use thiserror::Error as ThisError;

/// A shareable underlying cause.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Misuse of the cause slot of a [`Chained`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum CauseError {
    /// The cause was already established, possibly as "no cause".
    #[error("cause already set")]
    AlreadySet,
    /// The cause would make the error its own cause, directly or through its
    /// chain.
    #[error("an error cannot be its own cause")]
    SelfCausation,
}

/// An error with a cause that can be established exactly once.
///
/// The cause is either given at construction with [`Chained::with_cause`]
/// or later with [`Chained::init_cause`]. Establishing "no cause" counts:
/// after `with_cause(error, None)` no cause can be set anymore.
///
/// ```rust
/// use std::sync::Arc;
/// use xdom::{CauseError, Chained};
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
/// let error = Chained::new(std::fmt::Error);
/// error.init_cause(Some(Arc::new(io))).unwrap();
/// assert_eq!(
///     error.init_cause(None),
///     Err(CauseError::AlreadySet)
/// );
/// ```
pub struct Chained<E> {
    error: E,
    cause: OnceLock<Option<Cause>>,
}

impl<E> Chained<E>
where
    E: StdError + Send + Sync + 'static,
{
    /// Wrap an error without establishing its cause.
    pub fn new(error: E) -> Self {
        Chained {
            error,
            cause: OnceLock::new(),
        }
    }

    /// Wrap an error and establish its cause. `None` means "no cause", and
    /// is final.
    pub fn with_cause(error: E, cause: Option<Cause>) -> Self {
        let chained = Chained::new(error);
        // a fresh slot is always empty
        let _ = chained.cause.set(cause);
        chained
    }

    /// Establish the cause.
    ///
    /// Fails with [`CauseError::AlreadySet`] if a cause (or "no cause") was
    /// established before, and with [`CauseError::SelfCausation`] if this
    /// error occurs in the chain of `cause`.
    pub fn init_cause(&self, cause: Option<Cause>) -> Result<(), CauseError> {
        if self.cause.get().is_some() {
            return Err(CauseError::AlreadySet);
        }
        if let Some(cause) = &cause {
            if self.occurs_in(cause.as_ref()) {
                return Err(CauseError::SelfCausation);
            }
        }
        self.cause.set(cause).map_err(|_| CauseError::AlreadySet)
    }

    fn occurs_in(&self, cause: &(dyn StdError + 'static)) -> bool {
        let this = self as *const Self as *const ();
        let mut current = Some(cause);
        while let Some(error) = current {
            if error as *const dyn StdError as *const () == this {
                return true;
            }
            current = error.source();
        }
        false
    }

    /// The cause, if one was established.
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.get().and_then(|cause| cause.as_ref())
    }

    /// Whether the cause slot was established, with or without a cause.
    pub fn is_cause_established(&self) -> bool {
        self.cause.get().is_some()
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Unwrap, dropping the cause.
    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: Display> Display for Chained<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<E: Debug> Debug for Chained<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chained")
            .field("error", &self.error)
            .field("cause", &self.cause.get())
            .finish()
    }
}

impl<E> StdError for Chained<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.cause.get() {
            Some(Some(cause)) => Some(cause.as_ref() as &(dyn StdError + 'static)),
            Some(None) => None,
            None => self.error.source(),
        }
    }
}

impl<E> From<E> for Chained<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Chained::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ParseError};

    fn parse_error() -> Error {
        Error::Parse(ParseError::UnexpectedEnd { position: None })
    }

    #[test]
    fn test_cause_set_once() {
        let error = Chained::new(parse_error());
        assert!(!error.is_cause_established());
        error
            .init_cause(Some(Arc::new(std::fmt::Error)))
            .unwrap();
        assert_eq!(
            error.init_cause(Some(Arc::new(std::fmt::Error))),
            Err(CauseError::AlreadySet)
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_explicit_no_cause_is_final() {
        let error = Chained::with_cause(parse_error(), None);
        assert!(error.is_cause_established());
        assert!(error.cause().is_none());
        assert!(error.source().is_none());
        assert_eq!(
            error.init_cause(Some(Arc::new(std::fmt::Error))),
            Err(CauseError::AlreadySet)
        );
        assert_eq!(error.init_cause(None), Err(CauseError::AlreadySet));
    }

    #[test]
    fn test_self_causation_rejected() {
        let error = Arc::new(Chained::new(parse_error()));
        let cause: Cause = error.clone();
        assert_eq!(error.init_cause(Some(cause)), Err(CauseError::SelfCausation));
        assert!(!error.is_cause_established());
    }

    #[test]
    fn test_indirect_self_causation_rejected() {
        let outer = Arc::new(Chained::new(parse_error()));
        let middle = Arc::new(Chained::with_cause(std::fmt::Error, Some(outer.clone())));
        assert_eq!(
            outer.init_cause(Some(middle)),
            Err(CauseError::SelfCausation)
        );
    }

    #[test]
    fn test_unset_cause_falls_back_to_inner_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let error = Chained::new(Error::Io(io));
        // Error::Io is transparent, so its source is the io error's source
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "boom");
    }
}
