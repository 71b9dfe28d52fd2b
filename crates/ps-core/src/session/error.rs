use thiserror::Error;

/// Local state-machine guard violations.
///
/// Raised synchronously before any network call is dispatched; prior state is
/// always left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Generation requested with an empty selection.
    #[error("cannot generate recipes from an empty selection")]
    EmptySelection,

    /// An item edit was requested while no scan session exists.
    #[error("no active scan session")]
    NoActiveSession,
}
