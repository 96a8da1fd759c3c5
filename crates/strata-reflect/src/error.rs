//! Walk errors
//!
//! Visitors report two kinds of failure and the walker keeps them apart:
//! an access denial means the host runtime refused metadata the walker had
//! already enumerated, which is never legitimate, while any other visitor
//! failure belongs to the caller and passes through untouched.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed caller error carried through a walk
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure reported by a visitor for one method
#[derive(Debug, Error)]
pub enum VisitError {
    /// Host access control refused the method
    #[error("Access denied: {reason}")]
    AccessDenied {
        /// Host-supplied reason
        reason: String,
    },

    /// The visitor's own processing failed
    #[error(transparent)]
    Failed(BoxError),
}

impl VisitError {
    /// Access denial with a reason
    pub fn access_denied(reason: impl Into<String>) -> Self {
        VisitError::AccessDenied {
            reason: reason.into(),
        }
    }

    /// Wrap a caller error
    pub fn failed<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        VisitError::Failed(err.into())
    }
}

/// Errors surfaced by a hierarchy walk
#[derive(Debug, Error)]
pub enum WalkError {
    /// Access to an enumerated method was denied
    #[error("Shouldn't be illegal to access method '{method}': {reason}")]
    IllegalState {
        /// Offending method name
        method: String,
        /// Host-supplied reason
        reason: String,
    },

    /// Visitor failure, propagated unchanged
    #[error(transparent)]
    Visitor(BoxError),

    /// Hierarchy deeper than the configured limit
    #[error("Type hierarchy deeper than {limit} levels at '{type_name}'")]
    DepthLimitExceeded {
        /// Type at which the limit was hit
        type_name: String,
        /// Configured limit
        limit: usize,
    },
}

impl WalkError {
    /// The visitor's own error, if this walk failed in the visitor
    pub fn visitor_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            WalkError::Visitor(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Take the visitor's own error out of this walk error
    pub fn into_visitor_error(self) -> Result<BoxError, Self> {
        match self {
            WalkError::Visitor(err) => Ok(err),
            other => Err(other),
        }
    }
}

/// Walk result
pub type WalkResult<T> = Result<T, WalkError>;
