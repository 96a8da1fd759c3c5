//! Visitor and filter capabilities

use crate::error::VisitError;

/// Action to take on each method
pub trait MethodVisitor<M: ?Sized> {
    /// Perform an operation using the given method
    fn visit(&mut self, method: &M) -> Result<(), VisitError>;
}

impl<M: ?Sized, F> MethodVisitor<M> for F
where
    F: FnMut(&M) -> Result<(), VisitError>,
{
    fn visit(&mut self, method: &M) -> Result<(), VisitError> {
        self(method)
    }
}

/// Decides which methods a visitor sees
pub trait MethodFilter<M: ?Sized> {
    /// Determine whether the given method matches
    fn matches(&self, method: &M) -> bool;
}

impl<M: ?Sized, F> MethodFilter<M> for F
where
    F: Fn(&M) -> bool,
{
    fn matches(&self, method: &M) -> bool {
        self(method)
    }
}
