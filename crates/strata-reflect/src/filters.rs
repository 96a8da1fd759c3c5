//! Stock method filters and combinators

use strata_types::MethodDescriptor;

use crate::naming::is_cglib_renamed_method;
use crate::visitor::MethodFilter;

/// Accepts every method
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<M: ?Sized> MethodFilter<M> for AcceptAll {
    fn matches(&self, _method: &M) -> bool {
        true
    }
}

/// Rejects every method
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl<M: ?Sized> MethodFilter<M> for RejectAll {
    fn matches(&self, _method: &M) -> bool {
        false
    }
}

/// Accepts methods with an exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByName {
    name: String,
}

impl<M: MethodDescriptor + ?Sized> MethodFilter<M> for ByName {
    fn matches(&self, method: &M) -> bool {
        method.name() == self.name
    }
}

/// Rejects CGLIB renamed methods
#[derive(Debug, Clone, Copy, Default)]
pub struct NotCglibRenamed;

impl<M: MethodDescriptor + ?Sized> MethodFilter<M> for NotCglibRenamed {
    fn matches(&self, method: &M) -> bool {
        !is_cglib_renamed_method(method)
    }
}

/// Both filters accept
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<M: ?Sized, A: MethodFilter<M>, B: MethodFilter<M>> MethodFilter<M> for And<A, B> {
    fn matches(&self, method: &M) -> bool {
        self.0.matches(method) && self.1.matches(method)
    }
}

/// Either filter accepts
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<M: ?Sized, A: MethodFilter<M>, B: MethodFilter<M>> MethodFilter<M> for Or<A, B> {
    fn matches(&self, method: &M) -> bool {
        self.0.matches(method) || self.1.matches(method)
    }
}

/// Inverts a filter
#[derive(Debug, Clone, Copy)]
pub struct Not<A>(A);

impl<M: ?Sized, A: MethodFilter<M>> MethodFilter<M> for Not<A> {
    fn matches(&self, method: &M) -> bool {
        !self.0.matches(method)
    }
}

/// Accept only what both `a` and `b` accept
pub fn and<A, B>(a: A, b: B) -> And<A, B> {
    And(a, b)
}

/// Accept what either `a` or `b` accepts
pub fn or<A, B>(a: A, b: B) -> Or<A, B> {
    Or(a, b)
}

/// Accept what `a` rejects
pub fn not<A>(a: A) -> Not<A> {
    Not(a)
}

/// Accept every method
pub fn accept_all() -> AcceptAll {
    AcceptAll
}

/// Reject every method
pub fn reject_all() -> RejectAll {
    RejectAll
}

/// Accept methods named `name`
pub fn by_name(name: impl Into<String>) -> ByName {
    ByName { name: name.into() }
}

/// Skip CGLIB renamed methods
pub fn not_cglib_renamed() -> NotCglibRenamed {
    NotCglibRenamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_types::MethodInfo;

    #[test]
    fn test_stock_filters() {
        let save = MethodInfo::new("save");
        let renamed = MethodInfo::new("CGLIB$save$0");

        assert!(accept_all().matches(&save));
        assert!(!reject_all().matches(&save));
        assert!(by_name("save").matches(&save));
        assert!(!by_name("save").matches(&renamed));
        assert!(not_cglib_renamed().matches(&save));
        assert!(!not_cglib_renamed().matches(&renamed));
    }

    #[test]
    fn test_combinators() {
        let save = MethodInfo::new("save");
        let load = MethodInfo::new("load");

        let either = or(by_name("save"), by_name("load"));
        assert!(either.matches(&save));
        assert!(either.matches(&load));

        let neither = not(either);
        assert!(!neither.matches(&save));

        let both = and(by_name("save"), not_cglib_renamed());
        assert!(both.matches(&save));
        assert!(!both.matches(&load));
    }

    #[test]
    fn test_closure_filter() {
        let public_only = |m: &MethodInfo| m.modifiers.is_public;
        assert!(public_only.matches(&MethodInfo::new("run")));
    }
}
