//! Descriptor capabilities
//!
//! Any source of type metadata (a registry graph, a class-file reader,
//! a host runtime) can drive hierarchy traversal by implementing these.

/// A method declared directly on one type
pub trait MethodDescriptor {
    /// Simple method name
    fn name(&self) -> &str;
}

/// A class or interface and its structural relationships
///
/// Handles are expected to be cheap to copy: `superclass` and `interfaces`
/// return new handles by value.
pub trait TypeDescriptor: Sized {
    /// Method metadata this descriptor exposes
    type Method: MethodDescriptor;

    /// Type name
    fn name(&self) -> &str;

    /// Methods declared on this type only, not inherited ones
    fn declared_methods(&self) -> &[Self::Method];

    /// Direct superclass. `None` for interfaces and hierarchy roots.
    fn superclass(&self) -> Option<Self>;

    /// Whether this type is an interface
    fn is_interface(&self) -> bool;

    /// Directly implemented (class) or extended (interface) interfaces
    fn interfaces(&self) -> Vec<Self>;
}

impl MethodDescriptor for str {
    fn name(&self) -> &str {
        self
    }
}

impl MethodDescriptor for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<M: MethodDescriptor + ?Sized> MethodDescriptor for &M {
    fn name(&self) -> &str {
        (**self).name()
    }
}
