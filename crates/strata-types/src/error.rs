//! Type registry errors

use thiserror::Error;

/// Errors raised while building a type hierarchy
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    /// Reference to a type that has not been defined
    #[error("Undefined type: {name}")]
    UndefinedType {
        /// Type name that was not found
        name: String,
    },

    /// A type with this name already exists
    #[error("Duplicate type: {name}")]
    DuplicateType {
        /// Conflicting type name
        name: String,
    },

    /// Type names must be non-empty
    #[error("Type name cannot be empty")]
    EmptyName,

    /// Superclass link pointing at an interface
    #[error("Invalid superclass for {name}: {superclass} is an interface")]
    InterfaceAsSuperclass {
        /// Type being defined
        name: String,
        /// Offending superclass
        superclass: String,
    },

    /// Interface link pointing at a class
    #[error("Invalid interface for {name}: {interface} is a class")]
    ClassAsInterface {
        /// Type being defined or extended
        name: String,
        /// Offending interface
        interface: String,
    },

    /// Type id outside the registry
    #[error("Unknown type id: {0}")]
    UnknownTypeId(usize),
}
