//! Strata Type Metadata
//!
//! Descriptor capabilities for classes, interfaces and their declared
//! methods, plus a manually populated hierarchy graph that satisfies them.

#![warn(missing_docs)]

pub mod descriptor;
pub mod error;
pub mod method;
pub mod registry;

pub use descriptor::{MethodDescriptor, TypeDescriptor};
pub use error::TypeError;
pub use method::{MethodInfo, Modifiers, ParameterInfo};
pub use registry::{TypeEntry, TypeId, TypeKind, TypeRef, TypeRegistry};
