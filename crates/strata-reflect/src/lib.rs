//! Strata Reflection Utilities
//!
//! Walks the methods declared on a type and all of its ancestors, handing
//! each one to a caller-supplied visitor, and classifies method names
//! produced by CGLIB-style proxy enhancement.
//!
//! ## Walk order
//!
//! - Methods declared directly on the current type, in descriptor order
//! - Then the superclass, if there is one
//! - Otherwise, for interfaces, each super-interface in turn
//!
//! ```ignore
//! use strata_reflect::{do_with_methods_matching, VisitError};
//!
//! let mut names = Vec::new();
//! do_with_methods_matching(
//!     ty,
//!     &mut |m: &MethodInfo| { names.push(m.name.clone()); Ok::<_, VisitError>(()) },
//!     &|m: &MethodInfo| m.modifiers.is_public,
//! )?;
//! ```

#![warn(missing_docs)]

pub mod access;
pub mod config;
pub mod error;
pub mod filters;
pub mod naming;
pub mod visitor;
pub mod walker;

pub use access::{AccessCheckedVisitor, AccessPermission, PermissionError, PermissionStore};
pub use config::{ConfigError, PermissionConfig, ReflectConfig, WalkConfig, DEFAULT_MAX_DEPTH};
pub use error::{VisitError, WalkError, WalkResult};
pub use naming::{cglib_original_name, is_cglib_renamed_method, is_cglib_renamed_name};
pub use visitor::{MethodFilter, MethodVisitor};
pub use walker::{collect_methods, do_with_methods, do_with_methods_matching, MethodWalker};

pub use strata_types::{MethodDescriptor, MethodInfo, TypeDescriptor};
