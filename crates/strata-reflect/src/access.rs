//! Method access control
//!
//! Models the host runtime's access-control layer: which methods reflection
//! may read or invoke, resolved per declaring type with a global fallback.
//! Visitors consult it and report denials as [`VisitError::AccessDenied`].
//!
//! ## Resolution order
//!
//! | Level  | Source                                    |
//! |--------|-------------------------------------------|
//! | Type   | `set_type` (most specific)                |
//! | Global | `set_global` (defaults to `ALL`)          |

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use strata_types::{MethodInfo, TypeId};
use thiserror::Error;

use crate::error::VisitError;
use crate::visitor::MethodVisitor;

/// Access permission flags (bitflags)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessPermission(u8);

impl AccessPermission {
    /// No access
    pub const NONE: Self = Self(0x00);
    /// Read public method metadata
    pub const READ_PUBLIC: Self = Self(0x01);
    /// Read non-public method metadata
    pub const READ_PRIVATE: Self = Self(0x02);
    /// Invoke public methods
    pub const INVOKE_PUBLIC: Self = Self(0x04);
    /// Invoke non-public methods
    pub const INVOKE_PRIVATE: Self = Self(0x08);

    // Common combinations
    /// READ_PUBLIC | READ_PRIVATE
    pub const READ_ALL: Self = Self(0x03);
    /// INVOKE_PUBLIC | INVOKE_PRIVATE
    pub const INVOKE_ALL: Self = Self(0x0C);
    /// READ_PUBLIC | INVOKE_PUBLIC
    pub const PUBLIC_ONLY: Self = Self(0x05);
    /// Everything
    pub const ALL: Self = Self(0x0F);

    /// Create from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Get raw bits
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if permission contains a flag
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Union of permissions
    pub const fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Difference (remove flags)
    pub const fn difference(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Parse a single flag name, hex (`0x05`) or decimal bits
    pub fn parse_flag(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "NONE" => Some(Self::NONE),
            "READ_PUBLIC" => Some(Self::READ_PUBLIC),
            "READ_PRIVATE" => Some(Self::READ_PRIVATE),
            "INVOKE_PUBLIC" => Some(Self::INVOKE_PUBLIC),
            "INVOKE_PRIVATE" => Some(Self::INVOKE_PRIVATE),
            "READ_ALL" => Some(Self::READ_ALL),
            "INVOKE_ALL" => Some(Self::INVOKE_ALL),
            "PUBLIC_ONLY" => Some(Self::PUBLIC_ONLY),
            "ALL" => Some(Self::ALL),
            other => {
                let bits = match other.strip_prefix("0X") {
                    Some(hex) => u8::from_str_radix(hex, 16).ok()?,
                    None => other.parse::<u8>().ok()?,
                };
                ((bits & !Self::ALL.0) == 0).then_some(Self(bits))
            }
        }
    }

    /// Parse `|`-separated flags, e.g. `"READ_ALL | INVOKE_PUBLIC"`
    pub fn parse(s: &str) -> Option<Self> {
        s.split('|')
            .try_fold(Self::NONE, |acc, part| Self::parse_flag(part).map(|p| acc.union(p)))
    }
}

impl Default for AccessPermission {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for AccessPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(AccessPermission, &str); 4] = [
            (AccessPermission::READ_PUBLIC, "READ_PUBLIC"),
            (AccessPermission::READ_PRIVATE, "READ_PRIVATE"),
            (AccessPermission::INVOKE_PUBLIC, "INVOKE_PUBLIC"),
            (AccessPermission::INVOKE_PRIVATE, "INVOKE_PRIVATE"),
        ];

        if *self == Self::NONE {
            return f.write_str("NONE");
        }
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(" | "))
    }
}

/// Errors raised while editing a permission store
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PermissionError {
    /// The type's permissions were sealed
    #[error("Cannot modify sealed permissions of type #{0}")]
    SealedType(usize),
}

/// Store for method access permissions
#[derive(Debug)]
pub struct PermissionStore {
    /// Global default permissions
    global_default: AccessPermission,
    /// Type-level permissions: type_id -> permissions
    type_permissions: FxHashMap<TypeId, AccessPermission>,
    /// Sealed types (cannot modify permissions)
    sealed_types: FxHashSet<TypeId>,
}

impl Default for PermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionStore {
    /// Create a new permission store with default (ALL) permissions
    pub fn new() -> Self {
        Self {
            global_default: AccessPermission::ALL,
            type_permissions: FxHashMap::default(),
            sealed_types: FxHashSet::default(),
        }
    }

    /// Check if any permissions are configured (for fast-path checks)
    pub fn has_any_restrictions(&self) -> bool {
        self.global_default != AccessPermission::ALL || !self.type_permissions.is_empty()
    }

    /// Set global default permissions
    pub fn set_global(&mut self, permissions: AccessPermission) {
        self.global_default = permissions;
    }

    /// Get global default permissions
    pub fn global(&self) -> AccessPermission {
        self.global_default
    }

    /// Set type-level permissions
    pub fn set_type(&mut self, type_id: TypeId, permissions: AccessPermission) -> Result<(), PermissionError> {
        if self.sealed_types.contains(&type_id) {
            return Err(PermissionError::SealedType(type_id.index()));
        }
        self.type_permissions.insert(type_id, permissions);
        Ok(())
    }

    /// Get type-level permissions
    pub fn get_type(&self, type_id: TypeId) -> Option<AccessPermission> {
        self.type_permissions.get(&type_id).copied()
    }

    /// Clear type-level permissions
    pub fn clear_type(&mut self, type_id: TypeId) -> Result<(), PermissionError> {
        if self.sealed_types.contains(&type_id) {
            return Err(PermissionError::SealedType(type_id.index()));
        }
        self.type_permissions.remove(&type_id);
        Ok(())
    }

    /// Make a type's permissions immutable
    pub fn seal_type(&mut self, type_id: TypeId) {
        self.sealed_types.insert(type_id);
    }

    /// Check if a type's permissions are sealed
    pub fn is_type_sealed(&self, type_id: TypeId) -> bool {
        self.sealed_types.contains(&type_id)
    }

    /// Effective permissions for methods declared on a type
    pub fn resolve(&self, type_id: TypeId) -> AccessPermission {
        self.get_type(type_id).unwrap_or(self.global_default)
    }

    /// Check read access to a method's metadata
    pub fn check_read(&self, method: &MethodInfo) -> Result<(), VisitError> {
        let required = if method.modifiers.is_public {
            AccessPermission::READ_PUBLIC
        } else {
            AccessPermission::READ_PRIVATE
        };
        self.check(method, required, "read")
    }

    /// Check invoke access to a method
    pub fn check_invoke(&self, method: &MethodInfo) -> Result<(), VisitError> {
        let required = if method.modifiers.is_public {
            AccessPermission::INVOKE_PUBLIC
        } else {
            AccessPermission::INVOKE_PRIVATE
        };
        self.check(method, required, "invoke")
    }

    fn check(&self, method: &MethodInfo, required: AccessPermission, action: &str) -> Result<(), VisitError> {
        if self.resolve(method.declaring_type).contains(required) {
            return Ok(());
        }
        Err(VisitError::access_denied(format!(
            "cannot {} {} method {}",
            action,
            if method.modifiers.is_public { "public" } else { "non-public" },
            method.signature()
        )))
    }
}

/// Visitor adapter that checks read access before forwarding each method
pub struct AccessCheckedVisitor<'a, V> {
    store: &'a PermissionStore,
    inner: V,
}

impl<'a, V> AccessCheckedVisitor<'a, V> {
    /// Wrap `inner` with checks against `store`
    pub fn new(store: &'a PermissionStore, inner: V) -> Self {
        Self { store, inner }
    }

    /// Unwrap the inner visitor
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: MethodVisitor<MethodInfo>> MethodVisitor<MethodInfo> for AccessCheckedVisitor<'_, V> {
    fn visit(&mut self, method: &MethodInfo) -> Result<(), VisitError> {
        self.store.check_read(method)?;
        self.inner.visit(method)
    }
}
