//! Reflection configuration (strata.toml)
//!
//! ```toml
//! [reflect.walk]
//! max-depth = 64
//!
//! [reflect.permissions]
//! global = "READ_ALL | INVOKE_PUBLIC"
//!
//! [reflect.permissions.types]
//! "com.example.Secret" = "NONE"
//! ```
//!
//! Other tables in the file are ignored. Missing sections fall back to
//! defaults. `max-depth = 0` disables the depth guard.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_types::TypeRegistry;
use thiserror::Error;

use crate::access::{AccessPermission, PermissionError, PermissionStore};

/// Default recursion limit for hierarchy walks
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// Permission store rejected a setting
    #[error("Invalid config: {0}")]
    Permission(#[from] PermissionError),
}

/// Root of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReflectConfig {
    /// `[reflect]` table
    #[serde(default)]
    pub reflect: ReflectSection,
}

/// `[reflect]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReflectSection {
    /// `[reflect.walk]`
    #[serde(default)]
    pub walk: WalkConfig,

    /// `[reflect.permissions]`
    #[serde(default)]
    pub permissions: PermissionConfig,
}

/// Hierarchy walk settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalkConfig {
    /// Maximum recursion depth; `None` disables the guard (`0` in TOML)
    #[serde(default = "default_max_depth", rename = "max-depth", with = "depth_limit")]
    pub max_depth: Option<usize>,
}

mod depth_limit {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.unwrap_or(0) as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let depth = usize::deserialize(deserializer)?;
        Ok((depth != 0).then_some(depth))
    }
}

fn default_max_depth() -> Option<usize> {
    Some(DEFAULT_MAX_DEPTH)
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl WalkConfig {
    /// Walk without a depth guard
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }
}

/// Access-control settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PermissionConfig {
    /// Global default, e.g. `"ALL"` or `"READ_ALL | INVOKE_PUBLIC"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,

    /// Per-type overrides keyed by type name
    #[serde(default)]
    pub types: BTreeMap<String, String>,
}

impl PermissionConfig {
    /// Validate permission strings (type names are checked in `build_store`)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(global) = &self.global {
            parse_permission("reflect.permissions.global", global)?;
        }
        for (name, value) in &self.types {
            parse_permission(&format!("reflect.permissions.types.\"{}\"", name), value)?;
        }
        Ok(())
    }

    /// Build a permission store, resolving type names against `registry`
    pub fn build_store(&self, registry: &TypeRegistry) -> Result<PermissionStore, ConfigError> {
        let mut store = PermissionStore::new();

        if let Some(global) = &self.global {
            store.set_global(parse_permission("reflect.permissions.global", global)?);
        }

        for (name, value) in &self.types {
            let key = format!("reflect.permissions.types.\"{}\"", name);
            let permissions = parse_permission(&key, value)?;
            let entry = registry
                .get_by_name(name)
                .ok_or_else(|| ConfigError::Invalid(format!("{}: unknown type {}", key, name)))?;
            store.set_type(entry.id, permissions)?;
        }

        Ok(store)
    }
}

fn parse_permission(key: &str, value: &str) -> Result<AccessPermission, ConfigError> {
    AccessPermission::parse(value)
        .ok_or_else(|| ConfigError::Invalid(format!("{}: invalid permission value {}", key, value)))
}

impl ReflectConfig {
    /// Parse a config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(content.as_str())
    }

    /// Parse a config from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: ReflectConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reflect.permissions.validate()
    }

    /// Walk settings
    pub fn walk(&self) -> &WalkConfig {
        &self.reflect.walk
    }

    /// Access-control settings
    pub fn permissions(&self) -> &PermissionConfig {
        &self.reflect.permissions
    }
}
