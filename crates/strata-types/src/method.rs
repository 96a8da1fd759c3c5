//! Method metadata

use crate::descriptor::MethodDescriptor;
use crate::registry::TypeId;

/// Modifier flags for a declared method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Public visibility
    pub is_public: bool,
    /// Private visibility
    pub is_private: bool,
    /// Protected visibility
    pub is_protected: bool,
    /// Static member
    pub is_static: bool,
    /// Abstract member
    pub is_abstract: bool,
    /// Final member
    pub is_final: bool,
    /// Compiler or tooling generated
    pub is_synthetic: bool,
}

impl Modifiers {
    /// Public instance method
    pub fn public() -> Self {
        Self {
            is_public: true,
            ..Self::default()
        }
    }

    /// Private instance method
    pub fn private() -> Self {
        Self {
            is_private: true,
            ..Self::default()
        }
    }

    /// Protected instance method
    pub fn protected() -> Self {
        Self {
            is_protected: true,
            ..Self::default()
        }
    }

    /// Neither public, private nor protected
    pub fn is_package_private(&self) -> bool {
        !self.is_public && !self.is_private && !self.is_protected
    }
}

/// Parameter information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Parameter type name
    pub type_name: String,
    /// Parameter index
    pub index: usize,
}

/// A method declared directly on a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Declaring type ID (set when the method is added to a registry)
    pub declaring_type: TypeId,
    /// Parameter infos
    pub parameters: Vec<ParameterInfo>,
    /// Return type name
    pub return_type: String,
    /// Modifier flags
    pub modifiers: Modifiers,
}

impl MethodInfo {
    /// Public no-arg method returning `void`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_type: TypeId::default(),
            parameters: Vec::new(),
            return_type: "void".to_string(),
            modifiers: Modifiers::public(),
        }
    }

    /// Set the modifiers
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the return type
    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Append a parameter
    pub fn param(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let index = self.parameters.len();
        self.parameters.push(ParameterInfo {
            name: name.into(),
            type_name: type_name.into(),
            index,
        });
        self
    }

    /// Signature string, e.g. `greet(String, int): void`
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        format!("{}({}): {}", self.name, params.join(", "), self.return_type)
    }
}

impl MethodDescriptor for MethodInfo {
    fn name(&self) -> &str {
        &self.name
    }
}
