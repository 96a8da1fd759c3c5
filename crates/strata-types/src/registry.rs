//! Type Registry
//!
//! An explicit, manually populated class/interface graph. Ancestors must be
//! defined before the types that reference them, so every registry graph is
//! acyclic by construction.

use rustc_hash::FxHashMap;

use crate::descriptor::TypeDescriptor;
use crate::error::TypeError;
use crate::method::MethodInfo;

/// Index of a type within its registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

impl TypeId {
    /// Raw index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Type kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Concrete or abstract class
    Class,
    /// Interface
    Interface,
}

/// One node of the hierarchy
#[derive(Debug, Clone)]
pub struct TypeEntry {
    /// Type ID
    pub id: TypeId,
    /// Type name
    pub name: String,
    /// Class or interface
    pub kind: TypeKind,
    /// Direct superclass (always `None` for interfaces)
    pub superclass: Option<TypeId>,
    /// Implemented (class) or extended (interface) interfaces, in declaration order
    pub interfaces: Vec<TypeId>,
    /// Declared methods, in insertion order
    pub methods: Vec<MethodInfo>,
}

/// Registry of types indexed by ID and name
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: Vec<TypeEntry>,
    name_to_id: FxHashMap<String, TypeId>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a class with an optional superclass
    pub fn define_class(&mut self, name: &str, superclass: Option<&str>) -> Result<TypeId, TypeError> {
        self.check_new_name(name)?;

        let superclass = match superclass {
            Some(sup) => {
                let entry = self.lookup(sup)?;
                if entry.kind == TypeKind::Interface {
                    return Err(TypeError::InterfaceAsSuperclass {
                        name: name.to_string(),
                        superclass: sup.to_string(),
                    });
                }
                Some(entry.id)
            }
            None => None,
        };

        Ok(self.insert(name, TypeKind::Class, superclass, Vec::new()))
    }

    /// Define an interface extending zero or more interfaces
    pub fn define_interface(&mut self, name: &str, extends: &[&str]) -> Result<TypeId, TypeError> {
        self.check_new_name(name)?;

        let mut interfaces = Vec::with_capacity(extends.len());
        for sup in extends {
            interfaces.push(self.interface_id(name, sup)?);
        }

        Ok(self.insert(name, TypeKind::Interface, None, interfaces))
    }

    /// Record that a class implements an interface
    pub fn add_interface(&mut self, class: TypeId, interface: &str) -> Result<(), TypeError> {
        let class_name = self.entry(class)?.name.clone();
        let iface = self.interface_id(&class_name, interface)?;
        self.entry_mut(class)?.interfaces.push(iface);
        Ok(())
    }

    /// Declare a method on a type
    pub fn add_method(&mut self, ty: TypeId, mut method: MethodInfo) -> Result<(), TypeError> {
        let entry = self.entry_mut(ty)?;
        method.declaring_type = ty;
        entry.methods.push(method);
        Ok(())
    }

    /// Get type by ID
    pub fn get(&self, id: TypeId) -> Option<&TypeEntry> {
        self.types.get(id.0)
    }

    /// Get type by name
    pub fn get_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.name_to_id.get(name).and_then(|id| self.types.get(id.0))
    }

    /// Descriptor handle for a type
    pub fn type_ref(&self, id: TypeId) -> Option<TypeRef<'_>> {
        self.get(id).map(|_| TypeRef { registry: self, id })
    }

    /// Descriptor handle for a type, looked up by name
    pub fn type_ref_by_name(&self, name: &str) -> Option<TypeRef<'_>> {
        self.name_to_id
            .get(name)
            .map(|&id| TypeRef { registry: self, id })
    }

    /// Iterate over all types in definition order
    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.iter()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn check_new_name(&self, name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::EmptyName);
        }
        if self.name_to_id.contains_key(name) {
            return Err(TypeError::DuplicateType {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&TypeEntry, TypeError> {
        self.get_by_name(name).ok_or_else(|| TypeError::UndefinedType {
            name: name.to_string(),
        })
    }

    fn interface_id(&self, owner: &str, interface: &str) -> Result<TypeId, TypeError> {
        let entry = self.lookup(interface)?;
        if entry.kind != TypeKind::Interface {
            return Err(TypeError::ClassAsInterface {
                name: owner.to_string(),
                interface: interface.to_string(),
            });
        }
        Ok(entry.id)
    }

    fn entry(&self, id: TypeId) -> Result<&TypeEntry, TypeError> {
        self.types.get(id.0).ok_or(TypeError::UnknownTypeId(id.0))
    }

    fn entry_mut(&mut self, id: TypeId) -> Result<&mut TypeEntry, TypeError> {
        self.types.get_mut(id.0).ok_or(TypeError::UnknownTypeId(id.0))
    }

    fn insert(
        &mut self,
        name: &str,
        kind: TypeKind,
        superclass: Option<TypeId>,
        interfaces: Vec<TypeId>,
    ) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(TypeEntry {
            id,
            name: name.to_string(),
            kind,
            superclass,
            interfaces,
            methods: Vec::new(),
        });
        self.name_to_id.insert(name.to_string(), id);
        id
    }
}

/// Borrowed descriptor handle into a [`TypeRegistry`]
#[derive(Debug, Clone, Copy)]
pub struct TypeRef<'a> {
    registry: &'a TypeRegistry,
    id: TypeId,
}

impl<'a> TypeRef<'a> {
    /// Type ID
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Underlying registry entry
    pub fn entry(&self) -> &'a TypeEntry {
        // Handles are only minted for IDs the registry owns, and types are never removed.
        &self.registry.types[self.id.0]
    }

    fn sibling(&self, id: TypeId) -> TypeRef<'a> {
        TypeRef {
            registry: self.registry,
            id,
        }
    }
}

impl PartialEq for TypeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry) && self.id == other.id
    }
}

impl<'a> TypeDescriptor for TypeRef<'a> {
    type Method = MethodInfo;

    fn name(&self) -> &str {
        &self.entry().name
    }

    fn declared_methods(&self) -> &[MethodInfo] {
        &self.entry().methods
    }

    fn superclass(&self) -> Option<Self> {
        self.entry().superclass.map(|id| self.sibling(id))
    }

    fn is_interface(&self) -> bool {
        self.entry().kind == TypeKind::Interface
    }

    fn interfaces(&self) -> Vec<Self> {
        self.entry()
            .interfaces
            .iter()
            .map(|&id| self.sibling(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_class_chain() {
        let mut registry = TypeRegistry::new();
        let animal = registry.define_class("Animal", None).unwrap();
        let dog = registry.define_class("Dog", Some("Animal")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(dog).unwrap().superclass, Some(animal));
        assert_eq!(registry.get_by_name("Animal").unwrap().id, animal);
        assert!(registry.get_by_name("Cat").is_none());
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let mut registry = TypeRegistry::new();
        registry.define_class("Point", None).unwrap();

        assert_eq!(
            registry.define_class("Point", None),
            Err(TypeError::DuplicateType {
                name: "Point".to_string()
            })
        );
        assert_eq!(registry.define_interface("", &[]), Err(TypeError::EmptyName));
    }

    #[test]
    fn test_undefined_superclass() {
        let mut registry = TypeRegistry::new();
        assert_eq!(
            registry.define_class("Dog", Some("Animal")),
            Err(TypeError::UndefinedType {
                name: "Animal".to_string()
            })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_kind_mismatches() {
        let mut registry = TypeRegistry::new();
        registry.define_interface("Runnable", &[]).unwrap();
        let base = registry.define_class("Base", None).unwrap();

        assert!(matches!(
            registry.define_class("Task", Some("Runnable")),
            Err(TypeError::InterfaceAsSuperclass { .. })
        ));
        assert!(matches!(
            registry.define_interface("Job", &["Base"]),
            Err(TypeError::ClassAsInterface { .. })
        ));
        assert!(matches!(
            registry.add_interface(base, "Base"),
            Err(TypeError::ClassAsInterface { .. })
        ));
    }

    #[test]
    fn test_add_method_sets_declaring_type() {
        let mut registry = TypeRegistry::new();
        let point = registry.define_class("Point", None).unwrap();
        registry.add_method(point, MethodInfo::new("norm")).unwrap();

        let entry = registry.get(point).unwrap();
        assert_eq!(entry.methods[0].declaring_type, point);
        assert_eq!(
            registry.add_method(TypeId(9), MethodInfo::new("x")),
            Err(TypeError::UnknownTypeId(9))
        );
    }

    #[test]
    fn test_type_ref_descriptor() {
        let mut registry = TypeRegistry::new();
        registry.define_interface("A", &[]).unwrap();
        registry.define_interface("B", &[]).unwrap();
        let c = registry.define_interface("C", &["A", "B"]).unwrap();
        let base = registry.define_class("Base", None).unwrap();
        registry.add_interface(base, "C").unwrap();

        let c_ref = registry.type_ref(c).unwrap();
        assert!(c_ref.is_interface());
        assert!(c_ref.superclass().is_none());
        let names: Vec<&str> = c_ref.interfaces().iter().map(|t| t.entry().name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        let base_ref = registry.type_ref_by_name("Base").unwrap();
        assert!(!base_ref.is_interface());
        assert_eq!(base_ref.interfaces().len(), 1);
        assert!(registry.type_ref(TypeId(42)).is_none());
    }
}
