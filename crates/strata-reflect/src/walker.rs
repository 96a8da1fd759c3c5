//! Hierarchy Walker
//!
//! Depth-first, pre-order traversal of a type and its ancestors. Each type
//! contributes only its directly declared methods; a method redeclared at
//! several levels is visited once per level.

use strata_types::{MethodDescriptor, TypeDescriptor};
use tracing::{debug, trace, warn};

use crate::config::WalkConfig;
use crate::error::{VisitError, WalkError, WalkResult};
use crate::visitor::{MethodFilter, MethodVisitor};

/// Configurable hierarchy walker
#[derive(Debug, Clone, Default)]
pub struct MethodWalker {
    config: WalkConfig,
}

impl MethodWalker {
    /// Create a walker with the given configuration
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walker configuration
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Visit every method of `ty` and its ancestors accepted by `filter`
    ///
    /// A `None` filter accepts every method. The first visitor failure
    /// aborts the walk.
    pub fn walk<T, V>(
        &self,
        ty: &T,
        visitor: &mut V,
        filter: Option<&dyn MethodFilter<T::Method>>,
    ) -> WalkResult<()>
    where
        T: TypeDescriptor,
        V: MethodVisitor<T::Method> + ?Sized,
    {
        self.walk_type(ty, visitor, filter, 0)
    }

    fn walk_type<T, V>(
        &self,
        ty: &T,
        visitor: &mut V,
        filter: Option<&dyn MethodFilter<T::Method>>,
        depth: usize,
    ) -> WalkResult<()>
    where
        T: TypeDescriptor,
        V: MethodVisitor<T::Method> + ?Sized,
    {
        if let Some(limit) = self.config.max_depth {
            if depth >= limit {
                debug!(type_name = ty.name(), limit, "hierarchy walk hit depth limit");
                return Err(WalkError::DepthLimitExceeded {
                    type_name: ty.name().to_string(),
                    limit,
                });
            }
        }

        let methods = ty.declared_methods();
        trace!(type_name = ty.name(), depth, methods = methods.len(), "walking declared methods");

        for method in methods {
            if let Some(filter) = filter {
                if !filter.matches(method) {
                    continue;
                }
            }

            visitor.visit(method).map_err(|err| match err {
                VisitError::AccessDenied { reason } => {
                    warn!(
                        type_name = ty.name(),
                        method = method.name(),
                        %reason,
                        "access denied to enumerated method"
                    );
                    WalkError::IllegalState {
                        method: method.name().to_string(),
                        reason,
                    }
                }
                VisitError::Failed(source) => {
                    debug!(
                        type_name = ty.name(),
                        method = method.name(),
                        error = %source,
                        "visitor failed, aborting walk"
                    );
                    WalkError::Visitor(source)
                }
            })?;
        }

        // Keep backing up the inheritance hierarchy.
        if let Some(superclass) = ty.superclass() {
            self.walk_type(&superclass, visitor, filter, depth + 1)
        } else if ty.is_interface() {
            for super_iface in ty.interfaces() {
                self.walk_type(&super_iface, visitor, filter, depth + 1)?;
            }
            Ok(())
        } else {
            Ok(())
        }
    }
}

/// Walker used by the free functions; only an explicit `MethodWalker` has
/// a depth guard
fn unbounded_walker() -> MethodWalker {
    MethodWalker::new(WalkConfig::unbounded())
}

/// Visit every method declared on `ty` and its ancestors
///
/// The same method name declared on a subclass and a superclass is
/// visited twice.
pub fn do_with_methods<T, V>(ty: &T, visitor: &mut V) -> WalkResult<()>
where
    T: TypeDescriptor,
    V: MethodVisitor<T::Method> + ?Sized,
{
    unbounded_walker().walk(ty, visitor, None)
}

/// Visit every method of `ty` and its ancestors that `filter` accepts
pub fn do_with_methods_matching<T, V, F>(ty: &T, visitor: &mut V, filter: &F) -> WalkResult<()>
where
    T: TypeDescriptor,
    V: MethodVisitor<T::Method> + ?Sized,
    F: MethodFilter<T::Method>,
{
    unbounded_walker().walk(ty, visitor, Some(filter as &dyn MethodFilter<T::Method>))
}

/// Collect every accepted method in walk order
pub fn collect_methods<T>(
    ty: &T,
    filter: Option<&dyn MethodFilter<T::Method>>,
) -> WalkResult<Vec<T::Method>>
where
    T: TypeDescriptor,
    T::Method: Clone,
{
    let mut methods = Vec::new();
    unbounded_walker().walk(
        ty,
        &mut |method: &T::Method| -> Result<(), VisitError> {
            methods.push(method.clone());
            Ok(())
        },
        filter,
    )?;
    Ok(methods)
}
