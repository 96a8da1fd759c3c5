use std::io::Write;

use strata_reflect::{
    do_with_methods, AccessCheckedVisitor, AccessPermission, ConfigError, MethodFilter, MethodInfo,
    MethodWalker, ReflectConfig, VisitError, WalkError,
};
use strata_types::{Modifiers, TypeRegistry};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[reflect.walk]
max-depth = 3

[reflect.permissions]
global = "ALL"

[reflect.permissions.types]
"Secret" = "PUBLIC_ONLY"
"#
    )
    .unwrap();

    let config = ReflectConfig::from_file(file.path()).unwrap();
    assert_eq!(config.walk().max_depth, Some(3));
    assert_eq!(config.permissions().types.len(), 1);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReflectConfig::from_file(&dir.path().join("strata.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_configured_walk_end_to_end() {
    let mut registry = TypeRegistry::new();
    let base = registry.define_class("Base", None).unwrap();
    let mid = registry.define_class("Mid", Some("Base")).unwrap();
    let secret = registry.define_class("Secret", Some("Mid")).unwrap();
    registry.add_method(base, MethodInfo::new("hash")).unwrap();
    registry.add_method(mid, MethodInfo::new("load")).unwrap();
    registry.add_method(secret, MethodInfo::new("reveal")).unwrap();
    registry
        .add_method(secret, MethodInfo::new("key").with_modifiers(Modifiers::private()))
        .unwrap();

    let config = ReflectConfig::from_str(
        r#"
[reflect.walk]
max-depth = 2

[reflect.permissions.types]
"Secret" = "PUBLIC_ONLY"
"#,
    )
    .unwrap();
    let store = config.permissions().build_store(&registry).unwrap();
    assert_eq!(store.resolve(secret), AccessPermission::PUBLIC_ONLY);

    let walker = MethodWalker::new(config.walk().clone());
    let ty = registry.type_ref(secret).unwrap();

    // Public methods only: the depth guard trips before Base is reached.
    let mut seen = Vec::new();
    let mut visitor = AccessCheckedVisitor::new(&store, |m: &MethodInfo| -> Result<(), VisitError> {
        seen.push(m.name.clone());
        Ok(())
    });
    let public_only = |m: &MethodInfo| m.modifiers.is_public;
    let filter: &dyn MethodFilter<MethodInfo> = &public_only;
    let err = walker.walk(&ty, &mut visitor, Some(filter)).unwrap_err();
    drop(visitor);
    assert!(matches!(err, WalkError::DepthLimitExceeded { limit: 2, ref type_name } if type_name == "Base"));
    assert_eq!(seen, vec!["reveal", "load"]);

    // Without the filter the private method is denied.
    let mut visitor = AccessCheckedVisitor::new(&store, |_: &MethodInfo| -> Result<(), VisitError> { Ok(()) });
    let err = do_with_methods(&ty, &mut visitor).unwrap_err();
    assert!(matches!(err, WalkError::IllegalState { ref method, .. } if method == "key"));
}
