use fibre_inject::{
  Container, ContainerConfig, Entity, EntityOptions, Error, Injector, MetadataTable,
  NativeTypePolicy, ResolvedParam, TargetId, TypeDescriptor,
};
use std::io::Write;
use std::sync::Arc;
use std::thread;

// --- Test Fixtures ---

struct Foo;
struct UserService;
struct Repository;
struct Unknown;

fn metadata() -> MetadataTable {
  MetadataTable::builder()
    .constructor::<Foo>([
      TypeDescriptor::named("Number"),
      TypeDescriptor::of::<UserService>(),
      TypeDescriptor::named("Boolean"),
    ])
    .method::<Foo>("load", [TypeDescriptor::of::<Repository>(), TypeDescriptor::named("Number")])
    .constructor::<UserService>([TypeDescriptor::of::<Repository>()])
    .constructor::<Repository>([])
    .build()
}

// --- Registration ---

#[test]
fn test_get_unknown_class_fails() {
  let container = Container::new(metadata());

  let err = container.get::<Unknown>().unwrap_err();

  assert!(matches!(err, Error::EntityNotRegistered { target } if target == TargetId::of::<Unknown>()));
}

#[test]
fn test_registered_service_resolves_constructor() {
  // Arrange
  let container = Container::new(metadata());
  container.register_service::<UserService>(EntityOptions::default());

  // Act
  let params = container.get::<UserService>().unwrap();

  // Assert
  assert_eq!(params, vec![ResolvedParam::Metadata(TypeDescriptor::of::<Repository>())]);
}

#[test]
fn test_no_argument_constructor_resolves_to_empty_list() {
  let container = Container::new(metadata());
  container.register_service::<Repository>(EntityOptions::default());

  assert!(container.get::<Repository>().unwrap().is_empty());
}

#[test]
fn test_injector_before_registration_creates_unactivated_entity() {
  // Arrange
  let container = Container::new(metadata());

  // Act
  container
    .add_injector(Injector::constructor::<Foo>(1, "userServiceToken"))
    .unwrap();

  // Assert
  assert!(container.contains::<Foo>());
  assert!(!container.is_activated::<Foo>());
  assert!(matches!(
    container.get::<Foo>(),
    Err(Error::EntityNotRegistered { .. })
  ));
}

#[test]
fn test_registration_keeps_injectors_declared_earlier() {
  // Arrange
  let container = Container::new(metadata());
  for (index, key) in [(0, "retryCount"), (1, "userServiceToken"), (2, "verbose")] {
    container
      .add_injector(Injector::constructor::<Foo>(index, key))
      .unwrap();
  }

  // Act
  container.register_service::<Foo>(EntityOptions { global: false });
  let params = container.get::<Foo>().unwrap();

  // Assert
  assert_eq!(params.len(), 3);
  assert!(params.iter().all(ResolvedParam::is_injector));
}

#[test]
fn test_foo_scenario_reports_native_param() {
  // Arrange
  let container = Container::new(metadata());
  container.register_service::<Foo>(EntityOptions { global: false });
  container
    .add_injector(Injector::constructor::<Foo>(1, "userServiceToken"))
    .unwrap();

  // Act & Assert
  assert!(matches!(
    container.get::<Foo>(),
    Err(Error::NativeTypeParam { index: 0, .. })
  ));

  container
    .add_injector(Injector::constructor::<Foo>(0, "retryCount"))
    .unwrap();
  assert!(matches!(
    container.get::<Foo>(),
    Err(Error::NativeTypeParam { index: 2, .. })
  ));
}

#[test]
fn test_duplicate_injector_through_container_fails() {
  let container = Container::new(metadata());
  container
    .add_injector(Injector::constructor::<Foo>(0, "a"))
    .unwrap();

  let err = container
    .add_injector(Injector::constructor::<Foo>(0, "b"))
    .unwrap_err();

  assert!(matches!(err, Error::DuplicateInjector { index: 0, .. }));
}

#[test]
fn test_add_entity_rejects_existing_target() {
  // Arrange
  let container = Container::new(metadata());
  let mut entity = Entity::of::<UserService>();
  entity.activate(EntityOptions { global: true });
  container.add_entity(entity).unwrap();

  // Act
  let err = container.add_entity(Entity::of::<UserService>()).unwrap_err();

  // Assert
  assert!(matches!(err, Error::DuplicateEntity { .. }));
  // The original, activated entity is untouched.
  assert_eq!(
    container.options::<UserService>(),
    Some(EntityOptions { global: true })
  );
  assert!(container.get::<UserService>().is_ok());
}

#[test]
fn test_add_entity_rejects_placeholder_from_injector() {
  let container = Container::new(metadata());
  container
    .add_injector(Injector::constructor::<Foo>(1, "userServiceToken"))
    .unwrap();

  let err = container.add_entity(Entity::of::<Foo>()).unwrap_err();

  assert!(matches!(err, Error::DuplicateEntity { .. }));
  assert_eq!(container.len(), 1);
}

#[test]
fn test_reregistration_updates_options() {
  let container = Container::new(metadata());

  container.register_service::<Repository>(EntityOptions { global: false });
  container.register_service::<Repository>(EntityOptions { global: true });

  assert_eq!(container.len(), 1);
  assert_eq!(container.global_targets(), vec![TargetId::of::<Repository>()]);
}

// --- Method Resolution ---

#[test]
fn test_method_resolution_uses_only_that_methods_injectors() {
  // Arrange
  let container = Container::new(metadata());
  container.register_service::<Foo>(EntityOptions::default());
  container
    .add_injector(Injector::method::<Foo>("load", 1, "pageSize"))
    .unwrap();
  container
    .add_injector(Injector::constructor::<Foo>(0, "retryCount"))
    .unwrap();

  // Act
  let params = container.get_method::<Foo>("load").unwrap();

  // Assert
  assert_eq!(params[0], ResolvedParam::Metadata(TypeDescriptor::of::<Repository>()));
  assert_eq!(params[1].injector().unwrap().key().as_str(), "pageSize");
}

#[test]
fn test_method_resolution_on_unknown_method_fails() {
  let container = Container::new(metadata());
  container.register_service::<Foo>(EntityOptions::default());

  let err = container.get_method::<Foo>("save").unwrap_err();

  assert!(matches!(err, Error::MethodNotRegistered { ref method, .. } if method == "save"));
}

#[test]
fn test_method_injector_out_of_range_fails_at_resolution() {
  // Registration accepts any index; the signature is only known at resolution.
  let container = Container::new(metadata());
  container.register_service::<Foo>(EntityOptions::default());
  container
    .add_injector(Injector::method::<Foo>("load", 5, "overflow"))
    .unwrap();

  let err = container.get_method::<Foo>("load").unwrap_err();

  assert!(matches!(err, Error::ParamIndexOutOfRange { index: 5, param_count: 2, .. }));
}

#[test]
fn test_constructor_method_name_resolves_without_native_check() {
  // Arrange
  let container = Container::new(metadata());
  container.register_service::<Foo>(EntityOptions::default());
  container
    .add_injector(Injector::constructor::<Foo>(1, "userServiceToken"))
    .unwrap();

  // Act
  let params = container.get_method::<Foo>("constructor").unwrap();

  // Assert
  assert_eq!(params[0], ResolvedParam::Metadata(TypeDescriptor::named("Number")));
  assert_eq!(params[1].injector().unwrap().key().as_str(), "userServiceToken");
  assert!(matches!(container.get::<Foo>(), Err(Error::NativeTypeParam { index: 0, .. })));
}

// --- Configuration ---

#[test]
fn test_config_defaults_apply_to_placeholders() {
  // Arrange
  let config = ContainerConfig {
    default_entity_options: EntityOptions { global: true },
    ..ContainerConfig::default()
  };
  let container = Container::with_config(metadata(), config);

  // Act
  container
    .add_injector(Injector::constructor::<Foo>(0, "retryCount"))
    .unwrap();

  // Assert
  assert_eq!(container.options::<Foo>(), Some(EntityOptions { global: true }));
  // Unactivated entities are never reported as global registrations.
  assert!(container.global_targets().is_empty());
}

#[test]
fn test_standard_native_policy_allows_array() {
  // Arrange
  struct Batch;
  let metadata = MetadataTable::builder()
    .constructor::<Batch>([TypeDescriptor::named("Array")])
    .build();
  let config = ContainerConfig {
    native_types: NativeTypePolicy::Standard,
    ..ContainerConfig::default()
  };
  let standard = Container::with_config(metadata, config);
  standard.register_service::<Batch>(EntityOptions::default());

  // Act & Assert
  assert_eq!(standard.get::<Batch>().unwrap().len(), 1);
}

#[test]
fn test_config_loaded_from_file() {
  // Arrange
  let mut file = tempfile::NamedTempFile::new().unwrap();
  writeln!(file, "native_types: standard").unwrap();
  writeln!(file, "default_entity_options:").unwrap();
  writeln!(file, "  global: true").unwrap();

  // Act
  let config = ContainerConfig::from_file(file.path()).unwrap();

  // Assert
  assert_eq!(config.native_types, NativeTypePolicy::Standard);
  assert!(config.default_entity_options.global);
}

#[test]
fn test_config_from_missing_file_fails() {
  let dir = tempfile::tempdir().unwrap();

  let err = ContainerConfig::from_file(&dir.path().join("fibre_inject.yaml")).unwrap_err();

  assert!(matches!(err, Error::ConfigRead(_)));
}

// --- Sharing ---

#[test]
fn test_container_is_shared_across_threads_after_bootstrap() {
  // Arrange
  let container = Arc::new(Container::new(metadata()));
  container.register_service::<UserService>(EntityOptions::default());

  // Act
  let results: Vec<_> = thread::scope(|s| {
    let handles: Vec<_> = (0..8)
      .map(|_| {
        let container = Arc::clone(&container);
        s.spawn(move || container.get::<UserService>().unwrap())
      })
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  // Assert
  assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_shared_provider_is_reused_by_several_containers() {
  let provider: fibre_inject::SharedProvider = Arc::new(metadata());
  let first = Container::from_shared(Arc::clone(&provider), ContainerConfig::default());
  let second = Container::from_shared(provider, ContainerConfig::default());

  first.register_service::<Repository>(EntityOptions::default());

  assert!(first.get::<Repository>().is_ok());
  assert!(matches!(
    second.get::<Repository>(),
    Err(Error::EntityNotRegistered { .. })
  ));
}

// --- Queries ---

#[test]
fn test_queries_by_type_and_by_target_agree() {
  let container = Container::new(metadata());
  container.register_service::<Repository>(EntityOptions { global: true });
  container
    .add_injector(Injector::constructor::<Foo>(1, "userServiceToken"))
    .unwrap();
  let repository = TargetId::of::<Repository>();
  let foo = TargetId::of::<Foo>();

  assert!(container.contains::<Foo>() && container.contains_target(foo));
  assert!(container.is_activated::<Repository>() && container.is_activated_target(repository));
  assert!(!container.is_activated::<Foo>() && !container.is_activated_target(foo));
  assert_eq!(container.options::<Repository>(), container.options_target(repository));
  assert_eq!(container.options::<Unknown>(), None);
  assert!(matches!(
    container.get_method_target(foo, "load"),
    Err(Error::EntityNotRegistered { target }) if target == foo
  ));
}

#[test]
fn test_container_debug_reports_entity_count() {
  let container = Container::new(metadata());
  container.register_service::<Repository>(EntityOptions::default());

  let rendered = format!("{container:?}");

  assert!(rendered.starts_with("Container { entities: 1"), "{rendered}");
}
