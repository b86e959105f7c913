//! Public macros for declaring services and injectors.

/// Registers a type as a DI-managed service and activates its entity.
///
/// This is the registration trigger: it stands where a class-level
/// annotation would, and is meant to be called from bootstrap code. Without
/// options the container's default entity options are used.
///
/// # Examples
///
/// ```
/// use fibre_inject::{register_service, Container, MetadataTable};
///
/// struct Mailer;
///
/// let container = Container::new(MetadataTable::default());
/// register_service!(container, Mailer);
/// register_service!(container, Mailer, global = true);
///
/// assert!(container.options::<Mailer>().unwrap().global);
/// ```
#[macro_export]
macro_rules! register_service {
  // Arm for activating with explicit options: register_service!(c, MyService, global = true)
  ($container:expr, $target:ty, global = $global:expr) => {
    $container.register_service::<$target>($crate::EntityOptions { global: $global })
  };

  // Arm for activating with the container defaults: register_service!(c, MyService)
  ($container:expr, $target:ty) => {
    $container.register_default_service::<$target>()
  };
}

/// Registers an injector and evaluates to the container's `Result<()>`.
///
/// `Type, index` addresses a constructor parameter and `Type::method, index`
/// a method parameter. The unbracketed forms take a bare type name: a path
/// such as `models::Mailer` would be read as method `Mailer` on `models`.
/// Wrap path-qualified types in angle brackets instead, as in
/// `<models::Mailer>` or `<models::Mailer>::send`.
///
/// # Examples
///
/// ```
/// use fibre_inject::{inject, Container, MetadataTable};
///
/// struct Mailer;
///
/// mod models {
///   pub struct Outbox;
/// }
///
/// let container = Container::new(MetadataTable::default());
/// inject!(container, Mailer, 0 => "smtp_transport").unwrap();
/// inject!(container, Mailer::send, 1 => "template_engine").unwrap();
/// inject!(container, <models::Outbox>, 0 => "queue").unwrap();
/// inject!(container, <models::Outbox>::flush, 0 => "batch_size").unwrap();
///
/// // The same slot cannot be declared twice.
/// assert!(inject!(container, Mailer, 0 => "other_transport").is_err());
/// ```
#[macro_export]
macro_rules! inject {
  // Arm for method parameters of a path-qualified type: inject!(c, <a::MyService>::method, 0 => "key")
  ($container:expr, < $target:ty > :: $method:ident, $index:expr => $key:expr) => {
    $container.add_injector($crate::Injector::method::<$target>(
      stringify!($method),
      $index,
      $key,
    ))
  };

  // Arm for constructor parameters of a path-qualified type: inject!(c, <a::MyService>, 0 => "key")
  ($container:expr, < $target:ty >, $index:expr => $key:expr) => {
    $container.add_injector($crate::Injector::constructor::<$target>($index, $key))
  };

  // Arm for method parameters: inject!(c, MyService::method, 0 => "key")
  // `ty` may not be followed by `::`, so the type is captured as an ident.
  ($container:expr, $target:ident :: $method:ident, $index:expr => $key:expr) => {
    $container.add_injector($crate::Injector::method::<$target>(
      stringify!($method),
      $index,
      $key,
    ))
  };

  // Arm for constructor parameters: inject!(c, MyService, 0 => "key")
  ($container:expr, $target:ty, $index:expr => $key:expr) => {
    $container.add_injector($crate::Injector::constructor::<$target>($index, $key))
  };
}
