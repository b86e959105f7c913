//! The main `Container` struct and its associated methods.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::config::ContainerConfig;
use crate::core::TargetId;
use crate::entity::{Entity, EntityOptions, ResolvedParam};
use crate::error::{Error, Result};
use crate::injector::Injector;
use crate::metadata::TypeMetadataProvider;
use crate::resolver::ParamResolver;

/// A metadata provider that can be shared across threads.
pub type SharedProvider = Arc<dyn TypeMetadataProvider + Send + Sync>;

/// The registry of DI-managed classes.
///
/// Maps each class identity to its [`Entity`]. Registration happens through
/// shared references, so a container can be populated from anywhere during
/// bootstrap and then shared for resolution.
pub struct Container {
  entities: DashMap<TargetId, Entity>,
  resolver: ParamResolver<SharedProvider>,
  defaults: EntityOptions,
}

impl Container {
  /// Creates an empty container over `provider` with the default config.
  pub fn new(provider: impl TypeMetadataProvider + Send + Sync + 'static) -> Self {
    Self::with_config(provider, ContainerConfig::default())
  }

  pub fn with_config(
    provider: impl TypeMetadataProvider + Send + Sync + 'static,
    config: ContainerConfig,
  ) -> Self {
    Self::from_shared(Arc::new(provider), config)
  }

  pub fn from_shared(provider: SharedProvider, config: ContainerConfig) -> Self {
    Self {
      entities: DashMap::new(),
      resolver: ParamResolver::new(provider, config.natives()),
      defaults: config.default_entity_options,
    }
  }

  pub fn resolver(&self) -> &ParamResolver<SharedProvider> {
    &self.resolver
  }

  /// Options entities carry until they are activated.
  pub fn default_options(&self) -> EntityOptions {
    self.defaults
  }

  // --- Registration ---

  /// Inserts a new entity.
  ///
  /// # Errors
  /// Returns [`Error::DuplicateEntity`] if the target already has an entity,
  /// including an unactivated one created by [`add_injector`](Self::add_injector).
  pub fn add_entity(&self, entity: Entity) -> Result<()> {
    let target = entity.target();
    match self.entities.entry(target) {
      Entry::Occupied(_) => {
        debug!(entity = %target, "Rejected duplicate entity");
        Err(Error::DuplicateEntity { target })
      }
      Entry::Vacant(slot) => {
        debug!(entity = %target, activated = entity.is_activated(), "Added entity");
        slot.insert(entity);
        Ok(())
      }
    }
  }

  /// Registers an injector with the entity owning its target, creating an
  /// unactivated entity first if the class is not known yet.
  pub fn add_injector(&self, injector: Injector) -> Result<()> {
    let target = injector.target();
    self
      .entities
      .entry(target)
      .or_insert_with(|| Entity::with_defaults(target, self.defaults))
      .add_injector(injector)
  }

  /// Registers `T` as a DI-managed service and activates it with `options`.
  ///
  /// Injectors declared for `T` before this call are kept.
  pub fn register_service<T: ?Sized + Any>(&self, options: EntityOptions) {
    self.register_target(TargetId::of::<T>(), options);
  }

  /// Registers `T` with the container's default entity options.
  pub fn register_default_service<T: ?Sized + Any>(&self) {
    self.register_target(TargetId::of::<T>(), self.defaults);
  }

  pub fn register_target(&self, target: TargetId, options: EntityOptions) {
    self
      .entities
      .entry(target)
      .or_insert_with(|| Entity::with_defaults(target, self.defaults))
      .activate(options);
  }

  // --- Resolution ---

  /// Resolves the constructor parameter list of `T`.
  pub fn get<T: ?Sized + Any>(&self) -> Result<Vec<ResolvedParam>> {
    self.get_target(TargetId::of::<T>())
  }

  /// Resolves the constructor parameter list of `target`.
  ///
  /// # Errors
  /// [`Error::EntityNotRegistered`] if `target` was never added or never
  /// activated, otherwise anything [`Entity::get_instance_params`] returns.
  pub fn get_target(&self, target: TargetId) -> Result<Vec<ResolvedParam>> {
    let entity = self
      .entities
      .get(&target)
      .ok_or(Error::EntityNotRegistered { target })?;
    self.resolver.instance_params(&entity)
  }

  /// Resolves the parameter list of `method` on `T`.
  ///
  /// `"constructor"` names the constructor. Its parameters come back without
  /// the native check that [`get`](Self::get) applies.
  pub fn get_method<T: ?Sized + Any>(&self, method: &str) -> Result<Vec<ResolvedParam>> {
    self.get_method_target(TargetId::of::<T>(), method)
  }

  pub fn get_method_target(&self, target: TargetId, method: &str) -> Result<Vec<ResolvedParam>> {
    let entity = self
      .entities
      .get(&target)
      .ok_or(Error::EntityNotRegistered { target })?;
    self.resolver.method_params(&entity, method)
  }

  // --- Queries ---

  pub fn contains<T: ?Sized + Any>(&self) -> bool {
    self.contains_target(TargetId::of::<T>())
  }

  pub fn contains_target(&self, target: TargetId) -> bool {
    self.entities.contains_key(&target)
  }

  pub fn is_activated<T: ?Sized + Any>(&self) -> bool {
    self.is_activated_target(TargetId::of::<T>())
  }

  pub fn is_activated_target(&self, target: TargetId) -> bool {
    self
      .entities
      .get(&target)
      .map_or(false, |entity| entity.is_activated())
  }

  pub fn options<T: ?Sized + Any>(&self) -> Option<EntityOptions> {
    self.options_target(TargetId::of::<T>())
  }

  pub fn options_target(&self, target: TargetId) -> Option<EntityOptions> {
    self.entities.get(&target).map(|entity| entity.options())
  }

  /// Activated entities registered with `global: true`.
  pub fn global_targets(&self) -> Vec<TargetId> {
    self
      .entities
      .iter()
      .filter(|entity| entity.is_activated() && entity.options().global)
      .map(|entity| entity.target())
      .collect()
  }

  pub fn len(&self) -> usize {
    self.entities.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entities.is_empty()
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("entities", &self.entities.len())
      .field("natives", self.resolver.natives())
      .field("defaults", &self.defaults)
      .finish_non_exhaustive()
  }
}
