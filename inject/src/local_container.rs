// inject/src/local_container.rs

//! A single-threaded, non-thread-safe variant of the container.

use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::config::ContainerConfig;
use crate::core::TargetId;
use crate::entity::{Entity, EntityOptions, ResolvedParam};
use crate::error::{Error, Result};
use crate::injector::Injector;
use crate::metadata::TypeMetadataProvider;
use crate::resolver::ParamResolver;

/// A single-threaded registry of DI-managed classes.
///
/// It follows the same registration and resolution contract as
/// [`Container`](crate::Container), but stores entities in a plain
/// `HashMap` and the provider behind an `Rc`, so providers that are not
/// `Send` or `Sync` can be used.
///
/// # Note on API
///
/// Registration methods take `&mut self` because `HashMap` does not offer
/// interior mutability.
pub struct LocalContainer {
  entities: HashMap<TargetId, Entity>,
  resolver: ParamResolver<Rc<dyn TypeMetadataProvider>>,
  defaults: EntityOptions,
}

impl LocalContainer {
  pub fn new(provider: impl TypeMetadataProvider + 'static) -> Self {
    Self::with_config(provider, ContainerConfig::default())
  }

  pub fn with_config(provider: impl TypeMetadataProvider + 'static, config: ContainerConfig) -> Self {
    let provider: Rc<dyn TypeMetadataProvider> = Rc::new(provider);
    Self {
      entities: HashMap::new(),
      resolver: ParamResolver::new(provider, config.natives()),
      defaults: config.default_entity_options,
    }
  }

  pub fn default_options(&self) -> EntityOptions {
    self.defaults
  }

  // --- Registration ---

  /// Inserts a new entity, rejecting targets that already have one.
  pub fn add_entity(&mut self, entity: Entity) -> Result<()> {
    let target = entity.target();
    match self.entities.entry(target) {
      Entry::Occupied(_) => {
        debug!(entity = %target, "Rejected duplicate entity");
        Err(Error::DuplicateEntity { target })
      }
      Entry::Vacant(slot) => {
        slot.insert(entity);
        Ok(())
      }
    }
  }

  pub fn add_injector(&mut self, injector: Injector) -> Result<()> {
    let target = injector.target();
    let defaults = self.defaults;
    self
      .entities
      .entry(target)
      .or_insert_with(|| Entity::with_defaults(target, defaults))
      .add_injector(injector)
  }

  pub fn register_service<T: ?Sized + Any>(&mut self, options: EntityOptions) {
    self.register_target(TargetId::of::<T>(), options);
  }

  pub fn register_default_service<T: ?Sized + Any>(&mut self) {
    self.register_target(TargetId::of::<T>(), self.defaults);
  }

  pub fn register_target(&mut self, target: TargetId, options: EntityOptions) {
    let defaults = self.defaults;
    self
      .entities
      .entry(target)
      .or_insert_with(|| Entity::with_defaults(target, defaults))
      .activate(options);
  }

  // --- Resolution ---

  pub fn get<T: ?Sized + Any>(&self) -> Result<Vec<ResolvedParam>> {
    self.get_target(TargetId::of::<T>())
  }

  pub fn get_target(&self, target: TargetId) -> Result<Vec<ResolvedParam>> {
    let entity = self.entity(target)?;
    self.resolver.instance_params(entity)
  }

  pub fn get_method<T: ?Sized + Any>(&self, method: &str) -> Result<Vec<ResolvedParam>> {
    self.get_method_target(TargetId::of::<T>(), method)
  }

  pub fn get_method_target(&self, target: TargetId, method: &str) -> Result<Vec<ResolvedParam>> {
    let entity = self.entity(target)?;
    self.resolver.method_params(entity, method)
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
      .map_or(false, Entity::is_activated)
  }

  pub fn options<T: ?Sized + Any>(&self) -> Option<EntityOptions> {
    self.options_target(TargetId::of::<T>())
  }

  pub fn options_target(&self, target: TargetId) -> Option<EntityOptions> {
    self.entities.get(&target).map(Entity::options)
  }

  /// Activated entities registered with `global: true`.
  pub fn global_targets(&self) -> Vec<TargetId> {
    self
      .entities
      .values()
      .filter(|entity| entity.is_activated() && entity.options().global)
      .map(Entity::target)
      .collect()
  }

  pub fn len(&self) -> usize {
    self.entities.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entities.is_empty()
  }

  fn entity(&self, target: TargetId) -> Result<&Entity> {
    self
      .entities
      .get(&target)
      .ok_or(Error::EntityNotRegistered { target })
  }
}

impl fmt::Debug for LocalContainer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LocalContainer")
      .field("entities", &self.entities.len())
      .field("natives", self.resolver.natives())
      .field("defaults", &self.defaults)
      .finish_non_exhaustive()
  }
}
