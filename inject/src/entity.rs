//! The per-class registration record and the parameter merge algorithm.

use std::any::Any;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{member_name, method_label, SlotKey, TargetId};
use crate::error::{Error, Result};
use crate::injector::Injector;
use crate::metadata::{TypeDescriptor, TypeMetadataProvider};
use crate::native::NativeTypes;

/// Options an entity is activated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityOptions {
  /// Whether the registration applies container-wide.
  pub global: bool,
}

/// One resolved parameter position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedParam {
  /// The declared type, as captured by the metadata provider.
  Metadata(TypeDescriptor),
  /// A registered override for this position.
  Injector(Injector),
}

impl ResolvedParam {
  pub fn is_injector(&self) -> bool {
    matches!(self, ResolvedParam::Injector(_))
  }

  pub fn injector(&self) -> Option<&Injector> {
    match self {
      ResolvedParam::Injector(injector) => Some(injector),
      ResolvedParam::Metadata(_) => None,
    }
  }

  pub fn type_descriptor(&self) -> Option<&TypeDescriptor> {
    match self {
      ResolvedParam::Metadata(descriptor) => Some(descriptor),
      ResolvedParam::Injector(_) => None,
    }
  }
}

/// Registration state for one class.
///
/// An entity starts unactivated, typically because an injector was declared
/// before the class itself was registered. Resolution is only legal once
/// [`activate`](Entity::activate) has been called.
#[derive(Debug, Clone)]
pub struct Entity {
  target: TargetId,
  activated: bool,
  options: EntityOptions,
  // Slot -> position in `injectors`, which keeps registration order.
  slots: HashMap<SlotKey, usize>,
  injectors: Vec<Injector>,
}

impl Entity {
  /// Creates an unactivated entity with default options.
  pub fn new(target: TargetId) -> Self {
    Self::with_defaults(target, EntityOptions::default())
  }

  pub fn of<T: ?Sized + Any>() -> Self {
    Self::new(TargetId::of::<T>())
  }

  /// Creates an unactivated entity carrying `defaults` until activation.
  pub fn with_defaults(target: TargetId, defaults: EntityOptions) -> Self {
    Self {
      target,
      activated: false,
      options: defaults,
      slots: HashMap::new(),
      injectors: Vec::new(),
    }
  }

  pub fn target(&self) -> TargetId {
    self.target
  }

  pub fn options(&self) -> EntityOptions {
    self.options
  }

  pub fn is_activated(&self) -> bool {
    self.activated
  }

  /// Marks the entity as registered with `options`.
  ///
  /// Calling this again replaces the options. Registered injectors are kept.
  pub fn activate(&mut self, options: EntityOptions) {
    debug!(entity = %self.target, global = options.global, reactivated = self.activated, "Activated entity");
    self.options = options;
    self.activated = true;
  }

  /// Registers an override for the injector's slot.
  ///
  /// The injector must belong to this entity's target; that is not checked
  /// here.
  ///
  /// # Errors
  /// Returns [`Error::DuplicateInjector`] if the slot is already taken. The
  /// existing injector is left in place.
  pub fn add_injector(&mut self, injector: Injector) -> Result<()> {
    let slot = injector.slot_key();
    if self.slots.contains_key(&slot) {
      debug!(entity = %self.target, slot = ?slot, "Rejected duplicate injector");
      return Err(Error::DuplicateInjector {
        target: self.target,
        method: method_label(slot.property_name()),
        index: slot.index(),
      });
    }

    trace!(entity = %self.target, slot = ?slot, key = %injector.key(), "Registered injector");
    self.slots.insert(slot, self.injectors.len());
    self.injectors.push(injector);
    Ok(())
  }

  /// All registered injectors, in registration order.
  pub fn injectors(&self) -> impl Iterator<Item = &Injector> {
    self.injectors.iter()
  }

  /// Injectors registered for `method` (`None` or `"constructor"` for the
  /// constructor), in registration order.
  pub fn injectors_for<'a>(&'a self, method: Option<&'a str>) -> impl Iterator<Item = &'a Injector> {
    let method = member_name(method);
    self
      .injectors
      .iter()
      .filter(move |injector| injector.property_name() == method)
  }

  pub fn injector(&self, slot: &SlotKey) -> Option<&Injector> {
    self.slots.get(slot).map(|&position| &self.injectors[position])
  }

  /// Merges the declared parameters of `method` with `injectors`.
  ///
  /// `injectors` is the subset relevant to `method`; choosing it is up to
  /// the caller. The result has exactly one entry per declared parameter.
  /// A `method` of `"constructor"` reads the constructor signature.
  ///
  /// # Errors
  /// - [`Error::EntityNotRegistered`] if the entity is not activated.
  /// - [`Error::MethodNotRegistered`] if `provider` has no signature for
  ///   `method`.
  /// - [`Error::ParamIndexOutOfRange`] for the first injector, in iteration
  ///   order, whose index is past the declared parameters.
  pub fn get_method_params<'a, P>(
    &self,
    provider: &P,
    method: Option<&str>,
    injectors: impl IntoIterator<Item = &'a Injector>,
  ) -> Result<Vec<ResolvedParam>>
  where
    P: TypeMetadataProvider + ?Sized,
  {
    let method = member_name(method);
    if !self.activated {
      return Err(Error::EntityNotRegistered {
        target: self.target,
      });
    }

    let declared = provider
      .lookup(self.target, method)
      .ok_or_else(|| Error::MethodNotRegistered {
        target: self.target,
        method: method_label(method),
      })?;

    let mut params: Vec<ResolvedParam> = declared
      .iter()
      .cloned()
      .map(ResolvedParam::Metadata)
      .collect();

    let param_count = params.len();
    for injector in injectors {
      let index = injector.index();
      if index >= param_count {
        debug!(entity = %self.target, method = %method_label(method), index, param_count, "Injector index out of range");
        return Err(Error::ParamIndexOutOfRange {
          target: self.target,
          method: method_label(method),
          index,
          param_count,
        });
      }
      params[index] = ResolvedParam::Injector(injector.clone());
    }

    trace!(entity = %self.target, method = %method_label(method), params = param_count, "Resolved method params");
    Ok(params)
  }

  /// Resolves the constructor parameters using the constructor injectors.
  ///
  /// # Errors
  /// Everything [`get_method_params`](Entity::get_method_params) returns,
  /// plus [`Error::NativeTypeParam`] for the first position not covered by
  /// an injector whose declared type is in `natives`.
  pub fn get_instance_params<P>(&self, provider: &P, natives: &NativeTypes) -> Result<Vec<ResolvedParam>>
  where
    P: TypeMetadataProvider + ?Sized,
  {
    let params = self.get_method_params(provider, None, self.injectors_for(None))?;

    for (index, param) in params.iter().enumerate() {
      let ResolvedParam::Metadata(descriptor) = param else {
        continue;
      };
      if let Some(native) = natives.classify(descriptor) {
        debug!(entity = %self.target, index, native = native.name(), "Constructor param has native type");
        return Err(Error::NativeTypeParam {
          target: self.target,
          index,
          type_name: native.name().to_owned(),
        });
      }
    }

    Ok(params)
  }
}
