use std::any::Any;

use crate::core::{member_name, InjectionKey, SlotKey, TargetId};

/// An explicit override for one parameter slot.
///
/// An injector directs the slot `(property_name, index)` of `target` to be
/// satisfied by `key` instead of the parameter's declared type. Injectors are
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Injector {
  target: TargetId,
  property_name: Option<String>,
  index: usize,
  key: InjectionKey,
}

impl Injector {
  /// Creates an injector. A `property_name` of `"constructor"` addresses the
  /// constructor, the same as `None`.
  pub fn new(
    target: TargetId,
    property_name: Option<&str>,
    index: usize,
    key: impl Into<InjectionKey>,
  ) -> Self {
    Self {
      target,
      property_name: member_name(property_name).map(str::to_owned),
      index,
      key: key.into(),
    }
  }

  /// Injector for constructor parameter `index` of `T`.
  pub fn constructor<T: ?Sized + Any>(index: usize, key: impl Into<InjectionKey>) -> Self {
    Self::new(TargetId::of::<T>(), None, index, key)
  }

  /// Injector for parameter `index` of method `method` on `T`.
  pub fn method<T: ?Sized + Any>(
    method: &str,
    index: usize,
    key: impl Into<InjectionKey>,
  ) -> Self {
    Self::new(TargetId::of::<T>(), Some(method), index, key)
  }

  pub fn target(&self) -> TargetId {
    self.target
  }

  pub fn property_name(&self) -> Option<&str> {
    self.property_name.as_deref()
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn key(&self) -> &InjectionKey {
    &self.key
  }

  pub fn is_constructor(&self) -> bool {
    self.property_name.is_none()
  }

  pub fn slot_key(&self) -> SlotKey {
    SlotKey {
      property_name: self.property_name.clone(),
      index: self.index,
    }
  }
}
