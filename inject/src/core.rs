//! Identity types shared by every part of the resolver.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a DI-managed class.
///
/// Two `TargetId`s are equal only when they were created for the same type.
/// The type name is carried for diagnostics and never takes part in
/// comparisons.
#[derive(Clone, Copy)]
pub struct TargetId {
  type_id: TypeId,
  name: &'static str,
}

impl TargetId {
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  /// The fully qualified type name this identity was created from.
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TargetId {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id
  }
}

impl Eq for TargetId {}

impl Hash for TargetId {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
  }
}

impl fmt::Debug for TargetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Target({})", self.name)
  }
}

impl fmt::Display for TargetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// Identity of one parameter position: the owning method (`None` for the
/// constructor) and the zero-based index.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
  pub(crate) property_name: Option<String>,
  pub(crate) index: usize,
}

impl SlotKey {
  pub fn new(property_name: Option<&str>, index: usize) -> Self {
    Self {
      property_name: member_name(property_name).map(str::to_owned),
      index,
    }
  }

  pub fn property_name(&self) -> Option<&str> {
    self.property_name.as_deref()
  }

  pub fn index(&self) -> usize {
    self.index
  }
}

impl fmt::Debug for SlotKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Slot({}:{})", method_label(self.property_name()), self.index)
  }
}

/// Opaque lookup key naming what should be injected into a slot.
///
/// The resolver never interprets it; it is handed back untouched inside
/// [`ResolvedParam::Injector`](crate::ResolvedParam::Injector).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct InjectionKey(Cow<'static, str>);

impl InjectionKey {
  pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
    Self(key.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&'static str> for InjectionKey {
  fn from(key: &'static str) -> Self {
    Self(Cow::Borrowed(key))
  }
}

impl From<String> for InjectionKey {
  fn from(key: String) -> Self {
    Self(Cow::Owned(key))
  }
}

impl fmt::Debug for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({})", self.0)
  }
}

impl fmt::Display for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Method name that addresses the constructor.
pub const CONSTRUCTOR: &str = "constructor";

/// Normalizes a member name: [`CONSTRUCTOR`] addresses the constructor, the
/// same as `None`.
pub(crate) fn member_name(property_name: Option<&str>) -> Option<&str> {
  property_name.filter(|name| *name != CONSTRUCTOR)
}

/// Human readable label for a method slot, `constructor` when absent.
pub(crate) fn method_label(property_name: Option<&str>) -> String {
  member_name(property_name).unwrap_or(CONSTRUCTOR).to_owned()
}
