//! Parameter type metadata: the descriptor shape, the provider seam, and an
//! explicitly populated table implementation.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::core::TargetId;

/// Describes the declared type of one parameter.
///
/// Only `name` is interpreted by the resolver (for native type
/// classification). A descriptor without a name is never native.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
  name: Option<Cow<'static, str>>,
  type_id: Option<TypeId>,
}

impl TypeDescriptor {
  pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
    Self {
      name: Some(name.into()),
      type_id: None,
    }
  }

  pub fn anonymous() -> Self {
    Self {
      name: None,
      type_id: None,
    }
  }

  /// Descriptor for a Rust type, named by its unqualified type name
  /// (`alloc::string::String` becomes `String`).
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      name: Some(Cow::Borrowed(short_type_name(std::any::type_name::<T>()))),
      type_id: Some(TypeId::of::<T>()),
    }
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn type_id(&self) -> Option<TypeId> {
    self.type_id
  }
}

impl fmt::Debug for TypeDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "Type({})", name),
      None => f.write_str("Type(?)"),
    }
  }
}

fn short_type_name(full: &'static str) -> &'static str {
  let path = full.split('<').next().unwrap_or(full);
  path.rsplit("::").next().unwrap_or(path)
}

/// Source of declared parameter types, captured ahead of resolution.
///
/// `lookup` returns the descriptors of the constructor (`method == None`) or
/// of the named method in strict declaration order, or `None` when nothing
/// was captured. An empty slice is a valid zero-parameter signature and is
/// distinct from `None`.
pub trait TypeMetadataProvider {
  fn lookup(&self, target: TargetId, method: Option<&str>) -> Option<&[TypeDescriptor]>;
}

impl<P: TypeMetadataProvider + ?Sized> TypeMetadataProvider for &P {
  fn lookup(&self, target: TargetId, method: Option<&str>) -> Option<&[TypeDescriptor]> {
    (**self).lookup(target, method)
  }
}

impl<P: TypeMetadataProvider + ?Sized> TypeMetadataProvider for Box<P> {
  fn lookup(&self, target: TargetId, method: Option<&str>) -> Option<&[TypeDescriptor]> {
    (**self).lookup(target, method)
  }
}

impl<P: TypeMetadataProvider + ?Sized> TypeMetadataProvider for Arc<P> {
  fn lookup(&self, target: TargetId, method: Option<&str>) -> Option<&[TypeDescriptor]> {
    (**self).lookup(target, method)
  }
}

impl<P: TypeMetadataProvider + ?Sized> TypeMetadataProvider for Rc<P> {
  fn lookup(&self, target: TargetId, method: Option<&str>) -> Option<&[TypeDescriptor]> {
    (**self).lookup(target, method)
  }
}

#[derive(Debug, Default)]
struct MemberTable {
  constructor: Option<Vec<TypeDescriptor>>,
  methods: HashMap<String, Vec<TypeDescriptor>>,
}

/// An in-memory [`TypeMetadataProvider`] populated through
/// [`MetadataTable::builder`] and read-only once built.
#[derive(Debug, Default)]
pub struct MetadataTable {
  targets: HashMap<TargetId, MemberTable>,
}

impl MetadataTable {
  pub fn builder() -> MetadataTableBuilder {
    MetadataTableBuilder::default()
  }

  /// Number of targets with at least one captured signature.
  pub fn len(&self) -> usize {
    self.targets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.targets.is_empty()
  }
}

impl TypeMetadataProvider for MetadataTable {
  fn lookup(&self, target: TargetId, method: Option<&str>) -> Option<&[TypeDescriptor]> {
    let members = self.targets.get(&target)?;
    match method {
      None => members.constructor.as_deref(),
      Some(name) => members.methods.get(name).map(Vec::as_slice),
    }
  }
}

/// Collects signatures for a [`MetadataTable`].
///
/// Recording the same `(target, method)` twice keeps the later signature.
#[derive(Debug, Default)]
pub struct MetadataTableBuilder {
  table: MetadataTable,
}

impl MetadataTableBuilder {
  pub fn constructor<T: ?Sized + Any>(
    self,
    params: impl IntoIterator<Item = TypeDescriptor>,
  ) -> Self {
    self.constructor_for(TargetId::of::<T>(), params)
  }

  pub fn constructor_for(
    mut self,
    target: TargetId,
    params: impl IntoIterator<Item = TypeDescriptor>,
  ) -> Self {
    let params: Vec<_> = params.into_iter().collect();
    debug!(entity = %target, params = params.len(), "Captured constructor metadata");
    self.table.targets.entry(target).or_default().constructor = Some(params);
    self
  }

  pub fn method<T: ?Sized + Any>(
    self,
    name: impl Into<String>,
    params: impl IntoIterator<Item = TypeDescriptor>,
  ) -> Self {
    self.method_for(TargetId::of::<T>(), name, params)
  }

  pub fn method_for(
    mut self,
    target: TargetId,
    name: impl Into<String>,
    params: impl IntoIterator<Item = TypeDescriptor>,
  ) -> Self {
    let name = name.into();
    let params: Vec<_> = params.into_iter().collect();
    debug!(entity = %target, method = %name, params = params.len(), "Captured method metadata");
    self
      .table
      .targets
      .entry(target)
      .or_default()
      .methods
      .insert(name, params);
    self
  }

  pub fn build(self) -> MetadataTable {
    self.table
  }
}
