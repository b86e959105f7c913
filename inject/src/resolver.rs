//! Couples a metadata provider with the native type policy and decides which
//! injectors take part in each resolution.

use crate::entity::{Entity, ResolvedParam};
use crate::error::Result;
use crate::metadata::TypeMetadataProvider;
use crate::native::NativeTypes;

/// Resolves parameter lists for entities against one metadata provider.
///
/// `P` is usually `Arc<dyn TypeMetadataProvider + Send + Sync>` inside a
/// [`Container`](crate::Container), but any provider (or a reference to one)
/// works.
pub struct ParamResolver<P: ?Sized> {
  natives: NativeTypes,
  provider: P,
}

impl<P: TypeMetadataProvider> ParamResolver<P> {
  pub fn new(provider: P, natives: NativeTypes) -> Self {
    Self { natives, provider }
  }
}

impl<P: TypeMetadataProvider + ?Sized> ParamResolver<P> {
  pub fn provider(&self) -> &P {
    &self.provider
  }

  pub fn natives(&self) -> &NativeTypes {
    &self.natives
  }

  /// Constructor parameters of `entity`, checked against the native types.
  pub fn instance_params(&self, entity: &Entity) -> Result<Vec<ResolvedParam>> {
    entity.get_instance_params(&self.provider, &self.natives)
  }

  /// Parameters of `method` on `entity`, merged with the injectors
  /// registered for exactly that method.
  ///
  /// `"constructor"` names the constructor. It resolves like
  /// [`instance_params`](Self::instance_params) without the native check.
  pub fn method_params(&self, entity: &Entity, method: &str) -> Result<Vec<ResolvedParam>> {
    entity.get_method_params(&self.provider, Some(method), entity.injectors_for(Some(method)))
  }
}
