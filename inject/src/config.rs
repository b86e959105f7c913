//! Container configuration, loadable from YAML.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::entity::EntityOptions;
use crate::error::{Error, Result};
use crate::native::{NativeTypePolicy, NativeTypes};

/// Settings a [`Container`](crate::Container) is built with.
///
/// ```yaml
/// native_types: standard
/// default_entity_options:
///   global: true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
  /// Which primitive types constructor parameters may not resolve to.
  pub native_types: NativeTypePolicy,
  /// Options entities carry before they are activated.
  pub default_entity_options: EntityOptions,
}

impl ContainerConfig {
  pub fn from_yaml_str(source: &str) -> Result<Self> {
    serde_yaml::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  pub fn from_file(path: &Path) -> Result<Self> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    serde_yaml::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  pub fn natives(&self) -> NativeTypes {
    self.native_types.into()
  }
}
