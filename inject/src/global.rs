//! The process-wide container slot.
//!
//! Unlike a lazily created global, the container here is built explicitly at
//! startup (with its metadata provider) and installed exactly once.

use crate::container::Container;
use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

static GLOBAL_CONTAINER: OnceCell<Container> = OnceCell::new();

/// Installs `container` as the global container.
///
/// # Errors
/// Returns [`Error::GlobalAlreadyInstalled`] if a container was installed
/// before; the existing one is kept.
///
/// # Examples
///
/// ```
/// use fibre_inject::{global, install_global, Container, MetadataTable};
///
/// install_global(Container::new(MetadataTable::default())).unwrap();
/// assert!(global().unwrap().is_empty());
/// ```
pub fn install_global(container: Container) -> Result<&'static Container> {
  GLOBAL_CONTAINER
    .set(container)
    .map_err(|_| Error::GlobalAlreadyInstalled)?;
  debug!("Installed global container");
  global()
}

/// Provides a reference to the installed global container.
///
/// # Errors
/// Returns [`Error::GlobalNotInstalled`] before [`install_global`] succeeds.
pub fn global() -> Result<&'static Container> {
  GLOBAL_CONTAINER.get().ok_or(Error::GlobalNotInstalled)
}
