//! The T3D writer handle.

use crate::config::{self, Config};
use crate::package::Package;

/// T3D writer bound to one package.
///
/// Holds no render state of its own: every `render_*` call starts a fresh
/// session, so one writer can serve many calls, including concurrent ones
/// when the package is `Sync`.
pub struct T3d<'p, P: Package + ?Sized> {
    package: &'p P,
    config: Config,
}

impl<'p, P: Package + ?Sized> T3d<'p, P> {
    /// Create a writer using the global configuration.
    pub fn new(package: &'p P) -> Self {
        Self::with_config(package, config::get().clone())
    }

    /// Create a writer with an explicit configuration.
    pub fn with_config(package: &'p P, config: Config) -> Self {
        Self { package, config }
    }

    /// The package being rendered.
    pub fn package(&self) -> &'p P {
        self.package
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Line break followed by `indent` levels of indentation.
    pub(crate) fn new_line(&self, indent: usize) -> String {
        self.config.new_line(indent)
    }
}
