//! Cross-vendor fullscreen adapter.
//!
//! The host environment is injected through [`FullscreenHost`] (the document)
//! and [`DisplaySurface`] (the element to promote), so the same logic runs
//! against the browser binding and against test doubles.

mod vendor;

pub use vendor::{
    ACTIVE_FLAGS, EXIT_METHODS, HostMethod, REQUEST_METHODS, SUPPORT_PROBES, SupportProbe, Vendor,
    first_present,
};

use tracing::{debug, trace};

use crate::config::AdapterConfig;
use crate::error::HostError;

/// Document-like side of the host.
pub trait FullscreenHost {
    /// Loose truthiness of a document property. Missing properties are false.
    fn is_truthy(&self, property: &str) -> bool;

    /// Whether the document exposes a callable method with this name.
    fn has_method(&self, name: &str) -> bool;

    /// Invoke a document method. Only called after `has_method` said yes.
    fn call_method(&self, method: HostMethod) -> Result<(), HostError>;

    /// Whether a freshly created `tag` element exposes method `name`.
    fn element_has_method(&self, tag: &str, name: &str) -> bool;
}

/// An element that can be promoted to fullscreen.
pub trait DisplaySurface {
    fn has_method(&self, name: &str) -> bool;

    fn call_method(&self, method: HostMethod) -> Result<(), HostError>;
}

/// Outcome of [`FullscreenAdapter::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Entered(HostMethod),
    Exited(HostMethod),
    /// The host had no method for the needed direction.
    Unavailable,
}

/// Single entry point over the vendor-prefixed fullscreen APIs of a host.
#[derive(Debug, Clone)]
pub struct FullscreenAdapter<H> {
    host: H,
    config: AdapterConfig,
}

impl<H: FullscreenHost> FullscreenAdapter<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, AdapterConfig::default())
    }

    pub fn with_config(host: H, config: AdapterConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// True if any vendor capability flag or method is present.
    pub fn is_supported(&self) -> bool {
        SUPPORT_PROBES.iter().any(|probe| match *probe {
            SupportProbe::Property(name) => self.host.is_truthy(name),
            SupportProbe::ElementMethod(name) => {
                self.host.element_has_method(&self.config.probe_tag, name)
            }
        })
    }

    /// True if any vendor "currently fullscreen" flag is truthy.
    pub fn is_active(&self) -> bool {
        ACTIVE_FLAGS.iter().any(|flag| self.host.is_truthy(flag))
    }

    /// Leave fullscreen through the first exit method the document has.
    /// Returns `Ok(None)` when there is none.
    pub fn exit(&self) -> Result<Option<HostMethod>, HostError> {
        let Some(method) = first_present(&EXIT_METHODS, |m| self.host.has_method(m.name)) else {
            trace!("No exit method on document");
            return Ok(None);
        };
        debug!(method = method.name, vendor = ?method.vendor, "Exiting fullscreen");
        self.host.call_method(method)?;
        Ok(Some(method))
    }

    /// Promote `surface` through the first request method it has.
    /// Returns `Ok(None)` when there is none.
    pub fn enter<S: DisplaySurface + ?Sized>(
        &self,
        surface: &S,
    ) -> Result<Option<HostMethod>, HostError> {
        let Some(method) = first_present(&REQUEST_METHODS, |m| surface.has_method(m.name)) else {
            trace!("No request method on surface");
            return Ok(None);
        };
        debug!(method = method.name, vendor = ?method.vendor, "Entering fullscreen");
        surface.call_method(method)?;
        Ok(Some(method))
    }

    /// Exit when active, otherwise enter with `surface`. Invokes at most one
    /// host method; a host without a matching method is a no-op.
    pub fn toggle<S: DisplaySurface + ?Sized>(&self, surface: &S) -> Result<Toggle, HostError> {
        let outcome = if self.is_active() {
            self.exit()?.map(Toggle::Exited)
        } else {
            self.enter(surface)?.map(Toggle::Entered)
        };
        Ok(outcome.unwrap_or_else(|| {
            debug!("Fullscreen toggle unavailable on this host");
            Toggle::Unavailable
        }))
    }
}
