//! Registry of enabled delegates.
//!
//! A [`RegistryBuilder`] collects delegates in registration order, skipping
//! those whose flag is off. [`RegistryBuilder::build`] freezes the result into
//! a [`Registry`] that can be dispatched.

use crate::{config::HandlerConfig, delegates::LoggingDelegate, dispatch::SequentialDispatcher};
use switchboard_core::{BoxDelegate, Delegate, Dispatcher, EventData, HandlerDescriptor};

/// A registered delegate and the name it was registered under.
pub struct DelegateEntry {
    name: &'static str,
    delegate: BoxDelegate,
}

impl DelegateEntry {
    /// Create a new entry.
    pub fn new<D: Delegate>(name: &'static str, delegate: D) -> Self {
        Self {
            name,
            delegate: Box::new(delegate),
        }
    }

    /// The registration name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The delegate.
    pub fn delegate(&self) -> &dyn Delegate {
        &*self.delegate
    }
}

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a Registry.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register_if_enabled("Foo", foo, config.is_enabled("Foo"))
///     .register_if_enabled("Bar", bar, config.is_enabled("Bar"))
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<DelegateEntry>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a delegate unconditionally.
    pub fn register<D: Delegate>(mut self, name: &'static str, delegate: D) -> Self {
        self.register_mut(name, delegate);
        self
    }

    /// Register a delegate unconditionally (mutable version).
    pub fn register_mut<D: Delegate>(&mut self, name: &'static str, delegate: D) {
        self.entries.push(DelegateEntry::new(name, delegate));
    }

    /// Register a delegate only when `enabled` is true.
    pub fn register_if_enabled<D: Delegate>(
        mut self,
        name: &'static str,
        delegate: D,
        enabled: bool,
    ) -> Self {
        self.register_if_enabled_mut(name, delegate, enabled);
        self
    }

    /// Register a delegate only when `enabled` is true (mutable version).
    pub fn register_if_enabled_mut<D: Delegate>(
        &mut self,
        name: &'static str,
        delegate: D,
        enabled: bool,
    ) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(handler = name, enabled, "registration decision");
        }
        if enabled {
            self.register_mut(name, delegate);
        }
    }

    /// Register every descriptor whose flag is on in `config`, in slice order.
    pub fn register_descriptors(
        mut self,
        descriptors: &[HandlerDescriptor],
        config: &HandlerConfig,
    ) -> Self {
        for descriptor in descriptors {
            self.register_if_enabled_mut(
                descriptor.name,
                LoggingDelegate::new(descriptor.name, descriptor.function),
                config.is_enabled(descriptor.name),
            );
        }
        self
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }

    /// Get the number of registered delegates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no delegates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry - frozen delegate collection
// ============================================================================

/// An ordered, immutable collection of delegates.
pub struct Registry {
    entries: Vec<DelegateEntry>,
}

impl Registry {
    /// Build a registry from a descriptor table and a configuration.
    pub fn from_descriptors(descriptors: &[HandlerDescriptor], config: &HandlerConfig) -> Self {
        RegistryBuilder::new()
            .register_descriptors(descriptors, config)
            .build()
    }

    /// Iterate over the delegates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Delegate> {
        self.entries.iter().map(DelegateEntry::delegate)
    }

    /// Names of the registered delegates, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(DelegateEntry::name)
    }

    /// Invoke every delegate in order and return how many ran.
    pub fn dispatch(&self) -> EventData {
        self.dispatch_with(&SequentialDispatcher)
    }

    /// Invoke the delegates through a specific dispatcher.
    pub fn dispatch_with<D: Dispatcher>(&self, dispatcher: &D) -> EventData {
        dispatcher.dispatch(self.iter())
    }

    /// Get the number of registered delegates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all entries (for advanced use).
    pub fn entries(&self) -> &[DelegateEntry] {
        &self.entries
    }
}
