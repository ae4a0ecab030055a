//! Compile-time handler table entries.

use crate::message::EventData;

/// Plain function signature accepted by a [`HandlerDescriptor`].
pub type HandlerFn = fn(&mut EventData);

/// Pairs a configuration lookup name with the function it enables.
///
/// Descriptors are meant to live in a `const` slice; the slice order is the
/// registration order.
///
/// # Example
///
/// ```rust
/// use switchboard_core::{EventData, HandlerDescriptor};
///
/// fn ping(_data: &mut EventData) {}
///
/// const TABLE: &[HandlerDescriptor] = &[HandlerDescriptor::new("Ping", ping)];
/// assert_eq!(TABLE[0].name, "Ping");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandlerDescriptor {
    /// Name of the configuration element that toggles this handler.
    pub name: &'static str,
    /// The handler itself.
    pub function: HandlerFn,
}

impl HandlerDescriptor {
    /// Creates a descriptor.
    pub const fn new(name: &'static str, function: HandlerFn) -> Self {
        Self { name, function }
    }
}
