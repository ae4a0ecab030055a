//! Dispatcher core trait.

use crate::{delegate::Delegate, message::EventData};

/// Drives a sequence of delegates.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch delegates",
    label = "missing `Dispatcher` implementation",
    note = "Implement `Dispatcher::dispatch` to drive a sequence of delegates."
)]
pub trait Dispatcher {
    /// Invokes `delegates` and returns how many were invoked.
    ///
    /// Each delegate receives the running count, advanced by one before the
    /// call, so delegates observe `1, 2, 3, ...` in iteration order.
    fn dispatch<'a, I>(&self, delegates: I) -> EventData
    where
        I: IntoIterator<Item = &'a dyn Delegate>;
}
