//! # Delegates
//!
//! A delegate is the unit of work a registry stores and a dispatcher calls.
//! It receives a mutable borrow of the current [`EventData`] for the length of
//! one call and returns nothing.
//!
//! Any `Fn(&mut EventData)` is a delegate, so plain functions and closures can
//! be registered directly. Implement the trait by hand when the delegate
//! carries state of its own.

use crate::message::EventData;

/// A callable bound to one handler.
///
/// # Example
///
/// ```rust
/// use switchboard_core::{Delegate, EventData};
///
/// fn announce(data: &mut EventData) {
///     println!("announce() - {data}");
/// }
///
/// let mut count: EventData = 1;
/// announce.invoke(&mut count);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Delegate`",
    label = "missing `Delegate` implementation",
    note = "Delegates are `Fn(&mut EventData)` or implement `invoke` directly."
)]
pub trait Delegate: Send + Sync + 'static {
    /// Runs the delegate with the current count.
    fn invoke(&self, data: &mut EventData);
}

/// An owned, type-erased delegate.
pub type BoxDelegate = Box<dyn Delegate>;

// Blanket impl for functions and closures
impl<F> Delegate for F
where
    F: Fn(&mut EventData) + Send + Sync + 'static,
{
    fn invoke(&self, data: &mut EventData) {
        (self)(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    fn double(data: &mut EventData) {
        *data *= 2;
    }

    #[test]
    fn plain_functions_are_delegates() {
        let mut data = 21;
        double.invoke(&mut data);
        assert_eq!(data, 42);
    }

    #[test]
    fn closures_are_delegates() {
        let seen = Arc::new(AtomicU32::new(0));
        let sink = seen.clone();
        let delegate = move |data: &mut EventData| sink.store(*data, Ordering::SeqCst);

        delegate.invoke(&mut 7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn boxed_delegates_forward() {
        let boxed: BoxDelegate = Box::new(double as fn(&mut EventData));
        let mut data = 5;
        boxed.invoke(&mut data);
        assert_eq!(data, 10);
    }
}
