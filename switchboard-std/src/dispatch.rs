//! Sequential dispatch.

use switchboard_core::{Delegate, Dispatcher, EventData};

/// Invokes delegates one by one in iteration order.
///
/// The counter starts at zero and is advanced before every call, so the
/// first delegate sees `1`. Each delegate gets the count through a mutable
/// borrow that ends with its call; a write through that borrow does not
/// change what the next delegate sees.
///
/// A panicking delegate is not caught.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialDispatcher;

impl Dispatcher for SequentialDispatcher {
    fn dispatch<'a, I>(&self, delegates: I) -> EventData
    where
        I: IntoIterator<Item = &'a dyn Delegate>,
    {
        let mut invoked: EventData = 0;
        for delegate in delegates {
            invoked += 1;
            let mut data = invoked;
            delegate.invoke(&mut data);
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(invoked, "dispatch finished");
        }
        invoked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, RecordingDelegate};

    #[test]
    fn counts_are_one_based_and_sequential() {
        let log = CallLog::new();
        let foo = log.delegate("Foo");
        let bar = log.delegate("Bar");
        let qux = log.delegate("Qux");
        let delegates: [&dyn Delegate; 3] = [&foo, &bar, &qux];

        let invoked = SequentialDispatcher.dispatch(delegates);

        assert_eq!(invoked, 3);
        assert_eq!(log.calls(), vec![("Foo", 1), ("Bar", 2), ("Qux", 3)]);
    }

    #[test]
    fn empty_sequence_invokes_nothing() {
        let invoked = SequentialDispatcher.dispatch(std::iter::empty::<&dyn Delegate>());
        assert_eq!(invoked, 0);
    }

    #[test]
    fn delegate_writes_do_not_skew_the_count() {
        let recorder = RecordingDelegate::new();
        let meddler = |data: &mut EventData| *data = 100;
        let delegates: [&dyn Delegate; 3] = [&meddler, &recorder, &recorder];

        let invoked = SequentialDispatcher.dispatch(delegates);

        assert_eq!(invoked, 3);
        assert_eq!(recorder.observed(), vec![2, 3]);
    }
}
