//! Logging wrapper for delegates.

use switchboard_core::{Delegate, EventData};

/// Wraps a delegate and traces each invocation under the handler's name.
pub struct LoggingDelegate<D> {
    name: &'static str,
    inner: D,
}

impl<D: Delegate> LoggingDelegate<D> {
    /// Wraps `inner`, reporting it as `name`.
    pub fn new(name: &'static str, inner: D) -> Self {
        Self { name, inner }
    }

    /// The handler name this delegate reports.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<D: Delegate> Delegate for LoggingDelegate<D> {
    fn invoke(&self, data: &mut EventData) {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(handler = self.name, count = *data, "invoking handler");
        }
        self.inner.invoke(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDelegate;

    #[test]
    fn forwards_to_inner_delegate() {
        let recorder = RecordingDelegate::new();
        let delegate = LoggingDelegate::new("Foo", recorder.clone());
        assert_eq!(delegate.name(), "Foo");

        delegate.invoke(&mut 3);
        delegate.invoke(&mut 4);
        assert_eq!(recorder.observed(), vec![3, 4]);
    }
}
