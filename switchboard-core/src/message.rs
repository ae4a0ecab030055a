//! The value carried through a dispatch.

/// The counter handed to every invoked delegate.
///
/// At call time it holds the number of delegates invoked so far, including
/// the one being called, so the first delegate sees `1`.
pub type EventData = u32;
