//! # switchboard-core
//!
//! Core traits for the Switchboard config-driven event dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only defines handlers and does not need the configuration reader or
//! registry from `switchboard-std`.
//!
//! # Pieces
//!
//! ## [`EventData`]
//!
//! The counter handed to each delegate. It holds the number of delegates
//! invoked so far, the current one included.
//!
//! ## [`Delegate`]
//!
//! Anything callable with `&mut EventData`. Functions and closures qualify
//! through a blanket implementation; [`BoxDelegate`] is the owned form a
//! registry stores.
//!
//! ## [`HandlerDescriptor`]
//!
//! A `const`-constructible pairing of a configuration name and a function.
//! An ordered slice of descriptors is the table a registry is built from.
//!
//! ## [`Dispatcher`]
//!
//! Walks a sequence of delegates, advancing the counter before each call.
//!
//! # Error Types
//!
//! - [`SwitchboardError`] - Top-level error type
//! - [`ConfigError`] - Configuration loading errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod delegate;
mod dispatcher;
mod error;
mod handler;
mod message;

// Re-exports
pub use delegate::{BoxDelegate, Delegate};
pub use dispatcher::Dispatcher;
pub use error::{BoxError, ConfigError, SwitchboardError};
pub use handler::{HandlerDescriptor, HandlerFn};
pub use message::EventData;
