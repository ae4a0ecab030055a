//! # switchboard-std
//!
//! Standard implementations for the Switchboard config-driven event
//! dispatcher.
//!
//! This crate provides:
//! - **Configuration**: [`HandlerConfig`], the `<Handlers>` XML reader
//! - **Registration**: [`RegistryBuilder`] and [`Registry`]
//! - **Dispatch**: [`SequentialDispatcher`]
//! - **Standard delegates**: [`LoggingDelegate`]
//! - **Testing**: [`testing::RecordingDelegate`], [`testing::CallLog`]
//!
//! Enable the `tracing` feature to have configuration loading, registration
//! and dispatch report through `tracing`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchboard_core;

// Modules
pub mod config;
pub mod delegates;
pub mod dispatch;
pub mod registry;
pub mod testing;

pub use config::HandlerConfig;
pub use delegates::LoggingDelegate;
pub use dispatch::SequentialDispatcher;
pub use registry::{DelegateEntry, Registry, RegistryBuilder};
