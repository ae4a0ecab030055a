//! # switchboard - Config-Driven Event Dispatch
//!
//! `switchboard` registers a fixed table of handler functions according to
//! flags in an XML file, then invokes the registered handlers in table order
//! with a running count.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use switchboard::prelude::*;
//!
//! fn ping(data: &mut EventData) {
//!     println!("ping() - {data}");
//! }
//!
//! const TABLE: &[HandlerDescriptor] = &[HandlerDescriptor::new("Ping", ping)];
//!
//! let config = HandlerConfig::load("handlers.xml");
//! let registry = Registry::from_descriptors(TABLE, &config);
//! registry.dispatch();
//! ```
//!
//! The `switchboard` binary does exactly this with [`handlers::HANDLERS`] and
//! `handlers.xml` from the working directory.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

use std::path::Path;

pub use switchboard_core::{
    // Delegates
    BoxDelegate,
    // Errors
    BoxError,
    ConfigError,
    Delegate,
    // Dispatch
    Dispatcher,
    // Data
    EventData,
    HandlerDescriptor,
    HandlerFn,
    SwitchboardError,
};

pub use switchboard_std::{
    DelegateEntry, HandlerConfig, LoggingDelegate, Registry, RegistryBuilder,
    SequentialDispatcher,
};

pub mod handlers;
pub mod logging;

/// Configuration reading.
pub mod config {
    pub use switchboard_std::config::{
        DEFAULT_CONFIG_FILE, ENABLE_ATTRIBUTE, HandlerConfig, ROOT_ELEMENT, parse_flag,
    };
}

/// Testing utilities.
pub mod testing {
    pub use switchboard_std::testing::{CallLog, LoggedCall, RecordingDelegate};
}

/// Prelude module - common imports for Switchboard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchboard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Delegate, Dispatcher, EventData, HandlerConfig, HandlerDescriptor, Registry,
        RegistryBuilder, SequentialDispatcher,
    };
}

/// Loads the configuration at `path`, registers the enabled entries of
/// [`handlers::HANDLERS`] and dispatches them.
///
/// Returns the number of handlers invoked. A missing or malformed file
/// registers nothing.
pub fn run(path: impl AsRef<Path>) -> EventData {
    let config = HandlerConfig::load(path);
    let registry = Registry::from_descriptors(handlers::HANDLERS, &config);
    drop(config);
    registry.dispatch()
}

/// Like [`run`], but a configuration that [`HandlerConfig::load_strict`]
/// rejects is returned as an error and nothing is dispatched.
pub fn run_strict(path: impl AsRef<Path>) -> Result<EventData, SwitchboardError> {
    let config = HandlerConfig::load_strict(path)?;
    let registry = Registry::from_descriptors(handlers::HANDLERS, &config);
    drop(config);
    Ok(registry.dispatch())
}
