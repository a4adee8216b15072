//! Snapshot acquisition runtime for the dashboard.
//!
//! Owns the update cycle: a background worker periodically fetches a fresh
//! [`game_core::Game`] from a [`GameSource`], validates it, and broadcasts
//! change events to subscribers. Clients interact through a clonable
//! [`RuntimeHandle`] (subscribe, query the latest snapshot, force a refresh).
pub mod config;
pub mod error;
pub mod event;
pub mod handle;
pub mod runtime;
pub mod source;
pub mod sources;

mod worker;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use event::GameEvent;
pub use handle::RuntimeHandle;
pub use runtime::Runtime;
pub use source::GameSource;
pub use sources::{FixtureSource, SimulatedSource};
