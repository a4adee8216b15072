//! Bundled [`crate::GameSource`] implementations.
pub mod fixture;
pub mod simulated;

pub use fixture::FixtureSource;
pub use simulated::SimulatedSource;
