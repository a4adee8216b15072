//! Terminal UI frontend for the dashboard.
//!
//! `CliFrontend` is a pure UI layer: it receives a `RuntimeHandle`, does not
//! own the runtime, and renders whatever the view models currently hold.
mod app;
mod config;
mod event_loop;
mod input;
mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;
