//! Cross-frontend primitives for presenting a game dashboard.
//!
//! Houses the observable player list, view-model types, and event handling
//! that both the CLI and future graphical clients can reuse.
pub mod event;
pub mod frontend;
pub mod observable;
pub mod view_model;

pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use observable::{ListChange, ObservableList, SubscriptionId};
pub use view_model::{DashboardViewModel, GameOverview, PlayersViewModel};
