// ABOUTME: Main application structure: routing, state and event handling

pub mod events;
pub mod router;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use router::Route;
pub use state::{App, AppState, AsyncAction, AsyncOutcome, Notification, NotificationType};
