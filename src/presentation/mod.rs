pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

pub use config::{Settings, SettingsError};
pub use router::create_router;
pub use state::AppState;
