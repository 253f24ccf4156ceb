// State management module
// Handles the shared, read-only application state

pub mod app_state;

pub use app_state::AppState;
