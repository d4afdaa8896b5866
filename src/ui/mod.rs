//! Presentation layer: view state, its driver and text rendering.

pub mod input;
pub mod render;
pub mod session;
pub mod state;

pub use session::Session;
pub use state::{filter_records, transition, Effect, FormMode, UiEvent, ViewState};
