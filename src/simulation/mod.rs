//! Simulation orchestration - state, actions and backup/restore sessions

pub mod actions;
pub mod session;
pub mod state;

pub use actions::{Action, ActionOutput, ActionRecord, ActionStatus};
pub use session::Session;
pub use state::Simulation;
